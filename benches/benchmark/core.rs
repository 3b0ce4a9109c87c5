use crate::common::{configure_criterion, roots, wrap_chain};
use criterion::{criterion_group, BenchmarkId, Criterion};
use errgroup_rail::{join, lazy, new, wrap, Error};
use std::hint::black_box;

pub fn bench_error_creation(c: &mut Criterion) {
    c.bench_function("core/new", |b| b.iter(|| black_box(new("connection reset by peer"))));

    let base = new("connection reset by peer");
    c.bench_function("core/wrap", |b| {
        b.iter(|| black_box(wrap(black_box(base.clone()), "fetch manifest")))
    });

    c.bench_function("core/clone", |b| b.iter(|| black_box(base.clone())));
}

pub fn bench_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/join");

    for count in [1, 2, 8, 64] {
        let errs = roots(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &errs, |b, errs| {
            b.iter(|| black_box(join(errs.iter().cloned())))
        });
    }

    group.finish();
}

pub fn bench_is_deep_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/is_deep_chain");

    for depth in [5, 20, 100] {
        let (root, err) = wrap_chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &err, |b, err| {
            b.iter(|| black_box(err.is(&root)))
        });
    }

    group.finish();
}

pub fn bench_display(c: &mut Criterion) {
    let (_, chained) = wrap_chain(10);
    let joined = join(roots(8)).unwrap_or_else(|| new("unreachable"));

    c.bench_function("core/display_chain", |b| b.iter(|| black_box(chained.to_string())));
    c.bench_function("core/display_joined_alternate", |b| {
        b.iter(|| black_box(format!("{joined:#}")))
    });
}

pub fn bench_lazy(c: &mut Criterion) {
    c.bench_function("core/lazy_create", |b| {
        b.iter(|| black_box(lazy(|| Err(new("deferred")))))
    });

    c.bench_function("core/lazy_create_and_force", |b| {
        b.iter(|| {
            let err: Error = lazy(|| Err(new("deferred")));
            black_box(err.to_string())
        })
    });

    let forced = lazy(|| Err(new("deferred")));
    let _ = forced.to_string();
    c.bench_function("core/lazy_forced_display", |b| b.iter(|| black_box(forced.to_string())));
}

criterion_group! {
    name = core_benches;
    config = configure_criterion();
    targets =
        bench_error_creation,
        bench_join,
        bench_is_deep_chain,
        bench_display,
        bench_lazy,
}
