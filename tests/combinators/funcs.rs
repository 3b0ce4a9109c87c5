use errgroup_rail::{append_func, append_funcs, join_funcs, new, thunk, thunks, ErrFunc, Error};
use std::cell::RefCell;

#[test]
fn join_funcs_keeps_failures_in_call_order() {
    let (a, b, c) = (new("a"), new("b"), new("c"));
    let (ra, rb, rc) = (a.clone(), b.clone(), c.clone());

    let err = join_funcs(thunks![
        move || Err(ra),
        || Ok(()),
        move || Err(rb),
        || Ok(()),
        move || Err(rc),
    ])
    .unwrap();

    assert!(err.is(&a) && err.is(&b) && err.is(&c));
    assert!(!err.is(&new("d")));
    assert_eq!(err.components().len(), 3);
    assert_eq!(err.to_string(), "a; b; c");
}

#[test]
fn join_funcs_runs_sequentially_in_order() {
    let log = RefCell::new(Vec::new());

    let result = join_funcs((0..5).map(|i| {
        let log = &log;
        move || {
            log.borrow_mut().push(i);
            Ok::<(), Error>(())
        }
    }));

    assert!(result.is_none());
    assert_eq!(*log.borrow(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn join_funcs_single_failure_is_verbatim() {
    let only = new("only");
    let value = only.clone();
    let err = join_funcs(thunks![|| Ok(()), move || Err(value)]).unwrap();

    assert!(Error::ptr_eq(&err, &only));
}

#[test]
fn join_funcs_skips_absent_thunks_without_calling_them() {
    let fns: Vec<Option<ErrFunc>> = vec![None, Some(thunk(|| Err(new("present")))), None];

    let err = join_funcs(fns.into_iter().flatten()).unwrap();
    assert_eq!(err.to_string(), "present");
    assert!(join_funcs(Vec::<ErrFunc>::new()).is_none());
}

#[test]
fn append_func_without_func_returns_err_unchanged() {
    let base = new("base");

    let kept = append_func(base.clone(), None::<ErrFunc>).unwrap();
    assert!(Error::ptr_eq(&kept, &base));
    assert!(append_func(None::<Error>, None::<ErrFunc>).is_none());
}

#[test]
fn append_func_without_err_returns_func_result_unwrapped() {
    let produced = new("produced");
    let value = produced.clone();

    let err = append_func(None::<Error>, Some(move || Err(value))).unwrap();
    assert!(Error::ptr_eq(&err, &produced));
    assert!(append_func(None::<Error>, Some(|| Ok(()))).is_none());
}

#[test]
fn append_func_success_preserves_identity() {
    let base = new("base");

    let kept = append_func(base.clone(), Some(|| Ok(()))).unwrap();
    assert!(Error::ptr_eq(&kept, &base));
}

#[test]
fn append_func_failure_joins_after_err() {
    let base = new("base");
    let extra = new("extra");
    let value = extra.clone();

    let err = append_func(base.clone(), Some(move || Err(value))).unwrap();
    assert_eq!(err.to_string(), "base; extra");
    assert!(err.is(&base) && err.is(&extra));
}

#[test]
fn append_funcs_seeds_with_err_then_appends_in_call_order() {
    let base = new("base");

    let err = append_funcs(
        base.clone(),
        thunks![|| Err(new("one")), || Ok(()), || Err(new("two"))],
    )
    .unwrap();

    assert_eq!(err.to_string(), "base; one; two");
    assert!(Error::ptr_eq(&err.components()[0], &base));
}

#[test]
fn append_funcs_without_failures_returns_err_unchanged() {
    let base = new("base");

    let kept = append_funcs(base.clone(), thunks![|| Ok(()), || Ok(())]).unwrap();
    assert!(Error::ptr_eq(&kept, &base));
}

#[test]
fn append_funcs_without_err_folds_like_join() {
    assert!(append_funcs(None::<Error>, thunks![|| Ok(())]).is_none());

    let single = append_funcs(None::<Error>, thunks![|| Ok(()), || Err(new("x"))]).unwrap();
    assert_eq!(single.to_string(), "x");
    assert_eq!(single.kind(), errgroup_rail::ErrorKind::Root);
}
