use errgroup_rail::{join, lazy, new, wrap, Error, ErrorKind};
use std::error::Error as StdError;
use std::fmt;
use std::io;

#[derive(Debug)]
struct TestError(&'static str);

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl StdError for TestError {}

#[derive(Debug)]
struct Outer {
    inner: TestError,
}

impl fmt::Display for Outer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("outer")
    }
}

impl StdError for Outer {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.inner)
    }
}

#[test]
fn new_errors_have_distinct_identities() {
    let a = new("same");
    let b = new("same");

    assert_eq!(a.to_string(), b.to_string());
    assert!(!Error::ptr_eq(&a, &b));
    assert!(!a.is(&b));
    assert_eq!(a.kind(), ErrorKind::Root);
}

#[test]
fn clones_share_identity() {
    let a = new("shared");
    let b = a.clone();

    assert!(Error::ptr_eq(&a, &b));
    assert!(a.is(&b));
    assert!(b.is(&a));
}

#[test]
fn new_keeps_message_verbatim() {
    assert_eq!(new("").to_string(), "");
    assert_eq!(new("foo\0bar").to_string(), "foo\0bar");
}

#[test]
fn is_walks_the_wrapped_chain() {
    let errs = chain(3);

    assert!(errs[0].is(&errs[0]));
    assert!(errs[1].is(&errs[0]));
    assert!(errs[2].is(&errs[0]));
    assert!(errs[2].is(&errs[1]));
    assert!(errs[2].is(&errs[2]));
    assert!(!errs[0].is(&errs[1]));

    let lookalike = wrap(errs[1].clone(), "error3").unwrap();
    assert!(!errs[2].is(&lookalike));
}

#[test]
fn cause_unwinds_one_link_at_a_time() {
    let errs = chain(128);
    let mut err = errs.last().unwrap().clone();

    for _ in 0..errs.len() - 1 {
        let next = err.cause().unwrap().clone();
        assert!(err.is(&next));
        err = next;
    }

    assert!(Error::ptr_eq(&err, &errs[0]));
    assert!(err.cause().is_none());
}

#[test]
fn joined_errors_have_no_single_cause() {
    let joined = join([new("a"), new("b")]).unwrap();

    assert!(joined.cause().is_none());
    assert!(joined.source().is_none());
    assert_eq!(joined.components().len(), 2);
}

#[test]
fn components_of_a_single_error_is_itself() {
    let err = new("solo");
    let components = err.components();

    assert_eq!(components.len(), 1);
    assert!(Error::ptr_eq(&components[0], &err));
}

#[test]
fn downcast_ref_finds_foreign_errors_anywhere_in_the_tree() {
    let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "short read");
    let err = join([
        new("unrelated"),
        wrap(lazy(move || Err(Error::foreign(eof))), "reading header").unwrap(),
    ])
    .unwrap();

    let found = err.downcast_ref::<io::Error>().unwrap();
    assert_eq!(found.kind(), io::ErrorKind::UnexpectedEof);
    assert!(err.downcast_ref::<TestError>().is_none());
}

#[test]
fn downcast_ref_walks_foreign_source_chains() {
    let outer = Outer {
        inner: TestError("inner"),
    };
    let err = wrap(Error::foreign(outer), "ctx").unwrap();

    assert_eq!(err.downcast_ref::<Outer>().unwrap().to_string(), "outer");
    assert_eq!(err.downcast_ref::<TestError>().unwrap().0, "inner");
}

#[test]
fn downcast_ref_can_extract_the_error_itself() {
    let err = wrap(new("root"), "top").unwrap();

    let own = err.downcast_ref::<Error>().unwrap();
    assert!(Error::ptr_eq(own, &err));
}

#[test]
fn foreign_of_own_error_is_identity() {
    let err = new("mine");
    let adopted = Error::foreign(err.clone());

    assert!(Error::ptr_eq(&adopted, &err));
}

#[test]
fn foreign_errors_display_and_expose_source() {
    let err = Error::foreign(Outer {
        inner: TestError("inner"),
    });

    assert_eq!(err.kind(), ErrorKind::Foreign);
    assert_eq!(err.to_string(), "outer");
    assert_eq!(err.source().unwrap().to_string(), "inner");
}

#[test]
fn conversions_build_the_expected_shapes() {
    let from_str: Error = "plain".into();
    let from_string: Error = String::from("owned").into();
    let from_io: Error = io::Error::other("disk").into();

    assert_eq!(from_str.kind(), ErrorKind::Root);
    assert_eq!(from_string.to_string(), "owned");
    assert_eq!(from_io.kind(), ErrorKind::Foreign);
    assert!(from_io.downcast_ref::<io::Error>().is_some());
}

#[test]
fn std_source_follows_wrapped_links() {
    let root = new("root");
    let err = wrap(root, "top").unwrap();

    assert_eq!(err.source().unwrap().to_string(), "root");
    assert!(err.source().unwrap().source().is_none());
}

#[test]
fn joined_display_concatenates_in_order() {
    let err = join([new("a"), wrap(new("b"), "ctx").unwrap(), new("c")]).unwrap();

    assert_eq!(err.to_string(), "a; ctx: b; c");
}

#[test]
fn alternate_display_cascades_nested_joins() {
    let inner = join([new("b"), new("c")]).unwrap();
    let err = join([new("a"), inner]).unwrap();

    let expected = concat!(
        "the following errors occurred:\n",
        " -  a\n",
        " -  the following errors occurred:\n",
        "     -  b\n",
        "     -  c",
    );
    assert_eq!(format!("{err:#}"), expected);
}

#[test]
fn alternate_display_of_wrapped_join() {
    let err = wrap(join([new("a"), new("b")]), "sync").unwrap();

    assert_eq!(format!("{err:#}"), "sync: the following errors occurred:\n -  a\n -  b");
    assert_eq!(format!("{err}"), "sync: a; b");
}

#[test]
fn debug_names_the_shape() {
    let err = wrap(new("root"), "top").unwrap();
    let rendered = format!("{err:?}");

    assert!(rendered.starts_with("Wrapped"));
    assert!(rendered.contains("Root(\"root\")"));
}

#[test]
fn error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<Error>();
}

fn chain(size: usize) -> Vec<Error> {
    let mut errs: Vec<Error> = Vec::with_capacity(size);
    for i in 1..=size {
        let next = match errs.last() {
            None => new(format!("error{i}")),
            Some(prev) => wrap(prev.clone(), &format!("error{i}")).unwrap(),
        };
        errs.push(next);
    }
    errs
}

pub mod accumulator;
