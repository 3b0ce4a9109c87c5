//! Free functions that build new errors from existing ones.
//!
//! Every combinator is total: an absent input (`None`) never produces a
//! failure of its own, and only present inputs contribute to the output.
//!
//! - [`new`] / [`newf!`](crate::newf) create root errors.
//! - [`wrap`] / [`wrapf!`](crate::wrapf) add a `"msg: "` layer on top of an
//!   error while keeping it as the cause.
//! - [`join`] aggregates independent errors.
//! - [`join_funcs`], [`append_func`] and [`append_funcs`] run operations and
//!   fold their failures.
//! - [`lazy`] defers building an error until it is inspected.
//!
//! # Examples
//!
//! ```
//! use errgroup_rail::{join, new, wrap};
//!
//! let disk = new("disk full");
//! let net = new("connection refused");
//!
//! let err = join([wrap(disk.clone(), "write journal"), Some(net.clone()), None]).unwrap();
//! assert_eq!(err.to_string(), "write journal: disk full; connection refused");
//! assert!(err.is(&disk));
//! assert!(err.is(&net));
//! ```
use crate::types::{Accumulator, Error, ErrFunc, LazyError};

mod funcs;

pub use funcs::{append_func, append_funcs, join_funcs};

/// Creates a root error with the given message.
///
/// Every call returns a distinct failure, even for identical text.
#[inline]
pub fn new<S: Into<String>>(text: S) -> Error {
    Error::new(text)
}

/// Layers `msg` on top of `base`, producing `"msg: <base>"`.
///
/// Returns `None` when `base` is absent and `base` itself when `msg` is
/// empty. The wrapped error keeps `base` as its cause, so
/// `wrap(e, msg).unwrap().is(&e)` always holds.
///
/// # Examples
///
/// ```
/// use errgroup_rail::{new, wrap, Error};
///
/// let base = new("world");
/// assert_eq!(wrap(base.clone(), "hello").unwrap().to_string(), "hello: world");
/// assert!(wrap(None::<Error>, "hello").is_none());
///
/// let same = wrap(base.clone(), "").unwrap();
/// assert!(Error::ptr_eq(&same, &base));
/// ```
pub fn wrap<B>(base: B, msg: &str) -> Option<Error>
where
    B: Into<Option<Error>>,
{
    let base = base.into()?;
    if msg.is_empty() {
        return Some(base);
    }
    Some(Error::wrapped(msg.to_owned(), base))
}

/// Aggregates independent errors, skipping absent entries.
///
/// Zero present errors give `None`, one is returned verbatim, and two or more
/// become a joined error over exactly the present entries, in order. Joined
/// inputs are kept as nested components, not flattened.
///
/// # Examples
///
/// ```
/// use errgroup_rail::{join, new, Error, ErrorKind};
///
/// assert!(join(Vec::<Error>::new()).is_none());
///
/// let only = new("only");
/// let same = join([None, Some(only.clone())]).unwrap();
/// assert!(Error::ptr_eq(&same, &only));
///
/// let both = join([new("a"), new("b")]).unwrap();
/// assert_eq!(both.kind(), ErrorKind::Joined);
/// assert_eq!(both.to_string(), "a; b");
/// ```
pub fn join<I, E>(errs: I) -> Option<Error>
where
    I: IntoIterator<Item = E>,
    E: Into<Option<Error>>,
{
    errs.into_iter().filter_map(Into::into).collect::<Accumulator>().into_error()
}

#[doc(hidden)]
pub fn __wrap_formatted<B>(base: B, msg: String) -> Option<Error>
where
    B: Into<Option<Error>>,
{
    Some(Error::wrapped(msg, base.into()?))
}

/// Returns an error that evaluates `f` the first time it is inspected.
///
/// `f` runs at most once, even when many threads race on first access, and
/// never runs if the error is never inspected. When `f` returns `Ok(())` the
/// result behaves like "no error": it displays as an empty string, matches
/// nothing and has no cause. Check [`Error::resolve`] before treating a
/// lazy error as a real failure.
#[inline]
pub fn lazy<F>(f: F) -> Error
where
    F: FnOnce() -> Result<(), Error> + Send + 'static,
{
    Error::from(LazyError::new(f))
}

/// Returns `right` joined after `left`; if either is absent the other is
/// returned verbatim.
#[inline]
pub fn append<L, R>(left: L, right: R) -> Option<Error>
where
    L: Into<Option<Error>>,
    R: Into<Option<Error>>,
{
    join([left.into(), right.into()])
}

/// Joins every present error in `errs`. Equivalent to [`join`].
#[inline]
pub fn combine<I, E>(errs: I) -> Option<Error>
where
    I: IntoIterator<Item = E>,
    E: Into<Option<Error>>,
{
    join(errs)
}

/// Shorthand for `wrap(append(left, right), msg)`.
///
/// # Examples
///
/// ```
/// use errgroup_rail::{new, wrap_append};
///
/// let err = wrap_append(new("a"), new("b"), "sync").unwrap();
/// assert_eq!(err.to_string(), "sync: a; b");
/// ```
#[inline]
pub fn wrap_append<L, R>(left: L, right: R, msg: &str) -> Option<Error>
where
    L: Into<Option<Error>>,
    R: Into<Option<Error>>,
{
    wrap(append(left, right), msg)
}

/// Shorthand for `wrap(combine(errs), msg)`.
#[inline]
pub fn wrap_combine<I, E>(msg: &str, errs: I) -> Option<Error>
where
    I: IntoIterator<Item = E>,
    E: Into<Option<Error>>,
{
    wrap(combine(errs), msg)
}

/// Boxes an operation so it can share a collection with other operations.
///
/// # Examples
///
/// ```
/// use errgroup_rail::{all_inline, new, thunk};
///
/// let missing = new("missing");
/// let fns = vec![thunk(|| Ok(())), thunk(move || Err(missing))];
/// assert_eq!(all_inline(fns).unwrap_err().to_string(), "missing");
/// ```
#[inline]
pub fn thunk<F>(f: F) -> ErrFunc
where
    F: FnOnce() -> Result<(), Error> + Send + 'static,
{
    Box::new(f)
}
