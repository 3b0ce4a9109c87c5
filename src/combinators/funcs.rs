use crate::combinators::join;
use crate::types::{Accumulator, Error};

/// Runs each operation in order and joins the failures.
///
/// Operations run sequentially on the calling thread. Failures keep call
/// order and are folded with the [`join`] rule. An iterator of `Option<F>`
/// skips absent operations without calling them once `.flatten()`ed.
///
/// # Examples
///
/// ```
/// use errgroup_rail::{join_funcs, new, thunk, ErrFunc};
///
/// let (a, b) = (new("a"), new("b"));
/// let fns: Vec<Option<ErrFunc>> = vec![
///     Some(thunk(move || Err(a))),
///     None,
///     Some(thunk(|| Ok(()))),
///     Some(thunk(move || Err(b))),
/// ];
///
/// let err = join_funcs(fns.into_iter().flatten()).unwrap();
/// assert_eq!(err.to_string(), "a; b");
/// ```
pub fn join_funcs<I, F>(fns: I) -> Option<Error>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Result<(), Error>,
{
    fns.into_iter().filter_map(|f| f().err()).collect::<Accumulator>().into_error()
}

/// Runs `f` and appends its failure to `err`.
///
/// - `f` absent: `err` is returned unchanged and nothing runs.
/// - `err` absent: the failure of `f` is returned as is, not joined.
/// - `f` succeeds: `err` is returned unchanged, with the same identity.
/// - otherwise: `join([err, failure])`.
///
/// # Examples
///
/// ```
/// use errgroup_rail::{append_func, new, Error};
///
/// let base = new("base");
/// let kept = append_func(base.clone(), Some(|| Ok(()))).unwrap();
/// assert!(Error::ptr_eq(&kept, &base));
///
/// let grown = append_func(base, Some(|| Err(new("more")))).unwrap();
/// assert_eq!(grown.to_string(), "base; more");
/// ```
pub fn append_func<E, F>(err: E, f: Option<F>) -> Option<Error>
where
    E: Into<Option<Error>>,
    F: FnOnce() -> Result<(), Error>,
{
    let err = err.into();
    let Some(f) = f else {
        return err;
    };
    match (err, f()) {
        (err, Ok(())) => err,
        (None, Err(failure)) => Some(failure),
        (Some(err), Err(failure)) => join([err, failure]),
    }
}

/// Runs every operation in order, appending each failure to `err`.
///
/// The result is the [`join`] of `err` (first, if present) followed by the
/// failures in call order. When no operation fails, `err` is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use errgroup_rail::{append_funcs, new, thunk};
///
/// let extra = new("flush");
/// let err = append_funcs(
///     new("close"),
///     vec![thunk(|| Ok(())), thunk(move || Err(extra))],
/// )
/// .unwrap();
/// assert_eq!(err.to_string(), "close; flush");
/// ```
pub fn append_funcs<E, I, F>(err: E, fns: I) -> Option<Error>
where
    E: Into<Option<Error>>,
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Result<(), Error>,
{
    let mut acc: Accumulator = err.into().into_iter().collect();
    acc.extend(fns.into_iter().filter_map(|f| f().err()));
    acc.into_error()
}
