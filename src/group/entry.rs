//! One-shot entry points over a freshly built [`Group`].
//!
//! Each function constructs a new group with a fixed policy, adds every
//! operation, and waits. No state survives between calls.
use super::{Group, Options};
use crate::types::Error;

/// Runs every operation in parallel and joins all failures.
///
/// # Examples
///
/// ```
/// use errgroup_rail::{all, new, thunks};
///
/// let (a, b) = (new("a"), new("b"));
/// let (ra, rb) = (a.clone(), b.clone());
/// let err = all(thunks![move || Err(ra), move || Err(rb)]).unwrap_err();
/// assert!(err.is(&a) && err.is(&b));
/// ```
pub fn all<I, F>(fns: I) -> Result<(), Error>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Result<(), Error> + Send + 'static,
{
    run(fns, Options::default())
}

/// Runs every operation serially on this thread and joins all failures in
/// call order.
pub fn all_inline<I, F>(fns: I) -> Result<(), Error>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Result<(), Error> + Send + 'static,
{
    run(
        fns,
        Options {
            inline: true,
            ..Options::default()
        },
    )
}

/// Runs every operation in parallel and returns the first failure to
/// complete, verbatim.
pub fn first<I, F>(fns: I) -> Result<(), Error>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Result<(), Error> + Send + 'static,
{
    run(
        fns,
        Options {
            first_only: true,
            ..Options::default()
        },
    )
}

/// Runs every operation serially on this thread and returns the first
/// failure, verbatim. Later operations still run.
pub fn first_inline<I, F>(fns: I) -> Result<(), Error>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Result<(), Error> + Send + 'static,
{
    run(
        fns,
        Options {
            first_only: true,
            inline: true,
            ..Options::default()
        },
    )
}

fn run<I, F>(fns: I, options: Options) -> Result<(), Error>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Result<(), Error> + Send + 'static,
{
    let group = Group::from_options(options);
    group.add(fns);
    group.wait()
}
