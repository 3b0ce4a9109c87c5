//! Aggregation policy for a [`Group`](crate::Group).
//!
//! [`Options`] is a plain value: building a group copies it, and
//! [`Options::with`] returns a new value instead of mutating the receiver.
//! There is no process-wide default that can change at runtime.
//!
//! # Examples
//!
//! ```
//! use errgroup_rail::{with_first_only, with_ignored_errors, with_inline, new, Options};
//!
//! let canceled = new("canceled");
//! let eof = new("eof");
//!
//! let previous = Options::default().with([
//!     with_first_only(),
//!     with_ignored_errors([canceled]),
//! ]);
//! let updated = previous.with([Options::default().with([
//!     with_inline(),
//!     with_ignored_errors([eof]),
//! ])]);
//!
//! assert!(previous.first_only && !previous.inline);
//! assert_eq!(previous.ignored_errors.len(), 1);
//!
//! assert!(!updated.first_only && updated.inline);
//! assert_eq!(updated.ignored_errors.len(), 2);
//! ```
use crate::types::Error;

/// How a group runs operations and reduces their failures.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Report only the first non-ignored error, verbatim, instead of joining
    /// every error.
    pub first_only: bool,
    /// Errors whose chains contain any of these are discarded.
    pub ignored_errors: Vec<Error>,
    /// Run operations serially on the caller's thread inside `add`, which
    /// makes `add` blocking.
    pub inline: bool,
}

impl Options {
    /// Same as `Options::default()`: all errors, none ignored, concurrent.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of `self` with `opts` applied left to right.
    ///
    /// Later options win for boolean fields; ignored-error lists concatenate.
    #[must_use]
    pub fn with<I>(&self, opts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<GroupOption>,
    {
        let mut options = self.clone();
        for opt in opts {
            opt.into().apply(&mut options);
        }
        options
    }

    /// Returns `true` if `err` contains any ignored error in its chain.
    #[must_use]
    pub fn ignores(&self, err: &Error) -> bool {
        self.ignored_errors.iter().any(|ignored| err.is(ignored))
    }
}

/// A single change to an [`Options`] value.
#[derive(Debug, Clone)]
pub enum GroupOption {
    /// Sets `first_only`.
    FirstOnly,
    /// Sets `inline`.
    Inline,
    /// Appends to `ignored_errors`.
    IgnoredErrors(Vec<Error>),
    /// Copies both booleans from the given options and appends its ignored
    /// errors.
    Merge(Options),
}

impl GroupOption {
    fn apply(self, options: &mut Options) {
        match self {
            GroupOption::FirstOnly => options.first_only = true,
            GroupOption::Inline => options.inline = true,
            GroupOption::IgnoredErrors(errs) => options.ignored_errors.extend(errs),
            GroupOption::Merge(other) => {
                options.first_only = other.first_only;
                options.inline = other.inline;
                options.ignored_errors.extend(other.ignored_errors);
            }
        }
    }
}

impl From<Options> for GroupOption {
    #[inline]
    fn from(options: Options) -> Self {
        GroupOption::Merge(options)
    }
}

/// Makes a group report only the first error, verbatim.
#[inline]
pub fn with_first_only() -> GroupOption {
    GroupOption::FirstOnly
}

/// Makes a group ignore errors whose chains contain any of `errs`.
#[inline]
pub fn with_ignored_errors<I, E>(errs: I) -> GroupOption
where
    I: IntoIterator<Item = E>,
    E: Into<Error>,
{
    GroupOption::IgnoredErrors(errs.into_iter().map(Into::into).collect())
}

/// Makes a group run operations serially inside `add`.
#[inline]
pub fn with_inline() -> GroupOption {
    GroupOption::Inline
}
