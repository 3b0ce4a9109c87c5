//! Formatting shorthands for the combinators.
//!
//! - [`macro@crate::newf`] - a root error with a `format!` message.
//! - [`macro@crate::wrapf`] - [`wrap`](crate::wrap) with a `format!` message.
//! - [`macro@crate::wrapf_append`] - [`wrap_append`](crate::wrap_append) with a
//!   `format!` message.
//! - [`macro@crate::thunks`] - boxes a list of closures into a `Vec<ErrFunc>`.
//!
//! # Examples
//!
//! ```
//! use errgroup_rail::{newf, wrapf};
//!
//! let base = newf!("expired after {}s", 30);
//! let err = wrapf!(base, "session {}", 7).unwrap();
//! assert_eq!(err.to_string(), "session 7: expired after 30s");
//! ```

/// Creates a root error whose message is built with `format!`.
///
/// # Examples
///
/// ```
/// use errgroup_rail::newf;
///
/// let err = newf!("upstream said {:?}", "something");
/// assert_eq!(err.to_string(), "upstream said \"something\"");
/// ```
#[macro_export]
macro_rules! newf {
    ($($arg:tt)*) => {
        $crate::Error::new(::std::format!($($arg)*))
    };
}

/// Wraps an error with a message built with `format!`.
///
/// An absent base stays absent. The base is returned unchanged only when
/// the format string is empty and no arguments are given; with arguments
/// the base is always wrapped, even if the formatted message is empty.
///
/// # Examples
///
/// ```
/// use errgroup_rail::{new, wrapf, Error};
///
/// let err = wrapf!(new("world"), "hello {} {}", "to", "the").unwrap();
/// assert_eq!(err.to_string(), "hello to the: world");
///
/// assert!(wrapf!(None::<Error>, "hello {}", "world").is_none());
/// assert_eq!(wrapf!(new("world"), "{}", "").unwrap().to_string(), ": world");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($base:expr, $fmt:literal $(,)?) => {
        $crate::wrap($base, &::std::format!($fmt))
    };
    ($base:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::__wrap_formatted($base, ::std::format!($fmt, $($arg)+))
    };
}

/// Appends two errors and wraps the result with a `format!` message, with
/// the same no-op rule as [`wrapf!`](crate::wrapf).
///
/// # Examples
///
/// ```
/// use errgroup_rail::{new, wrapf_append};
///
/// let err = wrapf_append!(new("a"), new("b"), "batch {}", 3).unwrap();
/// assert_eq!(err.to_string(), "batch 3: a; b");
/// ```
#[macro_export]
macro_rules! wrapf_append {
    ($left:expr, $right:expr, $($arg:tt)+) => {
        $crate::wrapf!($crate::append($left, $right), $($arg)+)
    };
}

/// Boxes each closure into an [`ErrFunc`](crate::ErrFunc) and collects them.
///
/// Closures have distinct types, so a batch of different operations needs
/// boxing before it can be handed to [`Group::add`](crate::Group::add) or
/// one of the entry points.
///
/// # Examples
///
/// ```
/// use errgroup_rail::{all, new, thunks};
///
/// let boom = new("boom");
/// let err = all(thunks![|| Ok(()), move || Err(boom)]).unwrap_err();
/// assert_eq!(err.to_string(), "boom");
/// ```
#[macro_export]
macro_rules! thunks {
    ($($f:expr),* $(,)?) => {
        {
            let fns: ::std::vec::Vec<$crate::ErrFunc> = ::std::vec![$($crate::thunk($f)),*];
            fns
        }
    };
}
