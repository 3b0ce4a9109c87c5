//! Composable error values and a `Group` that runs fallible operations and
//! merges their failures.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `errgroup_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Wrapping and Joining
//!
//! ```
//! use errgroup_rail::{join, new, wrap};
//!
//! let refused = new("connection refused");
//! let err = join([wrap(refused.clone(), "dial replica 2"), Some(new("quorum lost"))]).unwrap();
//!
//! assert_eq!(err.to_string(), "dial replica 2: connection refused; quorum lost");
//! assert!(err.is(&refused));
//! ```
//!
//! ## Running a Batch
//!
//! ```
//! use errgroup_rail::{all, first_inline, new, thunks};
//!
//! let (a, b) = (new("a"), new("b"));
//! let (ra, rb) = (a.clone(), b.clone());
//! let err = all(thunks![|| Ok(()), move || Err(ra), move || Err(rb)]).unwrap_err();
//! assert!(err.is(&a) && err.is(&b));
//!
//! let (ra, rb) = (a.clone(), b.clone());
//! let err = first_inline(thunks![move || Err(ra), move || Err(rb)]).unwrap_err();
//! assert_eq!(err.to_string(), "a");
//! ```
//!
//! ## Deferred Errors
//!
//! ```
//! use errgroup_rail::{lazy, newf};
//!
//! let err = lazy(|| Err(newf!("checksum mismatch in block {}", 42)));
//! assert_eq!(err.to_string(), "checksum mismatch in block 42");
//! ```

/// Free functions that build and combine errors
pub mod combinators;
/// Group, Options and the one-shot entry points
pub mod group;
/// Formatting shorthands for the combinators
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Error value, lazy cell, accumulator and reports
pub mod types;

/// Async group for tokio runtimes (requires `async-tokio` feature)
#[cfg(feature = "async-tokio")]
pub mod async_ext;

pub use combinators::*;
pub use group::{
    all, all_inline, first, first_inline, with_first_only, with_ignored_errors, with_inline,
    Group, GroupOption, Options,
};
pub use types::{Accumulator, ErrFunc, Error, ErrorKind, ErrorReport, ErrorVec, LazyError};
