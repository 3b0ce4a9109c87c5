//! Error types and utilities.
//!
//! This module provides the [`Error`] value every combinator and group
//! produces, the [`LazyError`] cell behind deferred errors, the
//! [`Accumulator`] used to fold many errors into one, and [`ErrorReport`]
//! snapshots for structured logging.
//!
//! # Examples
//!
//! ```
//! use errgroup_rail::{join, wrap, Error, ErrorKind};
//!
//! let err = join([
//!     wrap(Error::new("connection reset"), "fetch shard 1").unwrap(),
//!     Error::new("shard 2 timed out"),
//! ])
//! .unwrap();
//!
//! assert_eq!(err.kind(), ErrorKind::Joined);
//! assert_eq!(err.to_string(), "fetch shard 1: connection reset; shard 2 timed out");
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod error;
pub mod lazy_error;
pub mod report;

pub use accumulator::Accumulator;
pub use error::{Error, ErrorKind};
pub use lazy_error::LazyError;
pub use report::ErrorReport;

/// SmallVec-backed collection used for joined components and accumulation.
///
/// Uses inline storage for up to 2 elements, the size of the most common
/// join.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Boxed operation accepted by [`Group`](crate::Group) and the combinators.
///
/// Distinct closures have distinct types; boxing them lets a batch of
/// different operations share one collection. See [`thunk`](crate::thunk)
/// and [`thunks!`](crate::thunks).
pub type ErrFunc = Box<dyn FnOnce() -> Result<(), Error> + Send + 'static>;
