//! Deferred error construction.
//!
//! This module provides [`LazyError`], the cell behind [`lazy`](crate::lazy).
//! It holds a zero-argument function and runs it the first time anything
//! inspects the error: reading its message, matching it with
//! [`Error::is`], extracting with [`Error::downcast_ref`], or walking its
//! cause. The result is memoized, and concurrent first accessors block until
//! the single evaluation finishes.
//!
//! # Examples
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use errgroup_rail::{lazy, Error};
//!
//! let calls = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&calls);
//! let err = lazy(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//!     Err(Error::new("computed"))
//! });
//!
//! assert_eq!(calls.load(Ordering::SeqCst), 0);
//! assert_eq!(err.to_string(), "computed");
//! assert_eq!(err.to_string(), "computed");
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```
use crate::types::Error;
use core::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};

type Generator = Box<dyn FnOnce() -> Result<(), Error> + Send>;

/// A once-evaluated error cell.
///
/// The generator returns `Result<(), Error>` like any operation body;
/// `Ok(())` means the lazy error materialized as "no error".
pub struct LazyError {
    generator: Mutex<Option<Generator>>,
    value: OnceLock<Option<Error>>,
}

impl LazyError {
    /// Creates a new `LazyError` from a closure.
    ///
    /// The closure is not called until the error is first inspected.
    #[inline]
    pub fn new<F>(generator: F) -> Self
    where
        F: FnOnce() -> Result<(), Error> + Send + 'static,
    {
        Self {
            generator: Mutex::new(Some(Box::new(generator))),
            value: OnceLock::new(),
        }
    }

    /// Evaluates the generator if needed and returns the memoized error.
    ///
    /// If the generator panics the panic propagates to the first caller, and
    /// every later call sees `None`; the generator never runs twice.
    pub fn get(&self) -> Option<&Error> {
        self.value
            .get_or_init(|| {
                let generator =
                    self.generator.lock().unwrap_or_else(PoisonError::into_inner).take();
                generator.and_then(|generate| generate().err())
            })
            .as_ref()
    }

    /// Returns `true` once the generator has run to completion.
    #[inline]
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.value.get().is_some()
    }
}

impl fmt::Debug for LazyError {
    /// Never forces evaluation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(Some(error)) => f.debug_tuple("Lazy").field(error).finish(),
            Some(None) => f.write_str("Lazy(<none>)"),
            None => f.write_str("Lazy(<pending>)"),
        }
    }
}
