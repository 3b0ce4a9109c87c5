//! The crate's error value.
//!
//! [`Error`] is a cheaply clonable handle to one of five shapes of failure:
//!
//! - a root message created by [`Error::new`],
//! - a wrapped error that prefixes a message onto a causal predecessor,
//! - a joined error that aggregates independent failures,
//! - a lazy error whose value is produced on first inspection,
//! - a foreign error adopted from any [`std::error::Error`] implementation.
//!
//! Clones share identity: two handles cloned from the same value compare
//! equal under [`Error::ptr_eq`] and match each other under [`Error::is`].

use std::error::Error as StdError;
use std::sync::Arc;

use crate::types::report::ErrorReport;
use crate::types::{ErrorVec, LazyError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod traits;

/// Discriminant of the shape an [`Error`] was built with.
///
/// A lazy error reports [`ErrorKind::Lazy`] without being evaluated; use
/// [`Error::resolve`] to look at the value behind it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A freshly constructed message with no predecessor.
    Root,
    /// A message layered on top of a predecessor.
    Wrapped,
    /// An ordered aggregate of two or more independent errors.
    Joined,
    /// A deferred error, materialized on first use.
    Lazy,
    /// An error adopted from another `std::error::Error` implementation.
    Foreign,
}

pub(crate) enum Repr {
    Root(String),
    Wrapped { message: String, source: Error },
    Joined(ErrorVec<Error>),
    Lazy(LazyError),
    Foreign(Box<dyn StdError + Send + Sync + 'static>),
}

/// A failure value with identity, an optional causal chain, and aggregation.
#[must_use]
#[derive(Clone)]
pub struct Error {
    pub(crate) repr: Arc<Repr>,
}

impl Error {
    /// Creates a root error with the given message.
    ///
    /// Every call produces a distinct identity, even for identical text.
    ///
    /// # Examples
    ///
    /// ```
    /// use errgroup_rail::Error;
    ///
    /// let a = Error::new("boom");
    /// let b = Error::new("boom");
    /// assert_eq!(a.to_string(), b.to_string());
    /// assert!(!a.is(&b));
    /// ```
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self::from_repr(Repr::Root(message.into()))
    }

    /// Adopts any standard error as a root of a chain.
    ///
    /// [`downcast_ref`](Self::downcast_ref) finds `error` itself as well as
    /// every error in its `source()` chain. Adopting an [`Error`] returns
    /// it unchanged.
    pub fn foreign<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(error))
    }

    /// Adopts an already boxed standard error.
    pub fn from_boxed(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        match error.downcast::<Error>() {
            Ok(own) => *own,
            Err(other) => Self::from_repr(Repr::Foreign(other)),
        }
    }

    #[inline]
    pub(crate) fn wrapped(message: String, source: Error) -> Self {
        Self::from_repr(Repr::Wrapped { message, source })
    }

    /// Callers guarantee at least two components.
    #[inline]
    pub(crate) fn joined(components: ErrorVec<Error>) -> Self {
        debug_assert!(components.len() >= 2);
        Self::from_repr(Repr::Joined(components))
    }

    #[inline]
    fn from_repr(repr: Repr) -> Self {
        Self {
            repr: Arc::new(repr),
        }
    }

    /// Returns `true` if both handles refer to the same failure.
    #[inline]
    #[must_use]
    pub fn ptr_eq(this: &Error, other: &Error) -> bool {
        Arc::ptr_eq(&this.repr, &other.repr)
    }

    /// Returns the shape this error was built with.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match &*self.repr {
            Repr::Root(_) => ErrorKind::Root,
            Repr::Wrapped { .. } => ErrorKind::Wrapped,
            Repr::Joined(_) => ErrorKind::Joined,
            Repr::Lazy(_) => ErrorKind::Lazy,
            Repr::Foreign(_) => ErrorKind::Foreign,
        }
    }

    /// Returns the lazy cell behind this error, if it is a lazy error.
    #[inline]
    #[must_use]
    pub fn as_lazy(&self) -> Option<&LazyError> {
        match &*self.repr {
            Repr::Lazy(lazy) => Some(lazy),
            _ => None,
        }
    }

    /// Looks through any number of lazy layers.
    ///
    /// Evaluates pending lazy errors. Returns `None` when a lazy layer
    /// produced no error, and `Some(self)` for every other shape.
    #[must_use]
    pub fn resolve(&self) -> Option<&Error> {
        let mut current = self;
        while let Repr::Lazy(lazy) = &*current.repr {
            current = lazy.get()?;
        }
        Some(current)
    }

    /// Reports whether this error's chain contains the same failure as `target`.
    ///
    /// The walk follows wrapped predecessors, every component of a joined
    /// error, and the evaluated value of a lazy error, however deeply they are
    /// nested. A lazy `target` is compared by its evaluated value.
    ///
    /// # Examples
    ///
    /// ```
    /// use errgroup_rail::{join, wrap, Error};
    ///
    /// let root = Error::new("disk full");
    /// let other = Error::new("timeout");
    /// let wrapped = wrap(root.clone(), "saving report").unwrap();
    /// let joined = join([wrapped, other.clone()]).unwrap();
    ///
    /// assert!(joined.is(&root));
    /// assert!(joined.is(&other));
    /// assert!(!joined.is(&Error::new("disk full")));
    /// ```
    #[must_use]
    pub fn is(&self, target: &Error) -> bool {
        if self.contains(target) {
            return true;
        }
        match &*target.repr {
            Repr::Lazy(lazy) => lazy.get().is_some_and(|resolved| self.is(resolved)),
            _ => false,
        }
    }

    fn contains(&self, target: &Error) -> bool {
        if Error::ptr_eq(self, target) {
            return true;
        }
        match &*self.repr {
            Repr::Root(_) | Repr::Foreign(_) => false,
            Repr::Wrapped { source, .. } => source.contains(target),
            Repr::Joined(components) => components.iter().any(|e| e.contains(target)),
            Repr::Lazy(lazy) => lazy.get().is_some_and(|e| e.contains(target)),
        }
    }

    /// Finds the first error of type `T` in this error's chain.
    ///
    /// Walks the same links as [`is`](Self::is), and descends into the
    /// `source()` chain of foreign errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    /// use errgroup_rail::{wrap, Error};
    ///
    /// let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "short read");
    /// let err = wrap(Error::foreign(io_err), "loading index").unwrap();
    ///
    /// let found = err.downcast_ref::<io::Error>().unwrap();
    /// assert_eq!(found.kind(), io::ErrorKind::UnexpectedEof);
    /// ```
    #[must_use]
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        // lazy errors answer with the value they produce
        if let Repr::Lazy(lazy) = &*self.repr {
            return lazy.get().and_then(|e| e.downcast_ref::<T>());
        }
        if let Some(own) = (self as &(dyn StdError + 'static)).downcast_ref::<T>() {
            return Some(own);
        }
        match &*self.repr {
            Repr::Root(_) | Repr::Lazy(_) => None,
            Repr::Wrapped { source, .. } => source.downcast_ref::<T>(),
            Repr::Joined(components) => components.iter().find_map(|e| e.downcast_ref::<T>()),
            Repr::Foreign(inner) => {
                let mut current: Option<&(dyn StdError + 'static)> = Some(inner.as_ref());
                while let Some(err) = current {
                    if let Some(found) = err.downcast_ref::<T>() {
                        return Some(found);
                    }
                    current = err.source();
                }
                None
            }
        }
    }

    /// Returns the causally-prior error, one step down the chain.
    ///
    /// Only wrapped errors (directly or behind a lazy layer) have a cause;
    /// joined errors expose their parts through [`components`](Self::components).
    #[must_use]
    pub fn cause(&self) -> Option<&Error> {
        match &*self.resolve()?.repr {
            Repr::Wrapped { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Returns the independent failures this error aggregates.
    ///
    /// A joined error yields its components in order, any other error yields
    /// a single-element slice of itself, and a lazy error that produced
    /// nothing yields an empty slice.
    #[must_use]
    pub fn components(&self) -> &[Error] {
        match self.resolve() {
            Some(resolved) => match &*resolved.repr {
                Repr::Joined(components) => components.as_slice(),
                _ => core::slice::from_ref(resolved),
            },
            None => &[],
        }
    }

    /// Captures the error tree as plain data.
    #[must_use]
    pub fn report(&self) -> ErrorReport {
        ErrorReport::from_error(self)
    }
}
