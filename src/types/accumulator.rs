use crate::types::{Error, ErrorVec};

/// Ordered storage for errors waiting to be folded into one.
///
/// This is the shared accumulation step behind [`join`](crate::join),
/// [`append_funcs`](crate::append_funcs) and [`Group`](crate::Group):
/// errors are kept in arrival order and folded with the join rule only when
/// the combined error is requested.
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    items: ErrorVec<Error>,
}

impl Accumulator {
    /// Creates a new empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self {
            items: ErrorVec::new(),
        }
    }

    /// Adds a single error after every error already recorded.
    #[inline]
    pub fn push(&mut self, error: Error) {
        self.items.push(error);
    }

    /// Records `error` unless `first_only` is set and something is already
    /// recorded. Returns whether the error was kept.
    #[inline]
    pub fn offer(&mut self, error: Error, first_only: bool) -> bool {
        if first_only && !self.items.is_empty() {
            return false;
        }
        self.items.push(error);
        true
    }

    /// Extends the accumulator with errors from an iterator.
    #[inline]
    pub fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        self.items.extend(iter);
    }

    /// Returns true if the accumulator is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of recorded errors.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the recorded errors in arrival order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Error> {
        self.items.iter()
    }

    /// Folds the recorded errors without consuming them.
    ///
    /// Zero errors give `None`, one error is returned verbatim (same
    /// identity), two or more become a joined error.
    #[must_use]
    pub fn to_error(&self) -> Option<Error> {
        self.clone().into_error()
    }

    /// Consumes the accumulator and folds the recorded errors.
    #[must_use]
    pub fn into_error(mut self) -> Option<Error> {
        match self.items.len() {
            0 => None,
            1 => self.items.pop(),
            _ => Some(Error::joined(self.items)),
        }
    }

    /// Consumes the accumulator and returns the underlying `ErrorVec`.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<Error> {
        self.items
    }
}

impl From<ErrorVec<Error>> for Accumulator {
    fn from(items: ErrorVec<Error>) -> Self {
        Self { items }
    }
}

impl FromIterator<Error> for Accumulator {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Accumulator {
    type Item = Error;
    type IntoIter = smallvec::IntoIter<[Error; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
