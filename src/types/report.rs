//! Plain-data snapshots of error trees.
//!
//! [`ErrorReport`] flattens an [`Error`] into owned strings so it can be
//! logged as a structured value or, with the `serde` feature, serialized.
//!
//! # Examples
//!
//! ```
//! use errgroup_rail::{join, wrap, Error, ErrorKind};
//!
//! let err = join([
//!     wrap(Error::new("refused"), "dial primary").unwrap(),
//!     Error::new("no route"),
//! ])
//! .unwrap();
//!
//! let report = err.report();
//! assert_eq!(report.kind, ErrorKind::Joined);
//! assert_eq!(report.children.len(), 2);
//! assert_eq!(report.children[0].message, "dial primary: refused");
//! assert_eq!(report.children[0].children[0].message, "refused");
//! ```
use crate::types::error::Repr;
use crate::types::{Error, ErrorKind};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;

/// Owned, recursive description of an error.
///
/// `children` holds the cause of a wrapped error, the components of a joined
/// error, the evaluated value of a lazy error, or the `source()` of a foreign
/// error.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
    pub children: Vec<ErrorReport>,
}

impl ErrorReport {
    pub(crate) fn from_error(error: &Error) -> Self {
        let children = match &*error.repr {
            Repr::Root(_) => Vec::new(),
            Repr::Wrapped { source, .. } => vec![Self::from_error(source)],
            Repr::Joined(components) => components.iter().map(Self::from_error).collect(),
            Repr::Lazy(lazy) => lazy.get().map(Self::from_error).into_iter().collect(),
            Repr::Foreign(inner) => inner.source().map(Self::from_source).into_iter().collect(),
        };
        Self {
            kind: error.kind(),
            message: error.to_string(),
            children,
        }
    }

    fn from_source(source: &(dyn StdError + 'static)) -> Self {
        Self {
            kind: ErrorKind::Foreign,
            message: source.to_string(),
            children: source.source().map(Self::from_source).into_iter().collect(),
        }
    }

    /// Number of reports in this tree, including the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ErrorReport::node_count).sum::<usize>()
    }
}
