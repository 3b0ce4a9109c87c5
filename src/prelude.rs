//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use errgroup_rail::prelude::*;
//!
//! fn check_all() -> Result<(), Error> {
//!     let group = Group::new([with_inline()]);
//!     group.add(thunks![|| Ok(()), || Err(new("replica 2 lagging"))]);
//!     group.wait()
//! }
//!
//! assert_eq!(check_all().unwrap_err().to_string(), "replica 2 lagging");
//! ```

// Macros
pub use crate::{newf, thunks, wrapf};

// Core types
pub use crate::group::{Group, Options};
pub use crate::types::{ErrFunc, Error};

// Combinators
pub use crate::combinators::{join, lazy, new, thunk, wrap};

// Options and entry points
pub use crate::group::{
    all, all_inline, first, first_inline, with_first_only, with_ignored_errors, with_inline,
};
