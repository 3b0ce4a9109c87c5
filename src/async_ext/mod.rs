//! Async extensions for errgroup-rail.
//!
//! [`AsyncGroup`] applies the same aggregation policy as
//! [`Group`](crate::Group) to futures running on a tokio runtime.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! errgroup-rail = { version = "0.1", features = ["async-tokio"] }
//! ```

mod tokio_group;

pub use tokio_group::AsyncGroup;
