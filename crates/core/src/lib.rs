//! Domain types and the in-memory movie store.
//!
//! Nothing in this crate knows about HTTP; the `movies-api` crate maps
//! [`error::CoreError`] onto status codes at the boundary.

pub mod error;
pub mod movie;
pub mod store;
pub mod types;
