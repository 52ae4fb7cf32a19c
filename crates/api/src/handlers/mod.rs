//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the shared store in [`AppState`](crate::state::AppState)
//! and let domain errors propagate as [`AppError`](crate::error::AppError).

pub mod movies;
