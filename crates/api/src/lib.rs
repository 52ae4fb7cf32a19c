//! Movies API server library.
//!
//! Exposes config, state, error handling, extractors and routes so the
//! integration tests and the binary entrypoint build the same application.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod query;
pub mod router;
pub mod routes;
pub mod state;
