use std::sync::Arc;

use movies_core::store::MovieStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The single movie store instance for this process.
    pub movies: Arc<MovieStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(movies: Arc<MovieStore>, config: ServerConfig) -> Self {
        Self {
            movies,
            config: Arc::new(config),
        }
    }
}
