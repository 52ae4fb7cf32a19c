pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /movies                 list (GET), create (POST)
/// /movies/search?year=    search placeholder (GET)
/// /movies/{id}            get (GET), update (PATCH), delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/movies", movies::router())
}
