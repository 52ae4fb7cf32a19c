//! Handlers for the `/movies` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use movies_core::movie::{CreateMovie, Movie, UpdateMovie};
use movies_core::types::DbId;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::SearchParams;
use crate::state::AppState;

/// GET /api/v1/movies
pub async fn list(State(state): State<AppState>) -> Json<Vec<Movie>> {
    Json(state.movies.list_all())
}

/// GET /api/v1/movies/search?year=
///
/// Placeholder only: acknowledges the requested year without consulting the
/// store. No filtering is performed and any value, or none, is accepted.
pub async fn search(AppQuery(params): AppQuery<SearchParams>) -> String {
    format!(
        "We are searching for a movie made after year: {}",
        params.year
    )
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Movie>> {
    let movie = state.movies.get_by_id(id)?;
    Ok(Json(movie))
}

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMovie>,
) -> (StatusCode, Json<Movie>) {
    let movie = state.movies.create(input);
    tracing::info!(movie_id = movie.id, "Created movie");
    (StatusCode::CREATED, Json(movie))
}

/// DELETE /api/v1/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    state.movies.delete_by_id(id)?;
    tracing::info!(movie_id = id, "Deleted movie");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/movies/{id}
///
/// Fields present in the body overwrite the stored values; absent fields
/// are left unchanged.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateMovie>,
) -> AppResult<Json<Movie>> {
    let movie = state.movies.update(id, input)?;
    Ok(Json(movie))
}
