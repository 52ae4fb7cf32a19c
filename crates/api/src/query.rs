//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /movies/search?year=`.
///
/// The year is echoed back verbatim, so it stays a string and may be absent.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub year: String,
}
