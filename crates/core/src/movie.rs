//! Movie entity model and DTOs.
//!
//! Request shapes are the only input checks: a body missing `title` or
//! `year`, or carrying the wrong JSON types, fails to deserialize and never
//! reaches the store.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// A single film record held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub year: i32,
    pub genres: Vec<String>,
}

/// DTO for creating a new movie. The id is assigned by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub year: i32,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// DTO for patching a movie. All fields optional; the id is immutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub genres: Option<Vec<String>>,
}

impl CreateMovie {
    /// Build the stored record under the given id.
    pub(crate) fn into_movie(self, id: DbId) -> Movie {
        Movie {
            id,
            title: self.title,
            year: self.year,
            genres: self.genres,
        }
    }
}

impl UpdateMovie {
    /// Overwrite the fields present in this patch; leave the rest untouched.
    pub(crate) fn apply_to(self, movie: &mut Movie) {
        if let Some(title) = self.title {
            movie.title = title;
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(genres) = self.genres {
            movie.genres = genres;
        }
    }
}
