//! In-memory movie store.
//!
//! The store is the single source of truth for movie records. It keeps them
//! in insertion order alongside the id counter, both behind one lock so that
//! id assignment and mutations are serialized when handlers run concurrently.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::CoreError;
use crate::movie::{CreateMovie, Movie, UpdateMovie};
use crate::types::DbId;

const ENTITY: &str = "Movie";

#[derive(Debug)]
struct Inner {
    movies: Vec<Movie>,
    /// Next id to hand out. Never decremented, so ids are not reused.
    next_id: DbId,
}

/// Ordered, non-persistent collection of [`Movie`] records.
///
/// Designed to be constructed once and shared via `Arc`. The lock is never
/// held across an `.await`.
#[derive(Debug)]
pub struct MovieStore {
    inner: RwLock<Inner>,
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieStore {
    /// Create an empty store. The first movie created gets id 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                movies: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Snapshot of every movie, in insertion order.
    pub fn list_all(&self) -> Vec<Movie> {
        self.read().movies.clone()
    }

    /// Find a movie by id.
    pub fn get_by_id(&self, id: DbId) -> Result<Movie, CoreError> {
        self.read()
            .movies
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    /// Assign the next id and append the new movie.
    pub fn create(&self, input: CreateMovie) -> Movie {
        let mut inner = self.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let movie = input.into_movie(id);
        inner.movies.push(movie.clone());
        tracing::debug!(movie_id = id, title = %movie.title, "Movie created");
        movie
    }

    /// Apply a partial update in place and return the updated movie.
    pub fn update(&self, id: DbId, input: UpdateMovie) -> Result<Movie, CoreError> {
        let mut inner = self.write();
        let movie = inner
            .movies
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        input.apply_to(movie);
        tracing::debug!(movie_id = id, "Movie updated");
        Ok(movie.clone())
    }

    /// Remove a movie by id. Remaining movies keep their relative order.
    pub fn delete_by_id(&self, id: DbId) -> Result<(), CoreError> {
        let mut inner = self.write();
        let pos = inner
            .movies
            .iter()
            .position(|m| m.id == id)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        inner.movies.remove(pos);
        tracing::debug!(movie_id = id, "Movie deleted");
        Ok(())
    }

    /// Number of movies currently held.
    pub fn len(&self) -> usize {
        self.read().movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Every mutation completes before the guard drops, so a poisoned lock
    // still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
