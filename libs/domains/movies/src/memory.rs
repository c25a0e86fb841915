//! In-process repository for tests and local wiring without PostgreSQL.

use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::MovieResult;
use crate::models::{CreateMovie, Movie};
use crate::repository::MovieRepository;

#[derive(Debug)]
pub struct InMemoryMovieRepository {
    movies: RwLock<Vec<Movie>>,
    next_id: AtomicI64,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self {
            movies: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryMovieRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn create(&self, input: CreateMovie) -> MovieResult<Movie> {
        let movie = input.into_movie(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.movies.write().await.push(movie.clone());
        Ok(movie)
    }

    async fn get_by_id(&self, id: i64) -> MovieResult<Option<Movie>> {
        Ok(self.movies.read().await.iter().find(|m| m.id == id).cloned())
    }

    async fn list(&self) -> MovieResult<Vec<Movie>> {
        Ok(self.movies.read().await.clone())
    }
}
