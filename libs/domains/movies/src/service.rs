use std::sync::Arc;
use tracing::instrument;

use crate::error::{MovieError, MovieResult};
use crate::models::{CreateMovie, Movie};
use crate::repository::MovieRepository;

/// Service layer for the movie catalog
#[derive(Clone)]
pub struct MovieService<R: MovieRepository> {
    repository: Arc<R>,
}

impl<R: MovieRepository> MovieService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new movie
    #[instrument(skip(self, input), fields(movie_title = %input.title, year = input.year))]
    pub async fn create_movie(&self, input: CreateMovie) -> MovieResult<Movie> {
        self.repository.create(input).await
    }

    /// Get a movie by ID
    #[instrument(skip(self), fields(movie_id = id))]
    pub async fn get_movie(&self, id: i64) -> MovieResult<Movie> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(MovieError::NotFound(id))
    }

    /// List every movie
    #[instrument(skip(self))]
    pub async fn list_movies(&self) -> MovieResult<Vec<Movie>> {
        self.repository.list().await
    }
}
