use async_trait::async_trait;

use crate::error::MovieResult;
use crate::models::{CreateMovie, Movie};

/// Repository trait for Movie persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Insert a movie and return it with its assigned id
    async fn create(&self, input: CreateMovie) -> MovieResult<Movie>;

    /// Get a movie by ID
    async fn get_by_id(&self, id: i64) -> MovieResult<Option<Movie>>;

    /// Every stored movie, in no particular order
    async fn list(&self) -> MovieResult<Vec<Movie>>;
}
