//! Movies Domain
//!
//! Append-only movie catalog: create, fetch by id, list everything.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Not-found mapping, tracing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + PostgreSQL implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Movie, CreateMovie
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::postgres::{connect, StoreHandle};
//! use domain_movies::{PgMovieRepository, MovieService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = StoreHandle::new(connect("postgres://...").await?);
//!
//! let repository = PgMovieRepository::new(store);
//! let service = MovieService::new(repository);
//! # Ok(())
//! # }
//! ```

pub mod conversions;
pub mod error;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{MovieError, MovieResult};
pub use models::{CreateMovie, Movie};
pub use memory::InMemoryMovieRepository;
pub use postgres::PgMovieRepository;
pub use repository::MovieRepository;
pub use service::MovieService;
