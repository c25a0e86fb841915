//! Greetings Domain
//!
//! Answers `SayHello` according to a [`GreetingPolicy`] chosen at deployment:
//! a read-only lookup of a greeting by language (with a fixed fallback), or
//! one of two write variants that record the caller.
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::postgres::{connect, StoreHandle};
//! use domain_greetings::{GreetingPolicy, GreetingService, PgGreetingRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = StoreHandle::new(connect("postgres://...").await?);
//! let service = GreetingService::new(PgGreetingRepository::new(store), GreetingPolicy::Lookup);
//!
//! let message = service.say_hello("Ann", "Spanish").await?;
//! assert_eq!(message, "Hola, Ann!");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{GreetingError, GreetingResult};
pub use models::{DEFAULT_GREETING, Greeting, GreetingPolicy};
pub use memory::InMemoryGreetingRepository;
pub use postgres::PgGreetingRepository;
pub use repository::GreetingRepository;
pub use service::GreetingService;
