//! Cinema gRPC Service
//!
//! Greetings and a movie catalog over gRPC, backed by PostgreSQL.
//!
//! ## Architecture
//!
//! ```text
//! Client
//!   ↓ (gRPC with Zstd compression)
//! HelloServiceImpl / MovieServiceImpl (service/)
//!   ↓ (CallGuard: connection gate + per-call deadline)
//! GreetingService / MovieService (domain layer)
//!   ↓
//! PgGreetingRepository / PgMovieRepository
//!   ↓ (StoreHandle)
//! PostgreSQL
//! ```
//!
//! ## Modules
//!
//! - `config`: Environment-driven configuration
//! - `startup`: Connect with bounded retry, bootstrap schema, open the gate
//! - `server`: Listener lifecycle and health reporting
//! - `service`: gRPC service implementations

pub mod config;
pub mod server;
pub mod service;
pub mod startup;

// Re-export for convenience
pub use config::Config;
pub use server::{run, run_with, serve};
pub use service::{CallGuard, HelloServiceImpl, MovieServiceImpl};
pub use startup::StartupSequencer;
