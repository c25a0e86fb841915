//! PostgreSQL connector and utilities
//!
//! Provides pool setup, bounded startup retry, schema bootstrap and the
//! [`StoreHandle`] the repositories run their statements through.

mod bootstrap;
mod config;
mod connector;
mod health;
mod store;

pub use bootstrap::{run_bootstrap, SchemaBootstrap};
pub use config::PostgresConfig;
pub use connector::{connect, connect_from_config, connect_with_options, connect_with_retry, Connect};
pub use health::check_health;
pub use store::StoreHandle;

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr, QueryResult, Value};
