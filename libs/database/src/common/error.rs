/// Unified database error type for all database operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// PostgreSQL-specific errors (SeaORM)
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// The store could not be reached after every startup attempt
    #[error("Database unavailable after {attempts} attempt(s): {reason}")]
    DependencyUnavailable { attempts: u32, reason: String },

    /// A call arrived while the connection was not `Ready`
    #[error("Database connection is {0}")]
    NotReady(crate::common::ConnectionState),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// A bootstrap statement failed
    #[error("Bootstrap of {app} failed at statement {index}: {source}")]
    Bootstrap {
        app: String,
        index: usize,
        #[source]
        source: sea_orm::DbErr,
    },
}

impl DatabaseError {
    /// Whether this error means the store is not reachable (as opposed to a
    /// query-level failure).
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            DatabaseError::DependencyUnavailable { .. } | DatabaseError::NotReady(_)
        )
    }
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
