use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GreetingError {
    #[error("Failed to {operation} greetings: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: DbErr,
    },
}

impl GreetingError {
    pub(crate) fn database(operation: &'static str) -> impl FnOnce(DbErr) -> Self {
        move |source| GreetingError::Database { operation, source }
    }
}

pub type GreetingResult<T> = Result<T, GreetingError>;

impl From<GreetingError> for tonic::Status {
    fn from(err: GreetingError) -> Self {
        tonic::Status::internal(err.to_string())
    }
}
