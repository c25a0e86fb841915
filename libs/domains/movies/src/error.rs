use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MovieError {
    #[error("Movie not found: {0}")]
    NotFound(i64),

    #[error("Failed to {operation} movies: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: DbErr,
    },
}

impl MovieError {
    pub(crate) fn database(operation: &'static str) -> impl FnOnce(DbErr) -> Self {
        move |source| MovieError::Database { operation, source }
    }
}

pub type MovieResult<T> = Result<T, MovieError>;

impl From<MovieError> for tonic::Status {
    fn from(err: MovieError) -> Self {
        match err {
            MovieError::NotFound(_) => tonic::Status::not_found(err.to_string()),
            MovieError::Database { .. } => tonic::Status::internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_carries_id() {
        let status: tonic::Status = MovieError::NotFound(999).into();
        assert_eq!(status.code(), tonic::Code::NotFound);
        assert!(status.message().contains("999"));
    }

    #[test]
    fn test_database_error_is_internal() {
        let err = MovieError::database("insert")(DbErr::Custom("disk full".into()));
        let status: tonic::Status = err.into();

        assert_eq!(status.code(), tonic::Code::Internal);
        assert!(status.message().contains("insert"));
        assert!(status.message().contains("disk full"));
    }
}
