use async_trait::async_trait;
use database::postgres::{QueryResult, StoreHandle, Value};
use sea_orm::DbErr;

use crate::{
    error::{MovieError, MovieResult},
    models::{CreateMovie, Movie},
    repository::MovieRepository,
};

const INSERT_MOVIE: &str =
    "INSERT INTO movies (title, description, year) VALUES ($1, $2, $3) RETURNING id";
const SELECT_MOVIE: &str = "SELECT id, title, description, year FROM movies WHERE id = $1";
const SELECT_MOVIES: &str = "SELECT id, title, description, year FROM movies";

#[derive(Clone)]
pub struct PgMovieRepository {
    store: StoreHandle,
}

impl PgMovieRepository {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }
}

fn movie_from_row(row: &QueryResult) -> Result<Movie, DbErr> {
    Ok(Movie {
        id: row.try_get("", "id")?,
        title: row.try_get("", "title")?,
        description: row.try_get("", "description")?,
        year: row.try_get("", "year")?,
    })
}

#[async_trait]
impl MovieRepository for PgMovieRepository {
    async fn create(&self, input: CreateMovie) -> MovieResult<Movie> {
        let values = [
            Value::from(input.title.clone()),
            Value::from(input.description.clone()),
            Value::from(input.year),
        ];

        let row = self
            .store
            .query_row(INSERT_MOVIE, values)
            .await
            .map_err(MovieError::database("insert"))?
            .ok_or_else(|| MovieError::Database {
                operation: "insert",
                source: DbErr::RecordNotInserted,
            })?;
        let id: i64 = row
            .try_get("", "id")
            .map_err(MovieError::database("insert"))?;

        tracing::info!(movie_id = id, "Created movie");
        Ok(input.into_movie(id))
    }

    async fn get_by_id(&self, id: i64) -> MovieResult<Option<Movie>> {
        let row = self
            .store
            .query_row(SELECT_MOVIE, [Value::from(id)])
            .await
            .map_err(MovieError::database("get"))?;

        row.as_ref()
            .map(movie_from_row)
            .transpose()
            .map_err(MovieError::database("get"))
    }

    async fn list(&self) -> MovieResult<Vec<Movie>> {
        let rows = self
            .store
            .query_rows(SELECT_MOVIES, [])
            .await
            .map_err(MovieError::database("list"))?;

        rows.iter()
            .map(movie_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(MovieError::database("list"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::collections::BTreeMap;

    fn movie_row(id: i64, title: &str, description: Option<&str>, year: i32) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([
            ("id", Value::from(id)),
            ("title", Value::from(title.to_string())),
            ("description", Value::from(description.map(str::to_string))),
            ("year", Value::from(year)),
        ])
    }

    fn repo(db: MockDatabase) -> PgMovieRepository {
        PgMovieRepository::new(StoreHandle::new(db.into_connection()))
    }

    #[tokio::test]
    async fn test_create_returns_assigned_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[BTreeMap::from([("id", Value::from(17i64))])]]);

        let movie = repo(db)
            .create(CreateMovie::new("Унесенные призраками", 2001))
            .await
            .unwrap();

        assert_eq!(movie.id, 17);
        assert_eq!(movie.title, "Унесенные призраками");
        assert_eq!(movie.description, None);
        assert_eq!(movie.year, 2001);
    }

    #[tokio::test]
    async fn test_get_by_id_maps_nullable_description() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[movie_row(3, "Akira", None, 1988)]]);

        let movie = repo(db).get_by_id(3).await.unwrap().unwrap();
        assert_eq!(movie.description, None);
        assert_eq!(movie.year, 1988);
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()]);

        assert!(repo(db).get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_returns_every_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([[
            movie_row(1, "Akira", None, 1988),
            movie_row(2, "Paprika", Some("Satoshi Kon"), 2006),
        ]]);

        let movies = repo(db).list().await.unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[1].description.as_deref(), Some("Satoshi Kon"));
    }

    #[tokio::test]
    async fn test_store_failure_names_operation() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".into())]);

        let err = repo(db).list().await.unwrap_err();
        assert!(matches!(err, MovieError::Database { operation: "list", .. }));
    }
}
