use async_trait::async_trait;
use database::postgres::{QueryResult, StoreHandle, Value};
use sea_orm::DbErr;

use crate::{
    error::{GreetingError, GreetingResult},
    models::Greeting,
    repository::GreetingRepository,
};

const FIND_BY_LANGUAGE: &str = "SELECT greeting FROM greetings WHERE language = $1 LIMIT 1";
const INSERT_GREETING: &str =
    "INSERT INTO greetings (language, greeting) VALUES ($1, $2) RETURNING id";
const SELECT_GREETINGS: &str = "SELECT id, language, greeting FROM greetings";

#[derive(Clone)]
pub struct PgGreetingRepository {
    store: StoreHandle,
}

impl PgGreetingRepository {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }
}

fn greeting_from_row(row: &QueryResult) -> Result<Greeting, DbErr> {
    Ok(Greeting {
        id: row.try_get("", "id")?,
        language: row.try_get("", "language")?,
        text: row.try_get("", "greeting")?,
    })
}

#[async_trait]
impl GreetingRepository for PgGreetingRepository {
    async fn find_by_language(&self, language: &str) -> GreetingResult<Option<String>> {
        let row = self
            .store
            .query_row(FIND_BY_LANGUAGE, [Value::from(language)])
            .await
            .map_err(GreetingError::database("look up"))?;

        row.map(|r| r.try_get::<String>("", "greeting"))
            .transpose()
            .map_err(GreetingError::database("look up"))
    }

    async fn insert(&self, language: &str, text: &str) -> GreetingResult<Greeting> {
        let row = self
            .store
            .query_row(INSERT_GREETING, [Value::from(language), Value::from(text)])
            .await
            .map_err(GreetingError::database("insert"))?
            .ok_or_else(|| GreetingError::Database {
                operation: "insert",
                source: DbErr::RecordNotInserted,
            })?;
        let id: i64 = row
            .try_get("", "id")
            .map_err(GreetingError::database("insert"))?;

        tracing::debug!(greeting_id = id, language, "Stored greeting");
        Ok(Greeting {
            id,
            language: language.to_string(),
            text: text.to_string(),
        })
    }

    async fn list(&self) -> GreetingResult<Vec<Greeting>> {
        let rows = self
            .store
            .query_rows(SELECT_GREETINGS, [])
            .await
            .map_err(GreetingError::database("list"))?;

        rows.iter()
            .map(greeting_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(GreetingError::database("list"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::collections::BTreeMap;

    fn repo(db: MockDatabase) -> PgGreetingRepository {
        PgGreetingRepository::new(StoreHandle::new(db.into_connection()))
    }

    #[tokio::test]
    async fn test_find_by_language_hit() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([[
            BTreeMap::from([("greeting", Value::from("Hola"))]),
        ]]);

        let found = repo(db).find_by_language("Spanish").await.unwrap();
        assert_eq!(found.as_deref(), Some("Hola"));
    }

    #[tokio::test]
    async fn test_find_by_language_miss() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()]);

        assert!(repo(db).find_by_language("Klingon").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_returns_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[BTreeMap::from([("id", Value::from(5i64))])]]);

        let greeting = repo(db).insert("German", "Ann").await.unwrap();
        assert_eq!(
            greeting,
            Greeting {
                id: 5,
                language: "German".into(),
                text: "Ann".into()
            }
        );
    }

    #[tokio::test]
    async fn test_list_maps_columns() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([[
            BTreeMap::from([
                ("id", Value::from(1i64)),
                ("language", Value::from("English")),
                ("greeting", Value::from("Hello")),
            ]),
        ]]);

        let all = repo(db).list().await.unwrap();
        assert_eq!(all[0].text, "Hello");
    }

    #[tokio::test]
    async fn test_store_failure_is_reported() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("relation does not exist".into())]);

        let err = repo(db).find_by_language("English").await.unwrap_err();
        assert!(err.to_string().contains("look up"));
    }
}
