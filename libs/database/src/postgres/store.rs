//! Thin capability boundary around the relational store.
//!
//! Repositories talk to PostgreSQL only through [`StoreHandle`]: parameterized
//! statements in, rows or affected-row counts out. The handle wraps SeaORM's
//! pooled [`DatabaseConnection`], so clones are cheap and share the pool.

use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, QueryResult, Statement, Value,
};
use tracing::trace;

use super::health::check_health;
use crate::common::DatabaseResult;

#[derive(Clone, Debug)]
pub struct StoreHandle {
    db: DatabaseConnection,
}

impl StoreHandle {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Underlying SeaORM connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Verify the store answers a trivial query
    pub async fn ping(&self) -> DatabaseResult<()> {
        check_health(&self.db).await
    }

    /// Run a statement expected to yield at most one row.
    ///
    /// `Ok(None)` is the "no rows" signal; callers decide whether that is a
    /// not-found failure or has a fallback.
    pub async fn query_row<I>(&self, sql: &str, values: I) -> Result<Option<QueryResult>, DbErr>
    where
        I: IntoIterator<Item = Value>,
    {
        trace!(sql, "query_row");
        self.db.query_one_raw(statement(sql, values)).await
    }

    /// Run a statement and collect every row
    pub async fn query_rows<I>(&self, sql: &str, values: I) -> Result<Vec<QueryResult>, DbErr>
    where
        I: IntoIterator<Item = Value>,
    {
        trace!(sql, "query_rows");
        self.db.query_all_raw(statement(sql, values)).await
    }

    /// Execute a statement, returning the number of affected rows
    pub async fn exec<I>(&self, sql: &str, values: I) -> Result<u64, DbErr>
    where
        I: IntoIterator<Item = Value>,
    {
        trace!(sql, "exec");
        let result = self.db.execute_raw(statement(sql, values)).await?;
        Ok(result.rows_affected())
    }

    /// Execute a statement without parameters (DDL)
    pub async fn exec_unprepared(&self, sql: &str) -> Result<u64, DbErr> {
        trace!(sql, "exec_unprepared");
        let result = self.db.execute_unprepared(sql).await?;
        Ok(result.rows_affected())
    }
}

impl From<DatabaseConnection> for StoreHandle {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db)
    }
}

fn statement<I>(sql: &str, values: I) -> Statement
where
    I: IntoIterator<Item = Value>,
{
    Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values)
}
