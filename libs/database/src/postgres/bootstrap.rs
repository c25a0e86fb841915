//! Idempotent schema bootstrap.
//!
//! A [`SchemaBootstrap`] is an ordered list of statements that must be safe to
//! run on every startup (`CREATE TABLE IF NOT EXISTS`, guarded seed inserts).
//! The schema itself lives with the application; running it lives here.

use tracing::{debug, info};

use super::StoreHandle;
use crate::common::{DatabaseError, DatabaseResult};

pub trait SchemaBootstrap: Send + Sync {
    /// Name used in logs and errors
    fn name(&self) -> &str;

    /// Statements in execution order. Every statement must be idempotent.
    fn statements(&self) -> Vec<&'static str>;
}

/// Run every bootstrap statement in order, stopping at the first failure
pub async fn run_bootstrap<B>(store: &StoreHandle, bootstrap: &B) -> DatabaseResult<()>
where
    B: SchemaBootstrap + ?Sized,
{
    let statements = bootstrap.statements();
    info!(app = bootstrap.name(), statements = statements.len(), "Bootstrapping schema");

    for (index, sql) in statements.iter().enumerate() {
        let affected = store
            .exec_unprepared(sql)
            .await
            .map_err(|source| DatabaseError::Bootstrap {
                app: bootstrap.name().to_string(),
                index,
                source,
            })?;
        debug!(index, affected, "Bootstrap statement applied");
    }

    info!(app = bootstrap.name(), "Schema bootstrap complete");
    Ok(())
}
