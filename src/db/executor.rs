//! Statement execution seam
//!
//! The builder only produces SQL text; running it is the job of an
//! [`Executor`]. [`PgExecutor`] is the real implementation, tests substitute
//! their own.

use anyhow::{Context, Result};
use sqlx::PgPool;
use std::future::Future;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub rows_affected: u64,
}

pub trait Executor {
    fn execute(&self, sql: &str) -> impl Future<Output = Result<ExecutionOutcome>> + Send;
}

/// Executes statements on a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgExecutor {
    pool: PgPool,
}

impl PgExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl Executor for PgExecutor {
    fn execute(&self, sql: &str) -> impl Future<Output = Result<ExecutionOutcome>> + Send {
        let sql = sql.to_string();
        let pool = self.pool.clone();
        async move {
            debug!("Executing: {}", sql);
            let result = sqlx::raw_sql(&sql)
                .execute(&pool)
                .await
                .with_context(|| format!("Failed to execute: {}", sql))?;

            Ok(ExecutionOutcome {
                rows_affected: result.rows_affected(),
            })
        }
    }
}
