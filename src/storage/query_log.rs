//! Instrumented query execution.
//!
//! Every statement issued by the service goes through [`QueryLogger`], which
//! numbers it, times it and writes a start line before execution and an end
//! line after a successful execution. A failed statement leaves only its start
//! line in the log.

use sqlx::sqlite::SqliteRow;
use sqlx::{Executor, FromRow, Sqlite};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::info;

/// A single positional bind value.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Int(i64),
    Text(String),
}

impl fmt::Display for SqlParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlParam::Int(v) => write!(f, "{}", v),
            SqlParam::Text(v) => f.write_str(v),
        }
    }
}

#[cfg(test)]
impl From<&str> for SqlParam {
    fn from(v: &str) -> Self {
        SqlParam::Text(v.to_string())
    }
}

// `Query` and `QueryAs` expose `bind` separately, with no shared trait.
macro_rules! bind_params {
    ($query:expr, $params:expr) => {{
        let mut query = $query;
        for param in $params {
            query = match param {
                SqlParam::Int(v) => query.bind(*v),
                SqlParam::Text(v) => query.bind(v.clone()),
            };
        }
        query
    }};
}

/// Zero-pad a sequence number to at least four digits.
pub fn pad_sequence(seq: u64) -> String {
    format!("{:04}", seq)
}

/// Render a bind list comma-separated, without brackets.
pub fn format_params(params: &[SqlParam]) -> String {
    params
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

pub fn start_line(seq: u64, sql: &str, params: &[SqlParam]) -> String {
    format!(
        "SQL START qNum: {}  sql: {} params: {}",
        pad_sequence(seq),
        sql,
        format_params(params)
    )
}

pub fn end_line(seq: u64, elapsed: Duration, row_count: u64, sql: &str, params: &[SqlParam]) -> String {
    format!(
        "SQL END   qNum: {}  time:     {:.3}ms rowCount:     {} sql:  {} params:  {}",
        pad_sequence(seq),
        elapsed.as_secs_f64() * 1000.0,
        row_count,
        sql,
        format_params(params)
    )
}

/// Numbers, times and logs statements. Shared by every handler.
#[derive(Debug, Default)]
pub struct QueryLogger {
    counter: AtomicU64,
}

impl QueryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next sequence number. The first call returns 1.
    fn next_sequence(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Sequence number of the most recently started statement (0 if none).
    #[cfg(test)]
    pub fn last_sequence(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }

    /// Run a row-returning statement. The logged row count is the number of rows fetched.
    pub async fn fetch_all<'c, E, T>(
        &self,
        executor: E,
        sql: &str,
        params: &[SqlParam],
    ) -> Result<Vec<T>, sqlx::Error>
    where
        E: Executor<'c, Database = Sqlite>,
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let seq = self.next_sequence();
        let started = Instant::now();
        info!("{}", start_line(seq, sql, params));

        let rows = bind_params!(sqlx::query_as::<Sqlite, T>(sql), params)
            .fetch_all(executor)
            .await?;

        info!(
            "{}",
            end_line(seq, started.elapsed(), rows.len() as u64, sql, params)
        );
        Ok(rows)
    }

    /// Run a statement without a result set. The logged row count is the number of rows affected.
    pub async fn execute<'c, E>(
        &self,
        executor: E,
        sql: &str,
        params: &[SqlParam],
    ) -> Result<u64, sqlx::Error>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        let seq = self.next_sequence();
        let started = Instant::now();
        info!("{}", start_line(seq, sql, params));

        let affected = bind_params!(sqlx::query(sql), params)
            .execute(executor)
            .await?
            .rows_affected();

        info!("{}", end_line(seq, started.elapsed(), affected, sql, params));
        Ok(affected)
    }
}
