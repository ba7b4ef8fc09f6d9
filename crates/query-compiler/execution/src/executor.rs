//! The boundary through which compiled statements reach the database.

use async_trait::async_trait;

use query_compiler_sql::sql::string::CompiledStatement;

use crate::error::Error;
use crate::rows::Row;

/// Runs compiled statements against a relational store.
///
/// Parameters are passed to the store as named bindings; implementations
/// must never splice them into the SQL text. Connection management,
/// transactions, cancellation and timeouts all live behind this trait.
#[async_trait]
pub trait QueryExecutor {
    /// Run a statement and return its rows.
    async fn execute(&self, statement: &CompiledStatement) -> Result<Vec<Row>, Error>;

    /// Run a statement expected to produce a single scalar value, such as an
    /// aggregate.
    async fn execute_scalar(&self, statement: &CompiledStatement)
        -> Result<serde_json::Value, Error>;
}

/// Enforce the row contract of the First operator: at least one row.
pub fn expect_first(rows: Vec<Row>) -> Result<Row, Error> {
    rows.into_iter().next().ok_or(Error::NoRows)
}

/// Enforce single-row semantics for the Single operator. The compiler emits
/// TOP(2), so a second row shows up here without the store scanning further.
pub fn expect_single(mut rows: Vec<Row>) -> Result<Row, Error> {
    match rows.len() {
        0 => Err(Error::NoRows),
        1 => Ok(rows.remove(0)),
        _ => {
            tracing::warn!("single-row query returned a second row");
            Err(Error::MoreThanOneRow)
        }
    }
}

/// Single-or-default: an empty result is `None` rather than an error, but a
/// second row is still rejected.
pub fn expect_single_or_default(mut rows: Vec<Row>) -> Result<Option<Row>, Error> {
    match rows.len() {
        0 => Ok(None),
        1 => Ok(Some(rows.remove(0))),
        _ => Err(Error::MoreThanOneRow),
    }
}
