//! Translate an incoming query model.

pub mod error;
pub mod expression;
pub mod filtering;
pub mod helpers;
pub mod joins;
pub mod projection;
pub mod result_operator;
pub mod root;
pub mod sorting;

use query_compiler_model::model::{QueryModel, Schema};
use query_compiler_sql::sql::string::CompiledStatement;

pub use error::Error;

/// Translate a query model to a SQL statement plus ordered parameter
/// bindings, ready to be run against the database.
///
/// Compilation is synchronous and stateless across calls: every invocation
/// allocates its own parameter collector and output buffers, and either
/// returns a complete statement or fails with an [`Error`] - no partial SQL
/// is ever produced.
pub fn translate(schema: &Schema, query: &QueryModel) -> Result<CompiledStatement, Error> {
    let statement = root::translate_query_model(schema, query)?;
    tracing::info!("SQL: {}", statement.sql);
    Ok(statement)
}
