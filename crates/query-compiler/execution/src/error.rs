//! Errors raised at the execution boundary.

/// A type for execution errors. Distinct from translation errors: the
/// compiler's job ends at producing valid SQL plus parameters.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("query execution failed: {0}")]
    Query(String),
    #[error("the query returned no rows")]
    NoRows,
    #[error("the query returned more than one row")]
    MoreThanOneRow,
    #[error("column '{0}' is missing from the result row")]
    ColumnNotFound(String),
    #[error("column '{0}' holds a value of an unexpected type")]
    UnexpectedValueType(String),
}
