//! Errors for query translation.

/// A type for translation errors.
///
/// Raised synchronously; translation terminates immediately and returns no
/// partial SQL. Errors from the execution boundary are a separate taxonomy.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("The expression '{0}' is not supported in this position.")]
    UnsupportedExpression(String),
    #[error("'Last' is not supported, reverse the ordering and use 'First'.")]
    LastNotSupported,
    #[error("Record type '{0}' is not registered in the schema.")]
    RecordTypeNotFound(String),
    #[error("Source alias '{0}' is not bound by a from or join clause.")]
    SourceNotFound(String),
    #[error("Field '{0}' is not declared on record type '{1}'.")]
    FieldNotFound(String, String),
}
