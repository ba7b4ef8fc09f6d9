//! Row values returned by the execution boundary.

use indexmap::IndexMap;

use crate::error::Error;

/// A single result row, keyed by the column names or aliases the projection
/// emitted, in select-list order.
pub type Row = IndexMap<String, serde_json::Value>;

/// Materializes a typed value from a row, matching columns by name.
pub trait RowMapper {
    type Output;

    fn map_row(&self, row: &Row) -> Result<Self::Output, Error>;
}

/// Look up a column, failing with [`Error::ColumnNotFound`] when the
/// projection did not emit it.
pub fn column<'a>(row: &'a Row, name: &str) -> Result<&'a serde_json::Value, Error> {
    row.get(name).ok_or_else(|| Error::ColumnNotFound(name.to_string()))
}
