//! Rewrites of the select fragment for terminal result operators.
//!
//! Aggregates wrap the computed projection; First and Single become row-count
//! limits on the select fragment. The operator enum is matched exhaustively,
//! so adding a new operator without a rewrite fails to build.

use query_compiler_model::model::ResultOperator;

use super::error::Error;

/// Rewrite the select fragment for the given terminal operator.
pub fn apply_result_operator(
    operator: ResultOperator,
    select_part: String,
) -> Result<String, Error> {
    match operator {
        ResultOperator::Sum => Ok(format!("SUM({select_part})")),
        ResultOperator::Count => Ok(format!("COUNT({select_part})")),
        ResultOperator::Average => Ok(format!("AVG({select_part})")),
        ResultOperator::Min => Ok(format!("MIN({select_part})")),
        ResultOperator::Max => Ok(format!("MAX({select_part})")),
        ResultOperator::Any => Ok(format!("CASE COUNT({select_part}) WHEN 0 THEN 0 ELSE 1 END")),
        // The caller must supply an ordering to get a deterministic row.
        ResultOperator::First => Ok(format!("TOP(1) {select_part}")),
        // TOP(2) lets the execution boundary detect a second row and fail
        // there instead of fetching the whole table.
        ResultOperator::Single => Ok(format!("TOP(2) {select_part}")),
        ResultOperator::Last => Err(Error::LastNotSupported),
    }
}
