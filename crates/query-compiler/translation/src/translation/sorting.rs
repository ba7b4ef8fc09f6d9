//! Translate the order-by clauses of a query model to ORDER BY fragments.

use query_compiler_model::model::{Ordering, OrderingDirection};
use query_compiler_sql::sql::string::Parameters;

use super::error::Error;
use super::expression::{Context, ExpressionCompiler};
use super::helpers::Env;

/// Compile one key fragment per ordering entry, in declared priority order.
/// Ascending is the dialect default and adds no suffix.
pub fn translate_order_by(
    env: &Env,
    parameters: &mut Parameters,
    orderings: &[Ordering],
) -> Result<Vec<String>, Error> {
    orderings
        .iter()
        .map(|ordering| {
            let mut text = ExpressionCompiler::new(env, parameters, Context::OrderingKey)
                .compile(&ordering.expression)?;
            if ordering.direction == OrderingDirection::Desc {
                text.push_str(" desc");
            }
            Ok(text)
        })
        .collect()
}
