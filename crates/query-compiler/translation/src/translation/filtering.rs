//! Translate the where clauses of a query model to WHERE fragments.

use query_compiler_model::model::{Expression, UnaryOperator};
use query_compiler_sql::sql::string::Parameters;

use super::error::Error;
use super::expression::{Context, ExpressionCompiler};
use super::helpers::Env;

/// Compile each top-level predicate to a parenthesized fragment. The caller
/// joins the fragments with ` AND `, so stacked where clauses are always
/// conjunctive.
pub fn translate_where(
    env: &Env,
    parameters: &mut Parameters,
    predicates: &[Expression],
) -> Result<Vec<String>, Error> {
    predicates
        .iter()
        .map(|predicate| translate_predicate(env, parameters, predicate))
        .collect()
}

fn translate_predicate(
    env: &Env,
    parameters: &mut Parameters,
    predicate: &Expression,
) -> Result<String, Error> {
    let text = ExpressionCompiler::new(env, parameters, Context::Predicate).compile(predicate)?;
    // Binary nodes already carry their own outer parentheses; type coercions
    // render as nothing, so look through them before deciding.
    match strip_coercions(predicate) {
        Expression::BinaryOp { .. } => Ok(text),
        _ => Ok(format!("({text})")),
    }
}

fn strip_coercions(expression: &Expression) -> &Expression {
    let mut current = expression;
    while let Expression::UnaryOp {
        operator: UnaryOperator::TypeCoerce,
        operand,
    } = current
    {
        current = operand;
    }
    current
}
