//! Translate the join clauses of a query model to JOIN fragments.

use query_compiler_model::model::JoinClause;
use query_compiler_sql::sql::string::{Parameters, SqlFragment};

use super::error::Error;
use super::expression::{Context, ExpressionCompiler};
use super::helpers::Env;

/// Compile each equi-join to ` JOIN <record_type> AS <alias> ON <outer> =
/// <inner>`, in declared order. Key expressions are compiled by fresh walker
/// instances sharing the compilation's parameter collector; the inner key is
/// visited first, so its parameters are bound first.
pub fn translate_joins(
    env: &Env,
    parameters: &mut Parameters,
    joins: &[JoinClause],
) -> Result<Vec<String>, Error> {
    joins
        .iter()
        .map(|join| {
            env.record(&join.binding.record_type)?;

            let inner =
                ExpressionCompiler::new(env, parameters, Context::JoinKey).compile(&join.inner_key)?;
            let outer =
                ExpressionCompiler::new(env, parameters, Context::JoinKey).compile(&join.outer_key)?;

            let mut fragment = SqlFragment::new();
            fragment.append_syntax(" JOIN ");
            fragment.append_identifier(&join.binding.record_type);
            fragment.append_syntax(" AS ");
            fragment.append_identifier(&join.binding.alias);
            fragment.append_syntax(" ON ");
            fragment.append_syntax(&outer);
            fragment.append_syntax(" = ");
            fragment.append_syntax(&inner);
            Ok(fragment.sql)
        })
        .collect()
}
