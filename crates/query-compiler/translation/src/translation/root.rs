//! Assemble the full statement from the per-clause fragments.

use query_compiler_model::model::{QueryModel, Schema};
use query_compiler_sql::sql::string::{CompiledStatement, Parameters, SqlFragment};

use super::error::Error;
use super::helpers::Env;
use super::{filtering, joins, projection, result_operator, sorting};

/// Compile one query model. Clauses are visited in a fixed order - joins,
/// predicates, orderings, then the projection - so parameter names are
/// assigned deterministically, and the statement is assembled in the fixed
/// `select / from / joins / where / order by` order regardless of how the
/// model was declared.
pub fn translate_query_model(
    schema: &Schema,
    query: &QueryModel,
) -> Result<CompiledStatement, Error> {
    let env = Env::new(schema, query);
    env.record(&query.from.record_type)?;

    let mut parameters = Parameters::new();

    let join_parts = joins::translate_joins(&env, &mut parameters, &query.joins)?;
    let where_parts = filtering::translate_where(&env, &mut parameters, &query.predicates)?;
    let order_by_parts = sorting::translate_order_by(&env, &mut parameters, &query.orderings)?;
    let select_part = projection::translate_projection(&env, &mut parameters, &query.projection)?;

    let select_part = match query.result_operator {
        None => select_part,
        Some(operator) => result_operator::apply_result_operator(operator, select_part)?,
    };

    let mut statement = SqlFragment::new();
    statement.append_syntax("select ");
    statement.append_syntax(&select_part);
    statement.append_syntax(" from ");
    statement.append_identifier(&query.from.record_type);
    statement.append_syntax(" as ");
    statement.append_identifier(&query.from.alias);
    for join_part in &join_parts {
        statement.append_syntax(join_part);
    }
    append_clause(&mut statement, " where ", " AND ", &where_parts);
    append_clause(&mut statement, " order by ", ", ", &order_by_parts);

    Ok(CompiledStatement {
        sql: statement.sql,
        parameters: parameters.into_parameters(),
    })
}

/// Append `prefix part1 delimiter part2 ...`, or nothing at all when there
/// are no parts, so empty WHERE and ORDER BY clauses are omitted entirely.
fn append_clause(statement: &mut SqlFragment, prefix: &str, delimiter: &str, parts: &[String]) {
    for (index, part) in parts.iter().enumerate() {
        statement.append_syntax(if index == 0 { prefix } else { delimiter });
        statement.append_syntax(part);
    }
}
