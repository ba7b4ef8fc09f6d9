//! Translate the select clause of a query model to the SELECT fragment.

use query_compiler_model::model::Expression;
use query_compiler_sql::sql::string::{Parameters, SqlFragment};

use super::error::Error;
use super::expression::{Context, ExpressionCompiler};
use super::helpers::Env;

/// Compile the select target.
///
/// A `Construct` renders its members as `expr AS name` pairs in declaration
/// order; the member names were resolved by the front-end (constructor
/// parameter names for positional construction, member names for
/// initializers). Anything else is a bare scalar projection and renders with
/// no alias; a whole-record reference expands inside the walker.
///
/// A construct with no members renders an empty select list. Front-ends do
/// not produce member-less constructs, so the case is left unguarded.
pub fn translate_projection(
    env: &Env,
    parameters: &mut Parameters,
    projection: &Expression,
) -> Result<String, Error> {
    match projection {
        Expression::Construct { members, .. } => {
            let mut fragment = SqlFragment::new();
            for (index, member) in members.iter().enumerate() {
                if index > 0 {
                    fragment.append_syntax(", ");
                }
                let text = ExpressionCompiler::new(env, parameters, Context::Projection)
                    .compile(&member.expression)?;
                fragment.append_syntax(&text);
                fragment.append_syntax(" AS ");
                fragment.append_identifier(&member.name);
            }
            Ok(fragment.sql)
        }
        other => ExpressionCompiler::new(env, parameters, Context::Projection).compile(other),
    }
}
