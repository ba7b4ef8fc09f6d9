//! The shared expression walker.
//!
//! One recursive traversal serves the WHERE, SELECT, ORDER BY and join-key
//! fragments; the clause-specific behaviors (boolean 0/1 coercion,
//! whole-record expansion) hang off a [`Context`] value instead of a visitor
//! hierarchy. Text accumulates in a per-fragment buffer while literals are
//! registered with the compilation-wide parameter collector.

use query_compiler_model::model::{Expression, FieldType, UnaryOperator};
use query_compiler_sql::sql::string::{Parameters, SqlFragment};

use super::error::Error;
use super::helpers::Env;

/// The clause a fragment is being compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    Predicate,
    Projection,
    OrderingKey,
    JoinKey,
}

impl Context {
    /// Boolean fields are stored as 0/1 columns, so a bare boolean member
    /// must compile to `alias.Field = 1` wherever SQL expects a boolean
    /// expression. Projections read the column value itself.
    fn coerces_booleans(self) -> bool {
        !matches!(self, Context::Projection)
    }
}

/// Where a node sits relative to its parent. A member that is the direct
/// operand of a comparison or arithmetic operator must not receive the
/// boolean coercion suffix; the operator already consumes the column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Bare,
    Operand,
}

/// Walks one expression tree and renders one SQL text fragment.
pub struct ExpressionCompiler<'env, 'params> {
    env: &'env Env<'env>,
    parameters: &'params mut Parameters,
    context: Context,
    fragment: SqlFragment,
}

impl<'env, 'params> ExpressionCompiler<'env, 'params> {
    pub fn new(
        env: &'env Env<'env>,
        parameters: &'params mut Parameters,
        context: Context,
    ) -> ExpressionCompiler<'env, 'params> {
        ExpressionCompiler {
            env,
            parameters,
            context,
            fragment: SqlFragment::new(),
        }
    }

    /// Render the expression and hand back the accumulated text.
    pub fn compile(mut self, expression: &Expression) -> Result<String, Error> {
        self.visit(expression, Position::Bare)?;
        Ok(self.fragment.sql)
    }

    fn visit(&mut self, expression: &Expression, position: Position) -> Result<(), Error> {
        match expression {
            Expression::BinaryOp {
                operator,
                left,
                right,
            } => {
                // Operands of And/Or are boolean sub-expressions in their own
                // right; operands of every other operator are consumed by the
                // operator itself.
                let operand_position = if operator.is_logical() {
                    Position::Bare
                } else {
                    Position::Operand
                };
                self.fragment.append_syntax("(");
                self.visit(left, operand_position)?;
                self.fragment.append_syntax(" ");
                self.fragment.append_syntax(operator.symbol());
                self.fragment.append_syntax(" ");
                self.visit(right, operand_position)?;
                self.fragment.append_syntax(")");
                Ok(())
            }
            Expression::UnaryOp { operator, operand } => match operator {
                UnaryOperator::Not => {
                    self.fragment.append_syntax("NOT (");
                    self.visit(operand, Position::Bare)?;
                    self.fragment.append_syntax(")");
                    Ok(())
                }
                // Front-end type conversions are transparent at codegen time.
                UnaryOperator::TypeCoerce => self.visit(operand, position),
            },
            Expression::MemberAccess { base, field } => match base.as_ref() {
                Expression::SourceRef { alias, .. } => {
                    let info = self.env.field(alias, field)?;
                    self.fragment.append_identifier(alias);
                    self.fragment.append_syntax(".");
                    self.fragment.append_identifier(field);
                    if position == Position::Bare
                        && self.context.coerces_booleans()
                        && info.r#type == FieldType::Boolean
                    {
                        self.fragment.append_syntax(" = 1");
                    }
                    Ok(())
                }
                other => {
                    self.visit(other, Position::Operand)?;
                    self.fragment.append_syntax(".");
                    self.fragment.append_identifier(field);
                    Ok(())
                }
            },
            Expression::SourceRef { alias, .. } => match self.context {
                // A whole-record select target expands to the full field
                // list, alias-prefixed, in declaration order.
                Context::Projection => {
                    let record = self.env.source(alias)?;
                    for (index, field) in record.fields.iter().enumerate() {
                        if index > 0 {
                            self.fragment.append_syntax(", ");
                        }
                        self.fragment.append_identifier(alias);
                        self.fragment.append_syntax(".");
                        self.fragment.append_identifier(&field.name);
                    }
                    Ok(())
                }
                _ => {
                    self.fragment.append_identifier(alias);
                    Ok(())
                }
            },
            Expression::Constant(value) => {
                let name = self.parameters.bind(value.clone());
                self.fragment.append_param(&name);
                Ok(())
            }
            Expression::Construct { .. } => {
                Err(Error::UnsupportedExpression(expression.to_string()))
            }
        }
    }
}
