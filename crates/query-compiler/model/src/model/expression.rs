//! Expression nodes of the query model.
//!
//! These are pure data; all behavior lives in the translation crate. The
//! `Display` implementations produce the human-readable renderings used in
//! translation error messages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar expression inside a query model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// A binary operation on two expressions.
    BinaryOp {
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// A unary operation on an expression.
    UnaryOp {
        operator: UnaryOperator,
        operand: Box<Expression>,
    },
    /// A field read on a record.
    MemberAccess {
        base: Box<Expression>,
        field: String,
    },
    /// A reference to a collection alias bound by the query's from or join
    /// clauses.
    SourceRef { alias: String, record_type: String },
    /// A literal value. Always bound as a named parameter, never inlined
    /// into the SQL text.
    Constant(Value),
    /// A projection target built from named member expressions.
    Construct {
        kind: ConstructKind,
        members: Vec<ProjectionMember>,
    },
}

/// The complete set of supported binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    Add,
    Sub,
    Mul,
    Div,
    And,
    Or,
}

impl BinaryOperator {
    /// The SQL token for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Eq => "=",
            BinaryOperator::Ne => "<>",
            BinaryOperator::Gt => ">",
            BinaryOperator::Ge => ">=",
            BinaryOperator::Lt => "<",
            BinaryOperator::Le => "<=",
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::And => "AND",
            BinaryOperator::Or => "OR",
        }
    }

    /// And/Or compose boolean sub-expressions; every other operator compares
    /// or combines scalar operands.
    pub fn is_logical(self) -> bool {
        matches!(self, BinaryOperator::And | BinaryOperator::Or)
    }
}

/// The supported unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperator {
    Not,
    /// A front-end type conversion. Transparent at codegen time.
    TypeCoerce,
}

/// Whether a projection target was built positional-constructor style or
/// named-initializer style. Both render identically; member names are
/// resolved by the front-end (constructor parameter names for `Constructor`,
/// member names for `Initializer`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstructKind {
    Constructor,
    Initializer,
}

/// One `(target name, expression)` pair of a projection target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionMember {
    pub name: String,
    pub expression: Expression,
}

/// A literal value carried by a `Constant` node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::BinaryOp {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", left, operator.symbol(), right),
            Expression::UnaryOp { operator, operand } => match operator {
                UnaryOperator::Not => write!(f, "NOT ({operand})"),
                UnaryOperator::TypeCoerce => write!(f, "{operand}"),
            },
            Expression::MemberAccess { base, field } => write!(f, "{base}.{field}"),
            Expression::SourceRef { alias, .. } => write!(f, "{alias}"),
            Expression::Constant(value) => write!(f, "{value}"),
            Expression::Construct { members, .. } => {
                write!(f, "new {{ ")?;
                for (index, member) in members.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} = {}", member.name, member.expression)?;
                }
                write!(f, " }}")
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => write!(f, "'{s}'"),
        }
    }
}
