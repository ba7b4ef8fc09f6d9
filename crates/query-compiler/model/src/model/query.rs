//! The query model: the declarative description of one query, as produced by
//! an external query-expression front-end.

use serde::{Deserialize, Serialize};

use super::expression::Expression;

/// A single declarative query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryModel {
    /// The root collection the query ranges over.
    pub from: SourceBinding,
    /// Equi-joins against related collections, in declaration order.
    #[serde(default)]
    pub joins: Vec<JoinClause>,
    /// Filter predicates. Implicitly AND-ed.
    #[serde(default)]
    pub predicates: Vec<Expression>,
    /// Sort keys in declared priority order.
    #[serde(default)]
    pub orderings: Vec<Ordering>,
    /// The select target.
    pub projection: Expression,
    /// An optional terminal operator, applied after the projection.
    #[serde(default)]
    pub result_operator: Option<ResultOperator>,
}

/// Binds a collection alias to a record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceBinding {
    pub alias: String,
    pub record_type: String,
}

/// An equi-join between the query so far and another collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinClause {
    pub binding: SourceBinding,
    pub outer_key: Expression,
    pub inner_key: Expression,
}

/// One ORDER BY key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ordering {
    pub expression: Expression,
    pub direction: OrderingDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderingDirection {
    Asc,
    Desc,
}

/// A terminal aggregate or cardinality-limiting operator.
///
/// `Last` is carried in the model so the front-end can hand it over verbatim;
/// translation rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultOperator {
    Sum,
    Count,
    Average,
    Min,
    Max,
    Any,
    First,
    Single,
    Last,
}
