pub mod expression;
pub mod query;
pub mod schema;

pub use expression::*;
pub use query::*;
pub use schema::*;
