//! The execution boundary for compiled statements: the executor trait the
//! storage adapter implements, the row values it returns, and the
//! cardinality checks that pair with the TOP(1)/TOP(2) rewrites.

pub mod error;
pub mod executor;
pub mod rows;
