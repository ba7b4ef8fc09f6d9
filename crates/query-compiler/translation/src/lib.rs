//! Translate a query model into a parameterized SQL statement.

pub mod translation;
