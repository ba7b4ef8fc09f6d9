//! The query model intermediate representation consumed by the translation
//! crate: expression nodes, the query model itself, and the record schema
//! descriptors used for field validation and whole-record expansion.

pub mod model;
