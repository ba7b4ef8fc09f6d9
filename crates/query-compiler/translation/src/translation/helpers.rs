//! Helpers for looking up query sources and record schemas during
//! translation.

use std::collections::BTreeMap;

use query_compiler_model::model::{FieldInfo, QueryModel, RecordSchema, Schema};

use super::error::Error;

/// The lookup environment for one compilation: the record schemas plus the
/// alias bindings declared by the query's from and join clauses.
pub struct Env<'a> {
    schema: &'a Schema,
    sources: BTreeMap<&'a str, &'a str>,
}

impl<'a> Env<'a> {
    /// Bind the from-clause alias and every join alias.
    pub fn new(schema: &'a Schema, query: &'a QueryModel) -> Env<'a> {
        let mut sources: BTreeMap<&'a str, &'a str> = BTreeMap::new();
        sources.insert(&query.from.alias, &query.from.record_type);
        for join in &query.joins {
            sources.insert(&join.binding.alias, &join.binding.record_type);
        }
        Env { schema, sources }
    }

    pub fn record(&self, record_type: &str) -> Result<&'a RecordSchema, Error> {
        self.schema
            .record(record_type)
            .ok_or_else(|| Error::RecordTypeNotFound(record_type.to_string()))
    }

    /// Resolve an alias to the record schema it is bound to.
    pub fn source(&self, alias: &str) -> Result<&'a RecordSchema, Error> {
        let record_type = self
            .sources
            .get(alias)
            .ok_or_else(|| Error::SourceNotFound(alias.to_string()))?;
        self.record(record_type)
    }

    /// Resolve a field on the record type an alias is bound to.
    pub fn field(&self, alias: &str, field: &str) -> Result<&'a FieldInfo, Error> {
        let record_type = self
            .sources
            .get(alias)
            .ok_or_else(|| Error::SourceNotFound(alias.to_string()))?;
        self.record(record_type)?
            .field(field)
            .ok_or_else(|| Error::FieldNotFound(field.to_string(), (*record_type).to_string()))
    }
}
