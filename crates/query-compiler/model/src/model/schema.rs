//! Record schema descriptors.
//!
//! The schema replaces runtime reflection: it tells the compiler which fields
//! a record type declares (and in which order, for whole-record projection
//! expansion) and which of them are booleans stored as 0/1 columns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from a record type name to its schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema(pub BTreeMap<String, RecordSchema>);

impl Schema {
    pub fn record(&self, record_type: &str) -> Option<&RecordSchema> {
        self.0.get(record_type)
    }
}

/// The declared fields of one record type, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSchema {
    pub fields: Vec<FieldInfo>,
}

impl RecordSchema {
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// A single declared field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub name: String,
    pub r#type: FieldType,
}

/// The scalar types a record field can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Stored as a 0/1 integer column.
    Boolean,
    Integer,
    Float,
    Text,
}
