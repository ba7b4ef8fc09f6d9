#![allow(dead_code)]

//! Shared fixtures: the Person/Country schema, expression builders, and the
//! goldenfile loader.

use std::fs;

use query_compiler_model::model::{
    BinaryOperator, Expression, FieldInfo, FieldType, QueryModel, RecordSchema, Schema,
    SourceBinding, Value,
};
use query_compiler_sql::sql::string::CompiledStatement;
use query_compiler_translation::translation::{self, Error};

/// Compile the query in `tests/goldenfiles/<testname>/` against the schema
/// stored next to it.
pub fn test_translation(testname: &str) -> Result<CompiledStatement, Error> {
    let schema: Schema = serde_json::from_str(
        fs::read_to_string(format!("tests/goldenfiles/{testname}/schema.json"))
            .unwrap()
            .as_str(),
    )
    .unwrap();
    let query: QueryModel = serde_json::from_str(
        fs::read_to_string(format!("tests/goldenfiles/{testname}/query.json"))
            .unwrap()
            .as_str(),
    )
    .unwrap();

    translation::translate(&schema, &query)
}

pub fn expected_sql(testname: &str) -> String {
    fs::read_to_string(format!("tests/goldenfiles/{testname}/expected.sql"))
        .unwrap()
        .trim_end()
        .to_string()
}

/// The schema of the canonical test collections.
pub fn test_schema() -> Schema {
    let mut schema = Schema::default();
    schema.0.insert(
        "Person".to_string(),
        RecordSchema {
            fields: vec![
                field("Id", FieldType::Integer),
                field("Name", FieldType::Text),
                field("Balance", FieldType::Float),
                field("Age", FieldType::Integer),
                field("IsMan", FieldType::Boolean),
                field("CountryId", FieldType::Integer),
            ],
        },
    );
    schema.0.insert(
        "Country".to_string(),
        RecordSchema {
            fields: vec![
                field("Id", FieldType::Integer),
                field("Name", FieldType::Text),
            ],
        },
    );
    schema
}

fn field(name: &str, r#type: FieldType) -> FieldInfo {
    FieldInfo {
        name: name.to_string(),
        r#type,
    }
}

/// A query over `Person as p` with no joins, predicates or orderings.
pub fn person_query(projection: Expression) -> QueryModel {
    QueryModel {
        from: binding("p", "Person"),
        joins: vec![],
        predicates: vec![],
        orderings: vec![],
        projection,
        result_operator: None,
    }
}

pub fn binding(alias: &str, record_type: &str) -> SourceBinding {
    SourceBinding {
        alias: alias.to_string(),
        record_type: record_type.to_string(),
    }
}

pub fn source(alias: &str, record_type: &str) -> Expression {
    Expression::SourceRef {
        alias: alias.to_string(),
        record_type: record_type.to_string(),
    }
}

pub fn member(alias: &str, record_type: &str, field: &str) -> Expression {
    Expression::MemberAccess {
        base: Box::new(source(alias, record_type)),
        field: field.to_string(),
    }
}

pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Expression {
    Expression::BinaryOp {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }
}

pub fn int(value: i64) -> Expression {
    Expression::Constant(Value::Int(value))
}

pub fn string(value: &str) -> Expression {
    Expression::Constant(Value::String(value.to_string()))
}

pub fn boolean(value: bool) -> Expression {
    Expression::Constant(Value::Bool(value))
}
