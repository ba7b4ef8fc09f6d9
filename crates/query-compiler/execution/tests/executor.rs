//! Exercises the executor trait against a compiled statement, using an
//! in-memory store in place of a real connection.

use async_trait::async_trait;

use query_compiler_execution::error::Error;
use query_compiler_execution::executor::{expect_single, QueryExecutor};
use query_compiler_execution::rows::{column, Row, RowMapper};
use query_compiler_model::model::{
    BinaryOperator, Expression, FieldInfo, FieldType, QueryModel, RecordSchema, ResultOperator,
    Schema, SourceBinding, Value,
};
use query_compiler_sql::sql::string::CompiledStatement;
use query_compiler_translation::translation::translate;

/// A canned store: asserts parameters arrive as named bindings and returns a
/// fixed row per bound age.
struct InMemoryStore {
    rows: Vec<Row>,
}

#[async_trait]
impl QueryExecutor for InMemoryStore {
    async fn execute(&self, statement: &CompiledStatement) -> Result<Vec<Row>, Error> {
        // A statement must be executable from its own parts alone: every
        // placeholder in the text has a matching named binding.
        for parameter in &statement.parameters {
            if !statement.sql.contains(&format!("@{}", parameter.name)) {
                return Err(Error::Query(format!(
                    "unbound parameter {}",
                    parameter.name
                )));
            }
        }
        Ok(self.rows.clone())
    }

    async fn execute_scalar(
        &self,
        statement: &CompiledStatement,
    ) -> Result<serde_json::Value, Error> {
        let rows = self.execute(statement).await?;
        let row = rows.first().ok_or(Error::NoRows)?;
        let value = row.values().next().ok_or(Error::NoRows)?;
        Ok(value.clone())
    }
}

struct PersonName;

impl RowMapper for PersonName {
    type Output = String;

    fn map_row(&self, row: &Row) -> Result<Self::Output, Error> {
        let name = column(row, "Name")?
            .as_str()
            .ok_or_else(|| Error::UnexpectedValueType("Name".to_string()))?;
        Ok(name.to_string())
    }
}

fn person_schema() -> Schema {
    let mut schema = Schema::default();
    schema.0.insert(
        "Person".to_string(),
        RecordSchema {
            fields: vec![
                FieldInfo {
                    name: "Name".to_string(),
                    r#type: FieldType::Text,
                },
                FieldInfo {
                    name: "Age".to_string(),
                    r#type: FieldType::Integer,
                },
            ],
        },
    );
    schema
}

fn name_query(result_operator: Option<ResultOperator>) -> QueryModel {
    QueryModel {
        from: SourceBinding {
            alias: "p".to_string(),
            record_type: "Person".to_string(),
        },
        joins: vec![],
        predicates: vec![Expression::BinaryOp {
            operator: BinaryOperator::Gt,
            left: Box::new(Expression::MemberAccess {
                base: Box::new(Expression::SourceRef {
                    alias: "p".to_string(),
                    record_type: "Person".to_string(),
                }),
                field: "Age".to_string(),
            }),
            right: Box::new(Expression::Constant(Value::Int(13))),
        }],
        orderings: vec![],
        projection: Expression::MemberAccess {
            base: Box::new(Expression::SourceRef {
                alias: "p".to_string(),
                record_type: "Person".to_string(),
            }),
            field: "Name".to_string(),
        },
        result_operator,
    }
}

fn name_row(name: &str) -> Row {
    let mut row = Row::new();
    row.insert("Name".to_string(), serde_json::json!(name));
    row
}

#[tokio::test]
async fn executes_a_compiled_statement_and_maps_rows() {
    let statement = translate(&person_schema(), &name_query(None)).unwrap();
    let store = InMemoryStore {
        rows: vec![name_row("Doron")],
    };

    let rows = store.execute(&statement).await.unwrap();
    let names: Vec<String> = rows
        .iter()
        .map(|row| PersonName.map_row(row))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(names, vec!["Doron".to_string()]);
}

#[tokio::test]
async fn single_fails_at_the_boundary_when_top_2_returns_two_rows() {
    let statement = translate(&person_schema(), &name_query(Some(ResultOperator::Single))).unwrap();
    assert!(statement.sql.starts_with("select TOP(2) "));

    let store = InMemoryStore {
        rows: vec![name_row("Doron"), name_row("Dana")],
    };
    let rows = store.execute(&statement).await.unwrap();
    assert_eq!(expect_single(rows), Err(Error::MoreThanOneRow));
}

#[tokio::test]
async fn scalar_execution_returns_the_aggregate_value() {
    let statement = translate(&person_schema(), &name_query(Some(ResultOperator::Count))).unwrap();
    assert!(statement.sql.starts_with("select COUNT(p.Name) "));

    let mut row = Row::new();
    row.insert("".to_string(), serde_json::json!(2));
    let store = InMemoryStore { rows: vec![row] };
    assert_eq!(
        store.execute_scalar(&statement).await.unwrap(),
        serde_json::json!(2)
    );
}
