//! Type definitions of a low-level SQL string representation.
//!
//! Fragment buffers are per-clause; the parameter collector is shared across
//! every fragment of one compilation so that parameter names stay globally
//! unique and ordered.

use serde::{Deserialize, Serialize};

use query_compiler_model::model::Value;

/// A fragment of SQL text under construction.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SqlFragment {
    pub sql: String,
}

impl SqlFragment {
    pub fn new() -> SqlFragment {
        SqlFragment { sql: String::new() }
    }

    pub fn append_syntax(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// The target dialect does not quote identifiers.
    pub fn append_identifier(&mut self, name: &str) {
        self.sql.push_str(name);
    }

    /// Render a named parameter placeholder.
    pub fn append_param(&mut self, name: &str) {
        self.sql.push('@');
        self.sql.push_str(name);
    }
}

/// A single named binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: Value,
}

/// Collects the literals encountered during one compilation into an ordered,
/// named binding list. Names are handed out as `p0, p1, ...` in visitation
/// order; no two literals ever share a name.
#[derive(Debug, Default, PartialEq)]
pub struct Parameters {
    parameters: Vec<Parameter>,
}

impl Parameters {
    pub fn new() -> Parameters {
        Parameters { parameters: vec![] }
    }

    /// Bind a literal and return the name assigned to it.
    pub fn bind(&mut self, value: Value) -> String {
        let name = format!("p{}", self.parameters.len());
        self.parameters.push(Parameter {
            name: name.clone(),
            value,
        });
        name
    }

    pub fn into_parameters(self) -> Vec<Parameter> {
        self.parameters
    }
}

/// A fully compiled statement: SQL text plus its ordered bindings. Immutable
/// once produced; one exists per compilation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledStatement {
    pub sql: String,
    pub parameters: Vec<Parameter>,
}
