//! Variable context — the name→value mapping bound into templates.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::{RenderError, VarsError};

/// Ordered mapping from variable name to JSON value.
///
/// The default context is empty, matching the canonical README build. When
/// variables come from several sources, apply them lowest-precedence first
/// and let [`TemplateVars::set`] override name-by-name.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct TemplateVars {
    values: BTreeMap<String, Value>,
}

impl TemplateVars {
    /// An empty variable context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load variables from a JSON file holding a single object.
    pub fn from_json_file(path: &Path) -> Result<Self, VarsError> {
        let contents = std::fs::read_to_string(path).map_err(|e| VarsError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let value: Value = serde_json::from_str(&contents).map_err(|e| VarsError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;
        match value {
            Value::Object(map) => Ok(TemplateVars {
                values: map.into_iter().collect(),
            }),
            other => Err(VarsError::NotAnObject {
                path: path.to_path_buf(),
                found: json_type_name(&other),
            }),
        }
    }

    /// Parse a `NAME=VALUE` assignment into a name and a string value.
    ///
    /// Only the first `=` separates; the value may itself contain `=`.
    pub fn parse_assignment(assignment: &str) -> Result<(String, Value), VarsError> {
        let malformed = || VarsError::MalformedAssignment {
            assignment: assignment.to_owned(),
        };
        let (name, value) = assignment.split_once('=').ok_or_else(malformed)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(malformed());
        }
        Ok((name.to_owned(), Value::String(value.to_owned())))
    }

    /// Bind `name` to `value`, replacing any existing binding.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up a bound value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Overlay `other` onto `self`, overriding same-named bindings.
    pub fn merge(&mut self, other: TemplateVars) {
        self.values.extend(other.values);
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::Engine)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
