//! Data model for templates and their declared variables
//!
//! A [`Template`] owns raw content plus an ordered list of [`VariableSpec`]
//! entries. The engine never mutates these records; the calling layer
//! creates and persists them, then invokes the pure functions in this
//! crate to scan, validate and render.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parser::{scan_variables, validate_template, SyntaxReport};
use crate::render::{render, RenderOutcome};
use crate::values::ValueMap;

/// Declared type of a template variable.
///
/// The per-type validation and formatting rules live in one dispatch
/// table (see `values.rs`), so adding a type is a localized change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    #[default]
    Text,
    Number,
    Date,
    Boolean,
    Dropdown,
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableType::Text => write!(f, "text"),
            VariableType::Number => write!(f, "number"),
            VariableType::Date => write!(f, "date"),
            VariableType::Boolean => write!(f, "boolean"),
            VariableType::Dropdown => write!(f, "dropdown"),
        }
    }
}

/// Declared metadata for one template variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableSpec {
    /// Variable name, unique within a template, identifier-legal
    pub name: String,
    /// Declared type
    #[serde(rename = "type", default)]
    pub kind: VariableType,
    /// Whether a value must be supplied (or defaulted) at render time
    #[serde(default)]
    pub required: bool,
    /// Optional default, as a type-compatible string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Allowed options for `dropdown` variables, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Inclusive lower bound for `number` variables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Inclusive upper bound for `number` variables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Display precedence in authoring UIs (not substitution order)
    #[serde(default)]
    pub display_order: u32,
}

impl VariableSpec {
    /// Create a spec with the given name and type; everything else defaults
    pub fn new(name: impl Into<String>, kind: VariableType) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            default: None,
            options: Vec::new(),
            min: None,
            max: None,
            display_order: 0,
        }
    }

    /// Mark the variable as required
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the default value
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set the allowed options (dropdown)
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    /// Set inclusive numeric bounds
    pub fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the display order index
    pub fn with_display_order(mut self, order: u32) -> Self {
        self.display_order = order;
        self
    }
}

/// A declaration-level defect in a variable spec.
///
/// These are authoring mistakes caught when a template is created or
/// edited, before any render is attempted.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpecError {
    #[error("variable name '{name}' is not a legal identifier")]
    IllegalName { name: String },

    #[error("duplicate variable name '{name}'")]
    DuplicateName { name: String },

    #[error("dropdown variable '{name}' must declare at least one option")]
    EmptyOptions { name: String },

    #[error("variable '{name}' has min {min} greater than max {max}")]
    InvalidBounds { name: String, min: f64, max: f64 },

    #[error("default value for variable '{name}' is invalid: {message}")]
    InvalidDefault { name: String, message: String },
}

/// Letters, digits and underscore, not starting with a digit
fn is_legal_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl VariableSpec {
    /// Check the declaration invariants of this spec.
    ///
    /// All defects are reported, not just the first.
    pub fn check(&self) -> Vec<SpecError> {
        let mut errors = Vec::new();

        if !is_legal_name(&self.name) {
            errors.push(SpecError::IllegalName {
                name: self.name.clone(),
            });
        }

        if self.kind == VariableType::Dropdown && self.options.is_empty() {
            errors.push(SpecError::EmptyOptions {
                name: self.name.clone(),
            });
        }

        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                errors.push(SpecError::InvalidBounds {
                    name: self.name.clone(),
                    min,
                    max,
                });
            }
        }

        if let Some(default) = &self.default {
            if let Err(message) = self.check_value(&Value::String(default.clone())) {
                errors.push(SpecError::InvalidDefault {
                    name: self.name.clone(),
                    message,
                });
            }
        }

        errors
    }
}

/// Check a full spec list: per-spec invariants plus name uniqueness.
pub fn check_specs(specs: &[VariableSpec]) -> Vec<SpecError> {
    let mut errors = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for spec in specs {
        errors.extend(spec.check());
        if !seen.insert(spec.name.as_str()) {
            errors.push(SpecError::DuplicateName {
                name: spec.name.clone(),
            });
        }
    }
    errors
}

/// A raw runtime value supplied by the caller at render time.
///
/// Transient: lives for a single validate/render call, never persisted
/// by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Value {
    /// A value that cannot satisfy a required variable: absent in spirit
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// String form of the value, the way a user would type it
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// A reusable prompt template and its declared variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Unique identifier assigned by the calling layer
    pub id: String,
    /// Raw content with `{{name}}` placeholders
    pub content: String,
    /// Declared variables; order is display precedence
    #[serde(default, rename = "variable")]
    pub variables: Vec<VariableSpec>,
}

impl Template {
    /// Create a template with no declared variables
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            variables: Vec::new(),
        }
    }

    /// Add a declared variable
    pub fn with_variable(mut self, spec: VariableSpec) -> Self {
        self.variables.push(spec);
        self
    }

    /// Variable names referenced in the content, first appearance order
    pub fn scan(&self) -> Vec<String> {
        scan_variables(&self.content)
    }

    /// Validate the content syntax
    pub fn check_syntax(&self) -> SyntaxReport {
        validate_template(&self.content)
    }

    /// Validate the variable declarations
    pub fn check_variables(&self) -> Vec<SpecError> {
        check_specs(&self.variables)
    }

    /// Render with the supplied values
    pub fn render(&self, values: &ValueMap) -> RenderOutcome {
        render(&self.content, &self.variables, values)
    }

    /// Declared variables sorted by display order, then declaration order
    pub fn variables_in_display_order(&self) -> Vec<&VariableSpec> {
        let mut sorted: Vec<&VariableSpec> = self.variables.iter().collect();
        sorted.sort_by_key(|v| v.display_order);
        sorted
    }
}

/// Errors loading a variables file
#[derive(Error, Debug)]
pub enum VariableFileError {
    #[error("Failed to read variables file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse variables TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Variable declarations loaded from a TOML file.
///
/// ```toml
/// [[variable]]
/// name = "age"
/// type = "number"
/// required = true
/// min = 0
/// max = 120
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct VariableFile {
    #[serde(default, rename = "variable")]
    pub variables: Vec<VariableSpec>,
}

impl VariableFile {
    /// Parse from TOML text
    pub fn parse(content: &str) -> Result<Self, VariableFileError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, VariableFileError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_names() {
        assert!(is_legal_name("name"));
        assert!(is_legal_name("_private"));
        assert!(is_legal_name("user_id_2"));
        assert!(!is_legal_name("2fast"));
        assert!(!is_legal_name("user name"));
        assert!(!is_legal_name(""));
    }

    #[test]
    fn test_spec_check_dropdown_requires_options() {
        let spec = VariableSpec::new("color", VariableType::Dropdown);
        let errors = spec.check();
        assert!(matches!(errors[0], SpecError::EmptyOptions { .. }));
    }

    #[test]
    fn test_spec_check_bounds_order() {
        let spec =
            VariableSpec::new("age", VariableType::Number).with_bounds(Some(120.0), Some(0.0));
        let errors = spec.check();
        assert!(matches!(errors[0], SpecError::InvalidBounds { .. }));
    }

    #[test]
    fn test_spec_check_bad_default() {
        let spec = VariableSpec::new("age", VariableType::Number).with_default("not a number");
        let errors = spec.check();
        assert!(matches!(errors[0], SpecError::InvalidDefault { .. }));
    }

    #[test]
    fn test_spec_check_clean() {
        let spec = VariableSpec::new("age", VariableType::Number)
            .with_required(true)
            .with_default("42")
            .with_bounds(Some(0.0), Some(120.0));
        assert!(spec.check().is_empty());
    }

    #[test]
    fn test_check_specs_duplicate_names() {
        let specs = vec![
            VariableSpec::new("name", VariableType::Text),
            VariableSpec::new("name", VariableType::Text),
        ];
        let errors = check_specs(&specs);
        assert!(matches!(errors[0], SpecError::DuplicateName { .. }));
    }

    #[test]
    fn test_value_emptiness() {
        assert!(Value::Null.is_empty());
        assert!(Value::from("").is_empty());
        assert!(!Value::from("x").is_empty());
        assert!(!Value::from(0.0).is_empty());
        assert!(!Value::from(false).is_empty());
    }

    #[test]
    fn test_value_display_string() {
        assert_eq!(Value::from(42.0).to_display_string(), "42");
        assert_eq!(Value::from(4.5).to_display_string(), "4.5");
        assert_eq!(Value::from(true).to_display_string(), "true");
        assert_eq!(Value::from("red").to_display_string(), "red");
        assert_eq!(Value::Null.to_display_string(), "");
    }

    #[test]
    fn test_variable_file_parse() {
        let file = VariableFile::parse(
            r#"
            [[variable]]
            name = "age"
            type = "number"
            required = true
            min = 0
            max = 120

            [[variable]]
            name = "color"
            type = "dropdown"
            options = ["red", "blue"]
            "#,
        )
        .expect("Should parse");

        assert_eq!(file.variables.len(), 2);
        assert_eq!(file.variables[0].kind, VariableType::Number);
        assert_eq!(file.variables[0].min, Some(0.0));
        assert_eq!(file.variables[0].max, Some(120.0));
        assert_eq!(file.variables[1].options, vec!["red", "blue"]);
    }

    #[test]
    fn test_variable_file_defaults() {
        let file = VariableFile::parse(
            r#"
            [[variable]]
            name = "topic"
            "#,
        )
        .expect("Should parse");

        let spec = &file.variables[0];
        assert_eq!(spec.kind, VariableType::Text);
        assert!(!spec.required);
        assert!(spec.default.is_none());
        assert!(spec.options.is_empty());
    }

    #[test]
    fn test_template_display_order() {
        let template = Template::new("t1", "{{b}} {{a}}")
            .with_variable(VariableSpec::new("b", VariableType::Text).with_display_order(2))
            .with_variable(VariableSpec::new("a", VariableType::Text).with_display_order(1));
        let ordered = template.variables_in_display_order();
        assert_eq!(ordered[0].name, "a");
        assert_eq!(ordered[1].name, "b");
    }

    #[test]
    fn test_template_scan_and_syntax() {
        let template = Template::new("t1", "Hello {{name}}!");
        assert_eq!(template.scan(), vec!["name"]);
        assert!(template.check_syntax().is_valid());
    }
}
