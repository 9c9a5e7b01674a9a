//! Value validation against declared variable constraints
//!
//! [`validate_values`] never fails with an `Err`: every constraint
//! violation is recorded in the returned [`ValidationResult`] so the
//! caller can surface all problems in one round trip.
//!
//! The per-type rules are kept together as a dispatch table on
//! [`VariableSpec`]: `check_value` decides whether a value satisfies the
//! declared type and bounds, `format_value` turns an accepted value into
//! its final text form.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate};

use crate::spec::{Value, VariableSpec, VariableType};

/// Transient mapping from variable name to a raw runtime value
pub type ValueMap = HashMap<String, Value>;

/// Outcome of validating a value map against a list of variable specs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    /// Required variables with no usable value and no default
    pub missing_required: Vec<String>,
    /// Variable name mapped to a human-readable constraint violation
    pub invalid: HashMap<String, String>,
}

impl ValidationResult {
    /// True when every constraint was satisfied
    pub fn is_valid(&self) -> bool {
        self.missing_required.is_empty() && self.invalid.is_empty()
    }

    /// All problems as display strings, missing-required first
    pub fn messages(&self) -> Vec<String> {
        let mut messages: Vec<String> = self
            .missing_required
            .iter()
            .map(|name| format!("missing required variable '{}'", name))
            .collect();
        let mut violations: Vec<(&String, &String)> = self.invalid.iter().collect();
        violations.sort();
        for (name, message) in violations {
            messages.push(format!("variable '{}': {}", name, message));
        }
        messages
    }
}

/// Validate a candidate value map against the declared variable specs.
///
/// Each spec is checked independently. A required variable with no
/// usable value (absent, null or empty string) and no declared default
/// lands in `missing_required`; a present value that fails its type or
/// bound check lands in `invalid` with a message.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use prompt_stencil::{validate_values, Value, VariableSpec, VariableType};
///
/// let specs = vec![
///     VariableSpec::new("age", VariableType::Number).with_bounds(Some(0.0), Some(120.0)),
/// ];
/// let mut values = HashMap::new();
/// values.insert("age".to_string(), Value::from(150.0));
///
/// let result = validate_values(&specs, &values);
/// assert!(!result.is_valid());
/// assert!(result.invalid["age"].contains("120"));
/// ```
pub fn validate_values(specs: &[VariableSpec], values: &ValueMap) -> ValidationResult {
    let mut result = ValidationResult::default();

    for spec in specs {
        match values.get(&spec.name) {
            Some(value) if !value.is_empty() => {
                if let Err(message) = spec.check_value(value) {
                    result.invalid.insert(spec.name.clone(), message);
                }
            }
            _ => {
                if spec.required && spec.default.is_none() {
                    result.missing_required.push(spec.name.clone());
                }
            }
        }
    }

    result
}

// ── Type dispatch: validate / format per variable type ────────────

impl VariableSpec {
    /// Check a non-empty value against this spec's type and constraints.
    ///
    /// The error string is the user-facing violation message.
    pub fn check_value(&self, value: &Value) -> Result<(), String> {
        match self.kind {
            VariableType::Text => Ok(()),
            VariableType::Number => {
                let n = coerce_number(value).ok_or_else(|| "must be a number".to_string())?;
                if let Some(min) = self.min {
                    if n < min {
                        return Err(format!("must be at least {}", min));
                    }
                }
                if let Some(max) = self.max {
                    if n > max {
                        return Err(format!("must be at most {}", max));
                    }
                }
                Ok(())
            }
            VariableType::Dropdown => {
                let candidate = value.to_display_string();
                if self.options.iter().any(|option| *option == candidate) {
                    Ok(())
                } else {
                    Err("invalid option selected".to_string())
                }
            }
            VariableType::Date => match value {
                Value::String(s) if parse_date(s).is_some() => Ok(()),
                _ => Err("invalid date format".to_string()),
            },
            VariableType::Boolean => match value {
                Value::Bool(_) => Ok(()),
                Value::String(s) if s == "true" || s == "false" => Ok(()),
                _ => Err("must be true or false".to_string()),
            },
        }
    }

    /// Format an accepted value into its final rendered text.
    ///
    /// Values that do not fit the type (possible for unvalidated
    /// defaults) fall back to their plain string form.
    pub fn format_value(&self, value: &Value) -> String {
        match self.kind {
            VariableType::Date => match value {
                Value::String(s) => match parse_date(s) {
                    Some(date) => format_date(date),
                    None => s.clone(),
                },
                other => other.to_display_string(),
            },
            VariableType::Boolean => match value {
                Value::Bool(true) => "yes".to_string(),
                Value::Bool(false) => "no".to_string(),
                Value::String(s) if s == "true" => "yes".to_string(),
                Value::String(s) if s == "false" => "no".to_string(),
                other => other.to_display_string(),
            },
            VariableType::Text | VariableType::Number | VariableType::Dropdown => {
                value.to_display_string()
            }
        }
    }
}

/// Coerce a value to a finite number, the way a form field would
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) if n.is_finite() => Some(*n),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Accepted date shapes: RFC 3339 timestamps and the common calendar forms
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y"];

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
}

fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
