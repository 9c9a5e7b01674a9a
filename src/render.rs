//! Rendering: substitute validated values into template content

use crate::spec::{Value, VariableSpec};
use crate::values::{validate_values, ValidationResult, ValueMap};

/// Result of a render call.
///
/// `text` is only a rendered prompt when `validation.is_valid()`; on
/// failure it is the original content, returned unchanged so the caller
/// can re-display it next to the errors.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutcome {
    pub text: String,
    pub validation: ValidationResult,
}

impl RenderOutcome {
    /// Rendered text, or `None` when validation failed
    pub fn rendered(&self) -> Option<&str> {
        if self.validation.is_valid() {
            Some(&self.text)
        } else {
            None
        }
    }
}

/// Render template content with the supplied values.
///
/// Validation always runs first; an invalid value map short-circuits the
/// substitution and hands back the original content. For each declared
/// spec the effective value is the supplied value when present and
/// non-empty, else the declared default, else the empty string; it is
/// formatted per type and substituted for every `{{name}}` occurrence.
///
/// Placeholders with no matching spec are left untouched: the renderer
/// does not fail on unknown tokens.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use prompt_stencil::{render, Value, VariableSpec, VariableType};
///
/// let specs = vec![VariableSpec::new("name", VariableType::Text)];
/// let mut values = HashMap::new();
/// values.insert("name".to_string(), Value::from("Ada"));
///
/// let outcome = render("Hello {{name}}!", &specs, &values);
/// assert!(outcome.validation.is_valid());
/// assert_eq!(outcome.text, "Hello Ada!");
/// ```
pub fn render(content: &str, specs: &[VariableSpec], values: &ValueMap) -> RenderOutcome {
    let validation = validate_values(specs, values);
    if !validation.is_valid() {
        return RenderOutcome {
            text: content.to_string(),
            validation,
        };
    }

    let mut text = content.to_string();
    for spec in specs {
        let formatted = match values.get(&spec.name) {
            Some(value) if !value.is_empty() => spec.format_value(value),
            _ => match &spec.default {
                Some(default) => spec.format_value(&Value::String(default.clone())),
                None => String::new(),
            },
        };
        // Each pattern includes the enclosing delimiters, so no variable
        // pattern can partially overlap another.
        let pattern = format!("{{{{{}}}}}", spec.name);
        text = text.replace(&pattern, &formatted);
    }

    RenderOutcome { text, validation }
}
