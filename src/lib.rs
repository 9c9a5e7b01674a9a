//! Prompt Stencil - the template engine behind a prompt-management service
//!
//! This library turns reusable prompt templates (free text containing
//! `{{variableName}}` placeholders) into concrete, type-checked prompts,
//! and can reverse-engineer a plausible template out of an existing
//! prompt.
//!
//! Five pure entry points, all reentrant and free of shared state:
//!
//! - [`scan_variables`] - discover placeholder names in template content
//! - [`validate_template`] - check template syntax, reporting every defect
//! - [`validate_values`] - check supplied values against declared constraints
//! - [`render`] - substitute validated values into the content
//! - [`extract_candidates`] - propose placeholders for a plain prompt
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use prompt_stencil::{render, scan_variables, Value, VariableSpec, VariableType};
//!
//! let content = "Write a {{tone}} email to {{recipient}}.";
//! assert_eq!(scan_variables(content), vec!["tone", "recipient"]);
//!
//! let specs = vec![
//!     VariableSpec::new("tone", VariableType::Text).with_default("friendly"),
//!     VariableSpec::new("recipient", VariableType::Text).with_required(true),
//! ];
//! let mut values = HashMap::new();
//! values.insert("recipient".to_string(), Value::from("the team"));
//!
//! let outcome = render(content, &specs, &values);
//! assert!(outcome.validation.is_valid());
//! assert_eq!(outcome.text, "Write a friendly email to the team.");
//! ```

pub mod error;
pub mod extract;
pub mod parser;
pub mod render;
pub mod spec;
pub mod values;

pub use error::{Span, SyntaxError};
pub use extract::{extract_candidates, Extraction};
pub use parser::{scan_variables, validate_template, SyntaxReport};
pub use render::{render, RenderOutcome};
pub use spec::{
    check_specs, SpecError, Template, Value, VariableFile, VariableFileError, VariableSpec,
    VariableType,
};
pub use values::{validate_values, ValidationResult, ValueMap};
