//! Parsing and validation of `{{name}}` template syntax

pub mod lexer;
mod scan;
mod syntax;

pub use scan::scan_variables;
pub use syntax::{validate_template, SyntaxReport};
