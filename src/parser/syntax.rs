//! Structural validation of template content
//!
//! Checks are independent and all reported together: delimiter balance,
//! identifier legality inside every delimiter pair, and non-empty literal
//! content once the well-formed placeholders are removed.

use crate::error::{Span, SyntaxError};

use super::lexer::{tokenize, Token};

/// Outcome of a syntax validation pass over one template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyntaxReport {
    pub errors: Vec<SyntaxError>,
}

impl SyntaxReport {
    /// True when no defect was found
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Human-readable message for each defect, in source order
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}

/// Validate template content for structural well-formedness.
///
/// Never stops at the first problem: a template with unbalanced
/// delimiters, a bad variable name and no literal text reports all three.
///
/// # Example
///
/// ```rust
/// use prompt_stencil::validate_template;
///
/// assert!(validate_template("Hello {{name}}!").is_valid());
/// assert!(!validate_template("Hello {{name}!").is_valid());
/// ```
pub fn validate_template(content: &str) -> SyntaxReport {
    let tokens = tokenize(content);
    let mut errors = Vec::new();

    check_balance(content, &tokens, &mut errors);
    check_identifiers(content, &tokens, &mut errors);
    check_literal_content(content, &tokens, &mut errors);

    SyntaxReport { errors }
}

/// Count `{{` against `}}`. Well-formed placeholders contribute one of each.
fn check_balance(content: &str, tokens: &[(Token, Span)], errors: &mut Vec<SyntaxError>) {
    let mut open = 0;
    let mut close = 0;
    for (token, _) in tokens {
        match token {
            Token::Placeholder(_) => {
                open += 1;
                close += 1;
            }
            Token::Open => open += 1,
            Token::Close => close += 1,
            _ => {}
        }
    }
    if open != close {
        errors.push(SyntaxError::UnbalancedDelimiters {
            open,
            close,
            span: 0..content.len(),
        });
    }
}

/// Flag the interior of every `{{`/`}}` pair that failed to lex as a
/// placeholder. Pairing is non-greedy: a stray `{{` closes at the next
/// stray `}}`; a `{{` with no partner is a balance problem, not an
/// identifier problem.
fn check_identifiers(content: &str, tokens: &[(Token, Span)], errors: &mut Vec<SyntaxError>) {
    let mut open_end: Option<usize> = None;
    let mut pair_start = 0;
    for (token, span) in tokens {
        match token {
            Token::Open => {
                // A second `{{` abandons the previous one
                open_end = Some(span.end);
                pair_start = span.start;
            }
            Token::Close => {
                if let Some(interior_start) = open_end.take() {
                    let token_text = &content[interior_start..span.start];
                    errors.push(SyntaxError::InvalidIdentifier {
                        token: token_text.to_string(),
                        span: pair_start..span.end,
                    });
                }
            }
            _ => {}
        }
    }
}

/// Everything except well-formed placeholders counts as literal text;
/// an all-placeholder template is rejected.
fn check_literal_content(content: &str, tokens: &[(Token, Span)], errors: &mut Vec<SyntaxError>) {
    let literal_is_blank = tokens
        .iter()
        .filter(|(token, _)| !matches!(token, Token::Placeholder(_)))
        .all(|(_, span)| content[span.clone()].trim().is_empty());
    if literal_is_blank {
        errors.push(SyntaxError::EmptyContent {
            span: 0..content.len(),
        });
    }
}
