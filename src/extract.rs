//! Heuristic variable extraction from plain prompt text
//!
//! Bootstraps a template out of a prompt that was not authored with
//! `{{}}` syntax. Three marker families are recognized: `[NAME]`,
//! `<NAME>` and bare `ALL_CAPS` words longer than two characters (short
//! caps runs like "AI" stay untouched). The scan is a single pass with a
//! priority-ordered rule list (bracket, then angle, then bare caps;
//! first match wins per span), so a marker is never substituted twice.
//!
//! The rewritten content should be re-checked with
//! [`validate_template`](crate::validate_template) before being accepted
//! as a template.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Candidate markers, one alternation so overlapping rules cannot fire
/// twice on the same span. Alternation order is the precedence order.
static CANDIDATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([A-Z][A-Z0-9_]*)\]|<([A-Z][A-Z0-9_]*)>|\b([A-Z][A-Z0-9_]{2,})\b")
        .expect("candidate pattern is valid")
});

/// Proposed template produced from plain prompt text
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// The prompt rewritten with `{{name}}` placeholders
    pub templated_content: String,
    /// Canonical (lower-cased) variable names, first appearance order
    pub detected_variables: Vec<String>,
}

/// Detect variable-like markers in `prompt_text` and rewrite them as
/// placeholders.
///
/// Best-effort and lossy by design: the heuristics cannot distinguish a
/// deliberate marker from text that merely looks like one.
///
/// # Example
///
/// ```rust
/// use prompt_stencil::extract_candidates;
///
/// let out = extract_candidates("Write a [TOPIC] essay about <AUDIENCE>");
/// assert_eq!(out.templated_content, "Write a {{topic}} essay about {{audience}}");
/// assert_eq!(out.detected_variables, vec!["topic", "audience"]);
/// ```
pub fn extract_candidates(prompt_text: &str) -> Extraction {
    let mut seen = HashSet::new();
    let mut detected = Vec::new();

    let templated_content = CANDIDATE
        .replace_all(prompt_text, |caps: &Captures| {
            let raw = caps
                .get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map_or("", |m| m.as_str());
            let name = raw.to_lowercase();
            if seen.insert(name.clone()) {
                detected.push(name.clone());
            }
            format!("{{{{{}}}}}", name)
        })
        .into_owned();

    Extraction {
        templated_content,
        detected_variables: detected,
    }
}
