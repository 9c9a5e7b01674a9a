//! Variable discovery: collect the placeholder names referenced in a template

use std::collections::HashSet;

use super::lexer::{tokenize, Token};

/// Extract the set of variable names referenced as `{{name}}` in `content`.
///
/// Duplicate references collapse to a single entry; the returned order is
/// first appearance in the content.
///
/// # Example
///
/// ```rust
/// use prompt_stencil::scan_variables;
///
/// let vars = scan_variables("Hello {{name}}, you are {{age}} and {{name}} again");
/// assert_eq!(vars, vec!["name", "age"]);
/// ```
pub fn scan_variables(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for (token, _) in tokenize(content) {
        if let Token::Placeholder(name) = token {
            if seen.insert(name.clone()) {
                names.push(name);
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_empty_content() {
        assert!(scan_variables("").is_empty());
    }

    #[test]
    fn test_scan_no_placeholders() {
        assert!(scan_variables("just plain text").is_empty());
    }

    #[test]
    fn test_scan_single_variable() {
        assert_eq!(scan_variables("Hi {{name}}"), vec!["name"]);
    }

    #[test]
    fn test_scan_duplicates_collapse() {
        let vars = scan_variables("Hello {{name}}, you are {{age}} and {{name}} again");
        assert_eq!(vars, vec!["name", "age"]);
    }

    #[test]
    fn test_scan_preserves_case() {
        assert_eq!(scan_variables("{{userName}} {{USER_ID}}"), vec!["userName", "USER_ID"]);
    }

    #[test]
    fn test_scan_ignores_malformed_references() {
        // `{{user name}}` is not a legal reference; `{{age}}` is
        assert_eq!(scan_variables("{{user name}} {{age}}"), vec!["age"]);
    }

    #[test]
    fn test_scan_adjacent_placeholders() {
        assert_eq!(scan_variables("{{a}}{{b}}{{c}}"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_scan_numeric_and_underscore_names() {
        assert_eq!(scan_variables("{{v1}} {{_private}} {{a_b_c}}"), vec!["v1", "_private", "a_b_c"]);
    }
}
