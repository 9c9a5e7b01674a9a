//! Lexer for template content using logos
//!
//! Template content is free text interrupted by `{{name}}` placeholder
//! references. The token set covers every byte of the input so the scanner
//! and syntax validator can reconstruct literal runs exactly; there is no
//! skip rule and no escape mechanism (a literal `{{` is indistinguishable
//! from an opening delimiter).

use logos::Logos;

use crate::error::Span;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    /// A well-formed placeholder: `{{` + identifier + `}}`
    #[regex(r"\{\{[A-Za-z0-9_]+\}\}", |lex| {
        let s = lex.slice();
        s[2..s.len() - 2].to_string()
    })]
    Placeholder(String),

    /// An opening delimiter that did not form a placeholder
    #[token("{{")]
    Open,

    /// A closing delimiter that did not form a placeholder
    #[token("}}")]
    Close,

    /// A run of literal text containing no braces
    #[regex(r"[^{}]+")]
    Text,

    /// A lone brace, treated as literal text
    #[regex(r"[{}]")]
    Brace,
}

/// Tokenize template content into `(token, span)` pairs.
///
/// The lexer is constructed fresh per call; no match state is shared
/// between invocations. The token rules cover all possible input, so
/// lexing never fails.
pub fn tokenize(content: &str) -> Vec<(Token, Span)> {
    Token::lexer(content)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
        .collect()
}
