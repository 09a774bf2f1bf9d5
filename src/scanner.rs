//! Structural tokenizer for dune files.
//!
//! Splits a dune file into whitespace runs, line comments, and
//! balanced-parenthesis expressions without building a syntax tree. This
//! scanner is purely structural - nothing beyond paren balance is validated.

/// One structural unit of a dune file.
///
/// Concatenating the text of every token in order reproduces the input byte
/// for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A run of spaces, tabs, and newlines.
    Whitespace(&'a str),
    /// A `;` comment up to (excluding) the terminating newline. Never a
    /// removal candidate.
    Comment(&'a str),
    /// A balanced `(...)` span, the only removal candidate.
    Expr(&'a str),
    /// A single stray character outside any expression.
    Text(&'a str),
}

impl<'a> Token<'a> {
    /// The exact source span of this token.
    pub fn text(&self) -> &'a str {
        match self {
            Token::Whitespace(s) | Token::Comment(s) | Token::Expr(s) | Token::Text(s) => s,
        }
    }
}

/// Tokenize a full dune file.
///
/// Paren depth is counted on the raw character stream: a parenthesis inside
/// a string literal or a comment nested within an expression span miscounts.
/// The target files are machine-generated build descriptions where that does
/// not occur. An unterminated `(` consumes to end of input rather than
/// failing.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b' ' | b'\t' | b'\n' | b'\r' => {
                let start = i;
                while i < bytes.len() && matches!(bytes[i], b' ' | b'\t' | b'\n' | b'\r') {
                    i += 1;
                }
                tokens.push(Token::Whitespace(&source[start..i]));
            }
            b';' => {
                let start = i;
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
                tokens.push(Token::Comment(&source[start..i]));
            }
            b'(' => {
                let start = i;
                let mut depth = 1usize;
                i += 1;
                while i < bytes.len() && depth > 0 {
                    match bytes[i] {
                        b'(' => depth += 1,
                        b')' => depth -= 1,
                        _ => {}
                    }
                    i += 1;
                }
                tokens.push(Token::Expr(&source[start..i]));
            }
            _ => {
                let start = i;
                i += 1;
                // Keep multi-byte characters whole.
                while i < bytes.len() && !source.is_char_boundary(i) {
                    i += 1;
                }
                tokens.push(Token::Text(&source[start..i]));
            }
        }
    }

    tokens
}
