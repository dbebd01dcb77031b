// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tokenizer that splits an input line on a single-character delimiter.
//!
//! No operator interpretation happens here: `>`, `>>`, and `|` come out as
//! ordinary tokens and are classified later by [`crate::parser`]. Runs of the
//! delimiter are collapsed, so tokens are never empty.

use crate::parse_error::ParseError;
use crate::span::Span;

/// Default maximum input line length in bytes, measured after the trailing
/// newline has been stripped. Overridable per interpreter via
/// [`Interpreter::max_line`](crate::Interpreter::max_line).
pub const MAX_LINE: usize = 80;

/// An owned token with its location in the original line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text, owned independently of the input line.
    pub text: String,
    /// Byte range the token occupied in the input line.
    pub span: Span,
}

impl Token {
    /// Create a token. Mostly useful in tests; [`tokenize`] is the normal
    /// producer.
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    /// The token text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Split `line` into owned tokens on `delimiter`.
///
/// The line must already have its trailing newline stripped. Consecutive,
/// leading, and trailing delimiters are collapsed; an all-delimiter or empty
/// line produces an empty token sequence.
///
/// Fails with [`ParseError::LineTooLong`] when the line exceeds `max_len`
/// bytes. The cap is a hard reject: callers drop the line and reprompt.
///
/// # Examples
///
/// ```
/// use minsh_shell::tokenize;
///
/// let tokens = tokenize("echo  hello", ' ', 80)?;
/// let texts: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
/// assert_eq!(texts, ["echo", "hello"]);
/// # Ok::<(), minsh_shell::ParseError>(())
/// ```
pub fn tokenize(line: &str, delimiter: char, max_len: usize) -> Result<Vec<Token>, ParseError> {
    if line.len() > max_len {
        return Err(ParseError::LineTooLong {
            length: line.len(),
            limit: max_len,
        });
    }

    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, ch) in line.char_indices() {
        if ch == delimiter {
            if let Some(s) = start.take() {
                tokens.push(Token::new(&line[s..i], Span::new(s, i)));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(Token::new(&line[s..], Span::new(s, line.len())));
    }

    Ok(tokens)
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
