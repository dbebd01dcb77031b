// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parse-phase error types.

use crate::parser::Operator;
use crate::span::{context_snippet, Span};
use thiserror::Error;

/// Errors detected before any substitution or process work happens.
///
/// All variants are line-local: the caller reports them and reprompts. Use
/// [`ParseError::context`] to render a caret snippet pointing at the
/// offending token.
///
/// # Examples
///
/// ```
/// use minsh_shell::{parse_line, ParseError};
///
/// let err = parse_line("echo hi >", ' ', 80).unwrap_err();
/// assert!(matches!(err, ParseError::MissingTarget { .. }));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input line exceeds the maximum supported length.
    ///
    /// A hard cap, checked before tokenization; the line is rejected whole.
    #[error("line is {length} bytes, limit is {limit}")]
    LineTooLong {
        /// Byte length of the rejected line.
        length: usize,
        /// The configured cap.
        limit: usize,
    },

    /// An operator appeared with no command before it, e.g. `| cat`.
    #[error("`{op}` has no command before it")]
    MissingCommand {
        /// The operator that was found.
        op: Operator,
        /// Location of the operator token.
        span: Span,
    },

    /// An operator appeared with nothing after it, e.g. `echo hi >`.
    ///
    /// Checked before the second command is built, so there is never an
    /// attempt to read a name that does not exist.
    #[error("`{op}` has no target after it")]
    MissingTarget {
        /// The operator that was found.
        op: Operator,
        /// Location of the operator token.
        span: Span,
    },
}

impl ParseError {
    /// Get the span associated with this error, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::LineTooLong { .. } => None,
            ParseError::MissingCommand { span, .. } => Some(*span),
            ParseError::MissingTarget { span, .. } => Some(*span),
        }
    }

    /// Render a snippet of `input` with a caret under the offending token.
    ///
    /// Returns `None` when the error has no span (the over-length reject,
    /// where pointing at one column would be meaningless).
    pub fn context(&self, input: &str, context_chars: usize) -> Option<String> {
        Some(context_snippet(input, self.span()?, context_chars))
    }
}
