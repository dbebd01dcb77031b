// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluation error types.

use std::io;

use crate::parse_error::ParseError;
use crate::span::{context_snippet, Span};
use thiserror::Error;

/// Errors surfaced while evaluating one input line.
///
/// Every variant is line-local: the caller reports it and returns to the
/// prompt. Nothing here is fatal to the interpreter itself.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The line was rejected before execution.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An argument referenced a variable the store does not hold.
    ///
    /// Substitution is all-or-nothing: when this fires, nothing was
    /// executed and no argument was rewritten.
    #[error("undefined variable: {name}")]
    Unresolved {
        /// The referenced name, without its `$` sigil.
        name: String,
        /// Location of the referencing token.
        span: Span,
    },

    /// The redirect target could not be opened; no process was spawned.
    #[error("could not open {target}: {source}")]
    Redirect {
        /// The target file name as written.
        target: String,
        /// Location of the target token.
        span: Span,
        /// The underlying open failure.
        source: io::Error,
    },

    /// The named program does not exist on the search path.
    #[error("command not found: {program}")]
    NotFound {
        /// The program name as written (after substitution).
        program: String,
        /// Location of the name token.
        span: Span,
    },

    /// The program exists but could not be spawned or awaited.
    #[error("could not run {program}: {source}")]
    Spawn {
        /// The program name as written (after substitution).
        program: String,
        /// Location of the name token.
        span: Span,
        /// The underlying spawn or wait failure.
        source: io::Error,
    },

    /// `set` invoked with the wrong shape; nothing was defined.
    #[error("usage: set <name> <value>")]
    SetUsage {
        /// Token count the line actually had, including `set` itself.
        found: usize,
    },

    /// Plumbing between the two ends of a pipeline failed.
    #[error("pipe setup failed: {source}")]
    Pipe {
        /// The underlying channel failure.
        source: io::Error,
    },
}

impl ExecError {
    /// Get the span associated with this error, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            ExecError::Parse(err) => err.span(),
            ExecError::Unresolved { span, .. } => Some(*span),
            ExecError::Redirect { span, .. } => Some(*span),
            ExecError::NotFound { span, .. } => Some(*span),
            ExecError::Spawn { span, .. } => Some(*span),
            ExecError::SetUsage { .. } => None,
            ExecError::Pipe { .. } => None,
        }
    }

    /// Render a snippet of `input` with a caret under the offending token.
    pub fn context(&self, input: &str, context_chars: usize) -> Option<String> {
        Some(context_snippet(input, self.span()?, context_chars))
    }
}
