// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! A line-oriented command interpreter: one command per line, at most one
//! `>`/`>>`/`|` operator, `$NAME` variable substitution, and child
//! processes run through [`tokio::process::Command`].
//!
//! # Quick Start
//!
//! ```no_run
//! use minsh_shell::Interpreter;
//!
//! # async fn example() -> Result<(), minsh_shell::ExecError> {
//! let mut interp = Interpreter::new();
//! interp.eval("set NAME world").await?;
//! let outcome = interp.eval("echo hello $NAME").await?;
//! assert_eq!(outcome.exit_code(), Some(0));
//! # Ok(())
//! # }
//! ```
//!
//! # Pipeline stages
//!
//! ```text
//! input line
//! └── lexer        tokens with spans, delimiter runs collapsed
//!     └── parser   operator priority scan (`>` then `>>` then `|`), split
//!         └── exec::expand   whole-token $NAME substitution
//!             └── exec       set builtin / spawn / redirect / pipe
//! ```
//!
//! Classification priority is by operator, not position: a line containing
//! both `>` and `|` is a redirect. The split consumes the operator token,
//! and an operator with nothing before or after it rejects the line before
//! anything runs.
//!
//! # Errors
//!
//! Every failure is scoped to its line: [`ParseError`] for rejected input,
//! [`ExecError`] for substitution and process failures. Both carry spans
//! where one exists, and [`context_snippet`] renders a caret diagnostic
//! against the original line.

mod lexer;
mod parse_error;
mod parser;
mod span;
mod vars;

pub mod exec;

pub use exec::{ExecError, Interpreter, Outcome, DEFAULT_SNIPPET_CONTEXT};
pub use lexer::{tokenize, Token, MAX_LINE};
pub use parse_error::ParseError;
pub use parser::{
    find_operator, parse_line, parse_tokens, Command, Operator, ParsedLine, RedirectMode,
};
pub use span::{context_snippet, Span};
pub use vars::VarStore;
