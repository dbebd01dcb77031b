// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line evaluation: substitution, the `set` builtin, and child processes
//! run via [`tokio::process::Command`].
//!
//! The [`Interpreter`] owns the variable store and the line configuration,
//! and drives one line at a time through tokenization, operator
//! classification, `$NAME` substitution, and execution. Each evaluation is
//! independent: every failure is reported for that line only and the next
//! line starts fresh.
//!
//! # Example
//!
//! ```no_run
//! use minsh_shell::{Interpreter, Outcome};
//!
//! # async fn example() -> Result<(), minsh_shell::ExecError> {
//! let mut interp = Interpreter::new()
//!     .cwd("/tmp")
//!     .variable("NAME", "world");
//!
//! let outcome = interp.eval("echo hello $NAME").await?;
//! assert_eq!(outcome, Outcome::Exited(0));
//! # Ok(())
//! # }
//! ```
//!
//! # Unsupported Features
//!
//! One operator per line is the whole grammar. Quoting, globbing, multiple
//! pipes, `&&`/`||` chains, backgrounding, and job control are not
//! recognized; their characters pass through as literal argument text.

use std::path::PathBuf;

use crate::lexer::{self, MAX_LINE};
use crate::parser::{parse_line, Command, ParsedLine};
use crate::vars::VarStore;

pub mod error;
mod expand;
pub mod result;
mod run;

pub use error::ExecError;
pub use result::Outcome;

/// Default number of context characters shown around an error location.
pub const DEFAULT_SNIPPET_CONTEXT: usize = 40;

/// Evaluates input lines against a persistent variable store.
///
/// Create one with [`Interpreter::new`], configure it with the builder
/// methods, then feed it lines with [`eval`](Interpreter::eval).
#[derive(Debug)]
pub struct Interpreter {
    vars: VarStore,
    delimiter: char,
    max_line: usize,
    cwd: Option<PathBuf>,
}

impl Interpreter {
    /// Create an interpreter with a space delimiter, the default line cap,
    /// and an empty store.
    pub fn new() -> Self {
        Self {
            vars: VarStore::new(),
            delimiter: ' ',
            max_line: MAX_LINE,
            cwd: None,
        }
    }

    /// Set the token delimiter.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the maximum accepted line length in bytes.
    pub fn max_line(mut self, limit: usize) -> Self {
        self.max_line = limit;
        self
    }

    /// Set the working directory for spawned processes and relative
    /// redirect targets.
    pub fn cwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.cwd = Some(path.into());
        self
    }

    /// Pre-define a single variable.
    pub fn variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.define(name, value);
        self
    }

    /// Pre-define multiple variables.
    pub fn variables(
        mut self,
        vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        for (name, value) in vars {
            self.vars.define(name, value);
        }
        self
    }

    /// Read access to the variable store.
    pub fn vars(&self) -> &VarStore {
        &self.vars
    }

    /// Evaluate one input line to completion.
    ///
    /// A trailing newline, if present, is stripped first. The call returns
    /// once every process the line spawned has been reaped.
    pub async fn eval(&mut self, line: &str) -> Result<Outcome, ExecError> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        match parse_line(line, self.delimiter, self.max_line)? {
            ParsedLine::Empty => Ok(Outcome::Empty),
            ParsedLine::Exec(cmd) => {
                let cmd = expand::expand_command(&cmd, &self.vars)?;
                if cmd.name() == "set" {
                    return self.run_set(&cmd);
                }
                run::run_simple(&cmd, self.cwd.as_deref()).await
            }
            ParsedLine::Redirect { cmd, target, mode } => {
                let cmd = expand::expand_command(&cmd, &self.vars)?;
                run::run_redirect(&cmd, &target, mode, self.cwd.as_deref()).await
            }
            ParsedLine::Pipe { producer, consumer } => {
                let producer = expand::expand_command(&producer, &self.vars)?;
                let consumer = expand::expand_command(&consumer, &self.vars)?;
                run::run_pipe(&producer, &consumer, self.cwd.as_deref()).await
            }
        }
    }

    /// Load `NAME VALUE` definitions from initializer-file contents.
    ///
    /// Each line is tokenized with the interpreter's own delimiter and line
    /// cap; lines that are not exactly two tokens are skipped without
    /// comment, the suppressed twin of the interactive `set` builtin.
    /// Returns how many definitions were applied.
    pub fn load_vars(&mut self, contents: &str) -> usize {
        let mut loaded = 0;
        for line in contents.lines() {
            let Ok(tokens) = lexer::tokenize(line, self.delimiter, self.max_line) else {
                continue;
            };
            if let [name, value] = tokens.as_slice() {
                self.vars.define(name.text.clone(), value.text.clone());
                loaded += 1;
            }
        }
        tracing::debug!(loaded, "initializer variables loaded");
        loaded
    }

    /// `set NAME VALUE`, already substituted: exactly three tokens or a
    /// usage error that defines nothing.
    fn run_set(&mut self, cmd: &Command) -> Result<Outcome, ExecError> {
        match cmd.words() {
            [_, name, value] => {
                tracing::debug!(name = %name.text, "variable defined");
                self.vars.define(name.text.clone(), value.text.clone());
                Ok(Outcome::Defined)
            }
            words => Err(ExecError::SetUsage { found: words.len() }),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "interp_tests.rs"]
mod tests;
