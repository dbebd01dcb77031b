// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator resolution and command splitting.
//!
//! One operator takes effect per line. Classification scans for `>` first,
//! then `>>`, then `|` — priority by operator, not by line position — and
//! the splitter partitions the tokens around the match, consuming the
//! operator token itself. Any further operator tokens are carried through
//! as ordinary arguments.

use std::fmt;

use crate::lexer::{self, Token};
use crate::parse_error::ParseError;
use crate::span::Span;

/// A control operator token.
///
/// The variant order is the classification priority: a line containing both
/// `>` and `|` is a redirect, never a pipe, wherever the tokens sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `>` — truncate the target and write.
    Overwrite,
    /// `>>` — append to the target.
    Append,
    /// `|` — connect two processes.
    Pipe,
}

impl Operator {
    /// All operators in classification priority order.
    pub const PRIORITY: [Operator; 3] = [Operator::Overwrite, Operator::Append, Operator::Pipe];

    /// The literal token text for this operator.
    pub const fn token(self) -> &'static str {
        match self {
            Operator::Overwrite => ">",
            Operator::Append => ">>",
            Operator::Pipe => "|",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// How a redirect opens its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectMode {
    /// Truncate the file before writing (`>`).
    Overwrite,
    /// Seek to the end and append (`>>`).
    Append,
}

/// One command: a non-empty token sequence whose first element is the
/// program name (argv\[0\]) and whose remainder are its arguments.
///
/// Owned independently of the input line; dropping the command releases
/// every token exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    words: Vec<Token>,
}

impl Command {
    pub(crate) fn new(words: Vec<Token>) -> Self {
        debug_assert!(!words.is_empty(), "a command always has a name");
        Self { words }
    }

    /// The program name (argv\[0\]).
    pub fn name(&self) -> &str {
        &self.words[0].text
    }

    /// Location of the name token in the input line.
    pub fn name_span(&self) -> Span {
        self.words[0].span
    }

    /// The arguments after the name, in order.
    pub fn args(&self) -> impl Iterator<Item = &str> {
        self.words[1..].iter().map(Token::as_str)
    }

    /// All tokens including the name.
    pub fn words(&self) -> &[Token] {
        &self.words
    }

    /// Number of tokens including the name. Always at least one.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// A classified input line, ready for substitution and execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Nothing but delimiters; the caller does nothing.
    Empty,
    /// No operator: one command.
    Exec(Command),
    /// `cmd > target` or `cmd >> target`. The target command's name is the
    /// file; any extra tokens after it are carried but ignored at execution.
    Redirect {
        cmd: Command,
        target: Command,
        mode: RedirectMode,
    },
    /// `producer | consumer`.
    Pipe {
        producer: Command,
        consumer: Command,
    },
}

/// Scan tokens for the highest-priority operator present.
///
/// Returns the classification and the index of the matching token, or `None`
/// when the sequence has no operator. Operators match whole tokens only:
/// `a>b` is a literal argument.
pub fn find_operator(tokens: &[Token]) -> Option<(Operator, usize)> {
    for op in Operator::PRIORITY {
        if let Some(idx) = tokens.iter().position(|t| t.text == op.token()) {
            return Some((op, idx));
        }
    }
    None
}

/// Partition a token sequence around its operator, if any.
///
/// The operator token is deleted, not replaced: for a sequence of `n` tokens
/// with an operator, the two sides hold `n - 1` tokens between them.
pub fn parse_tokens(tokens: Vec<Token>) -> Result<ParsedLine, ParseError> {
    if tokens.is_empty() {
        return Ok(ParsedLine::Empty);
    }

    let Some((op, idx)) = find_operator(&tokens) else {
        return Ok(ParsedLine::Exec(Command::new(tokens)));
    };

    if idx == 0 {
        return Err(ParseError::MissingCommand {
            op,
            span: tokens[0].span,
        });
    }
    if idx + 1 == tokens.len() {
        return Err(ParseError::MissingTarget {
            op,
            span: tokens[idx].span,
        });
    }

    let mut left = tokens;
    let right = left.split_off(idx + 1);
    let operator = left.pop();
    debug_assert!(operator.is_some_and(|t| t.text == op.token()));

    let cmd = Command::new(left);
    let rest = Command::new(right);
    Ok(match op {
        Operator::Overwrite => ParsedLine::Redirect {
            cmd,
            target: rest,
            mode: RedirectMode::Overwrite,
        },
        Operator::Append => ParsedLine::Redirect {
            cmd,
            target: rest,
            mode: RedirectMode::Append,
        },
        Operator::Pipe => ParsedLine::Pipe {
            producer: cmd,
            consumer: rest,
        },
    })
}

/// Tokenize and classify one input line.
///
/// The line must already have its trailing newline stripped.
pub fn parse_line(line: &str, delimiter: char, max_len: usize) -> Result<ParsedLine, ParseError> {
    parse_tokens(lexer::tokenize(line, delimiter, max_len)?)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
