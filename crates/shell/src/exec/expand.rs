// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-token `$NAME` substitution.
//!
//! Substitution is all-or-nothing per command: either every reference
//! resolves and a fully rewritten command comes back, or the first
//! unresolved name fails the command and the original is untouched. The
//! command name (argv\[0\]) is never substituted.

use crate::lexer::Token;
use crate::parser::Command;
use crate::vars::VarStore;

use super::error::ExecError;

/// Rewrite every `$NAME` argument of `cmd` from `vars`.
///
/// Returns a new command; `cmd` itself is never modified, so a failed
/// substitution commits nothing. Replacement is whole-token and the value is
/// not re-scanned for further references.
pub(crate) fn expand_command(cmd: &Command, vars: &VarStore) -> Result<Command, ExecError> {
    let mut words = Vec::with_capacity(cmd.word_count());
    words.push(cmd.words()[0].clone());
    for word in &cmd.words()[1..] {
        words.push(expand_word(word, vars)?);
    }
    Ok(Command::new(words))
}

fn expand_word(word: &Token, vars: &VarStore) -> Result<Token, ExecError> {
    let Some(name) = reference_name(&word.text) else {
        return Ok(word.clone());
    };
    match vars.lookup(name) {
        Some(value) => Ok(Token::new(value, word.span)),
        None => Err(ExecError::Unresolved {
            name: name.to_string(),
            span: word.span,
        }),
    }
}

/// The variable name referenced by `text`, if it is a reference at all.
///
/// A reference is a whole token starting with `$` and holding at least one
/// more character. A lone `$` is a literal, and `$` after the first
/// character (`a$b`) never starts a reference.
fn reference_name(text: &str) -> Option<&str> {
    match text.strip_prefix('$') {
        Some("") => None,
        other => other,
    }
}

#[cfg(test)]
#[path = "expand_tests.rs"]
mod tests;
