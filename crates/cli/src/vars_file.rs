// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Startup variable definitions.
//!
//! One `NAME VALUE` pair per line, split with the interpreter's own
//! delimiter; lines of any other shape are skipped. An explicitly requested
//! file must exist, while the default `~/.minshrc` is best-effort.

use std::path::Path;

use anyhow::{Context, Result};
use minsh_shell::Interpreter;

#[cfg(test)]
#[path = "vars_file_tests.rs"]
mod tests;

const DEFAULT_FILE: &str = ".minshrc";

/// Seed `interp` from a definitions file before the first prompt.
///
/// With `explicit` set, an unreadable file is a startup error. Otherwise
/// `~/.minshrc` is tried and any read failure is ignored, so a fresh
/// account starts without ceremony.
pub fn load_startup(interp: &mut Interpreter, explicit: Option<&Path>) -> Result<()> {
    if let Some(path) = explicit {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("could not read vars file {}", path.display()))?;
        let defined = interp.load_vars(&contents);
        tracing::debug!(path = %path.display(), defined, "loaded vars file");
        return Ok(());
    }

    let Some(path) = dirs::home_dir().map(|home| home.join(DEFAULT_FILE)) else {
        return Ok(());
    };
    if let Ok(contents) = std::fs::read_to_string(&path) {
        let defined = interp.load_vars(&contents);
        tracing::debug!(path = %path.display(), defined, "loaded vars file");
    }
    Ok(())
}
