// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interpreter variable store.
//!
//! One mapping from name to value, shared by the `set` builtin, the startup
//! initializer, and `$NAME` substitution. The store itself never reports
//! definition problems; whether a failed definition is surfaced is the
//! caller's choice (interactive `set` reports, initializer loading stays
//! silent).

use std::collections::HashMap;

/// Name → value mapping with last-write-wins semantics.
///
/// Names are arbitrary non-empty strings; the store does not police the
/// reference syntax used to read them back.
#[derive(Debug, Clone, Default)]
pub struct VarStore {
    entries: HashMap<String, String>,
}

impl VarStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an entry.
    pub fn define(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Look up the current value of `name`.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Number of defined variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is defined.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "vars_tests.rs"]
mod tests;
