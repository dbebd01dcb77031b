// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluation outcomes.

/// What a successfully evaluated line did.
///
/// For a pipeline the exit status is the consumer's; the producer is always
/// reaped but its status only shows up in trace logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The line held nothing but delimiters; nothing ran.
    Empty,
    /// The `set` builtin defined a variable; no process was spawned.
    Defined,
    /// A child process (the consumer, for pipelines) exited with this code.
    /// Zero and non-zero both land here.
    Exited(i32),
    /// The child was terminated by this signal instead of exiting.
    Signaled(i32),
}

impl Outcome {
    /// The exit code, when the line ran a process that exited normally.
    pub fn exit_code(self) -> Option<i32> {
        match self {
            Outcome::Exited(code) => Some(code),
            _ => None,
        }
    }

    /// True when the line completed without a failing status: no-ops,
    /// builtin definitions, and zero exits.
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Empty | Outcome::Defined | Outcome::Exited(0))
    }
}
