// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The prompt loop.
//!
//! Generic over its streams so tests can drive it from in-memory buffers.
//! Prompts go to the output stream; per-line diagnostics go to stderr,
//! keeping piped stdout clean.

use minsh_shell::{ExecError, Interpreter, Outcome, DEFAULT_SNIPPET_CONTEXT};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

#[cfg(test)]
#[path = "repl_tests.rs"]
mod tests;

const PROMPT: &str = "$ ";

/// Drive the prompt/read/eval cycle until end of input.
///
/// Every line is evaluated, reported, and forgotten; a failed line never
/// ends the session. End of input prints one final newline so the invoking
/// terminal gets its cursor back at column zero, then returns success.
pub async fn run<R, W>(interp: &mut Interpreter, mut input: R, mut out: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();
    loop {
        out.write_all(PROMPT.as_bytes()).await?;
        out.flush().await?;

        line.clear();
        if input.read_line(&mut line).await? == 0 {
            out.write_all(b"\n").await?;
            out.flush().await?;
            return Ok(());
        }

        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);

        let result = interp.eval(trimmed).await;
        if let Some(message) = report(&result, trimmed) {
            eprintln!("{message}");
        }
    }
}

/// Render the user-facing message for one evaluated line, if any.
///
/// Quiet on success and on ordinary non-zero exits, like any shell. A
/// signal death gets one line naming the signal; an error gets its message
/// plus a caret snippet when the error knows where in the line it happened.
fn report(result: &Result<Outcome, ExecError>, line: &str) -> Option<String> {
    match result {
        Ok(Outcome::Signaled(signal)) => {
            Some(format!("minsh: child terminated by signal {signal}"))
        }
        Ok(_) => None,
        Err(err) => {
            let mut message = format!("minsh: {err}");
            if let Some(snippet) = err.context(line, DEFAULT_SNIPPET_CONTEXT) {
                message.push('\n');
                message.push_str(&snippet);
            }
            Some(message)
        }
    }
}
