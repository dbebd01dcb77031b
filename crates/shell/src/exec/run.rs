// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Child process spawning and supervision.
//!
//! Three shapes: a single child, a child with stdout bound to a file, and a
//! producer/consumer pair joined by an anonymous pipe. Handles never escape
//! this module; every spawned child is awaited before returning, including
//! on the error paths, so no zombie is left behind.

use std::io;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use tokio::process::Child;

use crate::parser::{Command, RedirectMode};

use super::error::ExecError;
use super::result::Outcome;

/// Run one command with inherited standard streams.
pub(crate) async fn run_simple(cmd: &Command, cwd: Option<&Path>) -> Result<Outcome, ExecError> {
    tracing::debug!(program = %cmd.name(), "running command");
    let mut proc = build(cmd, cwd);
    let mut child = spawn(&mut proc, cmd)?;
    let status = wait(&mut child, cmd).await?;
    Ok(classify(status))
}

/// Run one command with stdout bound to `target`, truncating or appending.
///
/// The file is opened before anything is spawned; an unopenable target
/// means no process ever starts. The handle closes when this function
/// returns, on every path.
pub(crate) async fn run_redirect(
    cmd: &Command,
    target: &Command,
    mode: RedirectMode,
    cwd: Option<&Path>,
) -> Result<Outcome, ExecError> {
    let path = resolve_target(target.name(), cwd);
    tracing::debug!(
        program = %cmd.name(),
        target = %path.display(),
        append = matches!(mode, RedirectMode::Append),
        "running redirected command"
    );

    let mut options = tokio::fs::OpenOptions::new();
    options.create(true).write(true);
    match mode {
        RedirectMode::Overwrite => options.truncate(true),
        RedirectMode::Append => options.append(true),
    };
    let file = options
        .open(&path)
        .await
        .map_err(|source| ExecError::Redirect {
            target: target.name().to_string(),
            span: target.name_span(),
            source,
        })?;

    let mut proc = build(cmd, cwd);
    proc.stdout(file.into_std().await);
    let mut child = spawn(&mut proc, cmd)?;
    let status = wait(&mut child, cmd).await?;
    Ok(classify(status))
}

/// Run `producer | consumer` over one anonymous pipe.
///
/// The producer's captured stdout handle moves into the consumer's stdin,
/// so the parent's copies of both pipe ends are gone once the second spawn
/// is attempted. Both children are reaped, in either order, before this
/// returns; the line's outcome is the consumer's status.
pub(crate) async fn run_pipe(
    producer: &Command,
    consumer: &Command,
    cwd: Option<&Path>,
) -> Result<Outcome, ExecError> {
    tracing::debug!(
        producer = %producer.name(),
        consumer = %consumer.name(),
        "running pipeline"
    );

    let mut first = build(producer, cwd);
    first.stdout(Stdio::piped());
    let mut left = spawn(&mut first, producer)?;

    let captured = left.stdout.take().ok_or_else(|| ExecError::Pipe {
        source: io::Error::other("producer stdout was not captured"),
    });
    let stdin = captured.and_then(|out| {
        TryInto::<Stdio>::try_into(out).map_err(|source| ExecError::Pipe { source })
    });
    let stdin = match stdin {
        Ok(stdin) => stdin,
        Err(err) => {
            // reap the already-running producer before surfacing the error
            let _ = left.wait().await;
            return Err(err);
        }
    };

    let mut second = build(consumer, cwd);
    second.stdin(stdin);
    let spawned = spawn(&mut second, consumer);
    // Dropping the builder releases the parent's last copy of the read end
    // whether or not the spawn succeeded.
    drop(second);
    let mut right = match spawned {
        Ok(child) => child,
        Err(err) => {
            // The producer now writes into a closed pipe and terminates on
            // its own; reap it before surfacing the error.
            let _ = left.wait().await;
            return Err(err);
        }
    };

    let (left_status, right_status) = tokio::join!(left.wait(), right.wait());
    let left_status = left_status.map_err(|source| wait_error(producer, source))?;
    let right_status = right_status.map_err(|source| wait_error(consumer, source))?;
    tracing::debug!(producer = %producer.name(), status = ?left_status.code(), "producer finished");

    Ok(classify(right_status))
}

/// Map an exit status to an outcome: normal exits keep their code, a
/// signal death is reported as the signal number.
fn classify(status: ExitStatus) -> Outcome {
    match status.code() {
        Some(code) => Outcome::Exited(code),
        None => Outcome::Signaled(status.signal().unwrap_or(0)),
    }
}

fn build(cmd: &Command, cwd: Option<&Path>) -> tokio::process::Command {
    let mut proc = tokio::process::Command::new(cmd.name());
    proc.args(cmd.args());
    if let Some(dir) = cwd {
        proc.current_dir(dir);
    }
    proc
}

/// Spawn, translating the not-found case into its own variant.
fn spawn(proc: &mut tokio::process::Command, cmd: &Command) -> Result<Child, ExecError> {
    proc.spawn().map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ExecError::NotFound {
            program: cmd.name().to_string(),
            span: cmd.name_span(),
        },
        _ => ExecError::Spawn {
            program: cmd.name().to_string(),
            span: cmd.name_span(),
            source,
        },
    })
}

async fn wait(child: &mut Child, cmd: &Command) -> Result<ExitStatus, ExecError> {
    child
        .wait()
        .await
        .map_err(|source| wait_error(cmd, source))
}

fn wait_error(cmd: &Command, source: io::Error) -> ExecError {
    ExecError::Spawn {
        program: cmd.name().to_string(),
        span: cmd.name_span(),
        source,
    }
}

/// Interpret the redirect target relative to the configured working
/// directory, matching where the child itself would create files.
fn resolve_target(name: &str, cwd: Option<&Path>) -> PathBuf {
    match cwd {
        Some(dir) if Path::new(name).is_relative() => dir.join(name),
        _ => PathBuf::from(name),
    }
}
