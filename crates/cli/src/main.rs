// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! minsh - minimal interactive shell

mod repl;
mod vars_file;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use minsh_shell::{Interpreter, MAX_LINE};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

#[derive(Parser, Debug)]
#[command(
    name = "minsh",
    version,
    about = "Minimal shell - one command per line, pipes and redirects"
)]
struct Cli {
    /// Startup definitions file, one `NAME VALUE` pair per line
    ///
    /// Defaults to ~/.minshrc, which may be absent. A file named here
    /// must exist.
    #[arg(long = "vars-file", value_name = "PATH")]
    vars_file: Option<PathBuf>,

    /// Character that separates tokens on the input line
    #[arg(long, value_name = "CHAR", default_value_t = ' ')]
    delimiter: char,

    /// Longest accepted input line, in bytes
    #[arg(long = "max-line", value_name = "BYTES", default_value_t = MAX_LINE)]
    max_line: usize,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("minsh: {msg}");
        }
        std::process::exit(1);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output (common when
/// thiserror variants use `#[error("... {0}")]` with `#[from]`).
/// Otherwise we render the full chain so context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    // Walk the source chain; if every source message already appears
    // in the top-level string, the chain is redundant.
    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    // Non-redundant chain — render like anyhow's Debug.
    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    let mut interp = Interpreter::new()
        .delimiter(cli.delimiter)
        .max_line(cli.max_line);
    vars_file::load_startup(&mut interp, cli.vars_file.as_deref())?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    repl::run(&mut interp, stdin, stdout).await
}

/// Route tracing output to stderr, gated by the `MINSH_LOG` filter.
///
/// Off unless the variable is set: the prompt owns stdout, and stderr is
/// reserved for diagnostics the user asked for.
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("MINSH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
