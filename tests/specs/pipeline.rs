//! Pipe and redirect specs
//!
//! Verify data flow between two processes and into files, end to end.

use crate::prelude::*;

#[test]
fn pipe_connects_two_commands() {
    session()
        .line("echo hello | tr a-z A-Z")
        .passes()
        .stdout_eq("$ HELLO\n$ \n");
}

#[test]
fn substitution_feeds_the_pipeline() {
    session()
        .line("set WORD hello")
        .line("echo $WORD | tr a-z A-Z")
        .passes()
        .stdout_eq("$ $ HELLO\n$ \n");
}

#[test]
fn redirect_writes_a_file() {
    let dir = tempfile::tempdir().unwrap();
    session()
        .pwd(dir.path())
        .line("echo hello > out.txt")
        .line("cat out.txt")
        .passes()
        .stdout_eq("$ $ hello\n$ \n");
}

#[test]
fn overwrite_truncates_between_lines() {
    let dir = tempfile::tempdir().unwrap();
    session()
        .pwd(dir.path())
        .line("echo a much longer first line > out.txt")
        .line("echo short > out.txt")
        .line("cat out.txt")
        .passes()
        .stdout_eq("$ $ $ short\n$ \n");
}

#[test]
fn append_accumulates() {
    let dir = tempfile::tempdir().unwrap();
    session()
        .pwd(dir.path())
        .line("echo a >> log.txt")
        .line("echo b >> log.txt")
        .line("cat log.txt")
        .passes()
        .stdout_eq("$ $ $ a\nb\n$ \n");
}

#[test]
fn redirect_wins_over_pipe() {
    let dir = tempfile::tempdir().unwrap();
    session()
        .pwd(dir.path())
        .line("echo hi | cat > out.txt")
        .line("cat out.txt")
        .passes()
        .stdout_eq("$ $ hi | cat\n$ \n");
}

#[test]
fn consumer_failure_keeps_the_session_alive() {
    session()
        .line("echo hi | false")
        .line("echo ok")
        .passes()
        .stdout_eq("$ $ ok\n$ \n")
        .stderr_eq("");
}
