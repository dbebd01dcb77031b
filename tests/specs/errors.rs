//! Error reporting specs
//!
//! Verify diagnostics land on stderr, point at the offending token, and
//! always give the prompt back.

use crate::prelude::*;

#[test]
fn unknown_command_names_the_program() {
    session()
        .line("definitely-not-a-binary")
        .line("echo ok")
        .passes()
        .stdout_eq("$ $ ok\n$ \n")
        .stderr_has("minsh: command not found: definitely-not-a-binary");
}

#[test]
fn dangling_operator_points_at_the_operator() {
    session()
        .line("echo hi >")
        .passes()
        .stderr_has("`>` has no target after it")
        .stderr_has("echo hi >\n        ^");
}

#[test]
fn leading_operator_is_rejected() {
    session()
        .line("| cat")
        .passes()
        .stderr_has("`|` has no command before it");
}

#[test]
fn undefined_variable_reports_and_continues() {
    session()
        .line("echo $NOPE")
        .line("echo ok")
        .passes()
        .stdout_eq("$ $ ok\n$ \n")
        .stderr_has("minsh: undefined variable: NOPE");
}

#[test]
fn over_long_lines_are_rejected() {
    let long = "x".repeat(100);
    session()
        .line(&long)
        .line("echo ok")
        .passes()
        .stdout_eq("$ $ ok\n$ \n")
        .stderr_has("limit is 80");
}

#[test]
fn max_line_flag_changes_the_cap() {
    session()
        .args(&["--max-line", "8"])
        .line("echo hello")
        .passes()
        .stderr_has("limit is 8");
}

#[test]
fn unopenable_redirect_target_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    session()
        .pwd(dir.path())
        .line("echo x > missing/out.txt")
        .passes()
        .stderr_has("minsh: could not open missing/out.txt");
}

#[test]
fn signal_deaths_are_reported() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("die.sh");
    std::fs::write(&script, "#!/bin/sh\nkill -TERM $$\n").unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    session()
        .pwd(dir.path())
        .line("./die.sh")
        .line("echo ok")
        .passes()
        .stdout_eq("$ $ ok\n$ \n")
        .stderr_has("minsh: child terminated by signal 15");
}

#[test]
fn diagnostics_stay_off_stdout() {
    session()
        .line("echo hi >")
        .line("definitely-not-a-binary")
        .passes()
        .stdout_eq("$ $ $ \n");
}
