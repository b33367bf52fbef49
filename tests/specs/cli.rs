//! CLI surface: help, version, completions, and usage errors.

use crate::prelude::*;

/// Spec: docs/specs/cli.md#exit-codes
///
/// > Exit code 0 when invoked with --help
#[test]
fn help_exits_successfully() {
    tessel_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("tessel"));
}

/// Spec: docs/specs/cli.md#exit-codes
///
/// > Exit code 0 when invoked with --version
#[test]
fn version_exits_successfully() {
    tessel_cmd().arg("--version").assert().success();
}

/// Spec: docs/specs/cli.md#commands
///
/// > Usage errors exit with code 2
#[test]
fn missing_subcommand_is_a_usage_error() {
    tessel_cmd().assert().code(2);
}

/// Spec: docs/specs/cli.md#scan
///
/// > scan requires at least one --word
#[test]
fn scan_without_words_is_a_usage_error() {
    let (_dir, path) = temp_text(b"barfoothefoobarman");
    tessel_cmd().arg("scan").arg(&path).assert().code(2);
}

/// Spec: docs/specs/cli.md#completions
///
/// > completions emits a script for the requested shell
#[test]
fn completions_emit_shell_script() {
    tessel_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicates::str::contains("tessel"));
}

/// Spec: docs/specs/cli.md#completions
#[test]
fn completions_reject_unknown_shell() {
    tessel_cmd().args(["completions", "tcsh"]).assert().code(2);
}
