//! Scan behavior: match discovery, exit codes, and input sources.

use crate::prelude::*;

/// Spec: docs/specs/cli.md#exit-codes
///
/// > Exit code 0 when at least one match is found
#[test]
fn matches_exit_zero() {
    let (_dir, path) = temp_text(b"barfoothefoobarman");
    tessel_cmd()
        .arg("scan")
        .arg(&path)
        .args(["-w", "foo", "-w", "bar"])
        .assert()
        .success()
        .stdout(predicates::str::contains("2 matches"));
}

/// Spec: docs/specs/cli.md#exit-codes
///
/// > Exit code 1 when the scan finds nothing
#[test]
fn no_matches_exit_one() {
    let (_dir, path) = temp_text(b"barfoothefoobarman");
    tessel_cmd()
        .arg("scan")
        .arg(&path)
        .args(["-w", "foo", "-w", "man"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("no matches"));
}

/// Spec: docs/specs/cli.md#exit-codes
///
/// > Exit code 2 on validation failure, with the reason on stderr
#[test]
fn uneven_word_lengths_exit_two() {
    let (_dir, path) = temp_text(b"wordgoodgoodgoodbestword");
    tessel_cmd()
        .arg("scan")
        .arg(&path)
        .args(["-w", "word", "-w", "good", "-w", "best", "-w", "xyz"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("length"));
}

/// Spec: docs/specs/cli.md#exit-codes
#[test]
fn missing_input_file_exits_two() {
    let (_dir, path) = temp_text(b"");
    let missing = path.with_file_name("absent.txt");
    tessel_cmd()
        .arg("scan")
        .arg(&missing)
        .args(["-w", "foo"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to read"));
}

/// Spec: docs/specs/cli.md#scan
///
/// > With no PATH the text is read from stdin
#[test]
fn reads_text_from_stdin() {
    tessel_cmd()
        .args(["scan", "-w", "foo", "-w", "bar"])
        .write_stdin("barfoothefoobarman")
        .assert()
        .success()
        .stdout(predicates::str::contains("<stdin>"));
}

/// Spec: docs/specs/cli.md#scan
///
/// > A PATH of "-" also means stdin
#[test]
fn dash_path_reads_stdin() {
    tessel_cmd()
        .args(["scan", "-", "-w", "foo", "-w", "bar"])
        .write_stdin("barfoothefoobarman")
        .assert()
        .success()
        .stdout(predicates::str::contains("<stdin>"));
}

/// Spec: docs/specs/cli.md#strategies
///
/// > Both strategies report the same offsets
#[test]
fn brute_strategy_matches_window_strategy() {
    let (_dir, path) = temp_text(b"barfoofoobarthefoobarman");
    let words = ["-w", "bar", "-w", "foo", "-w", "the"];

    for matcher in ["window", "brute", "both"] {
        tessel_cmd()
            .arg("scan")
            .arg(&path)
            .args(words)
            .args(["--matcher", matcher, "--output", "json"])
            .assert()
            .success()
            .stdout(predicates::str::contains("\"total\": 3"));
    }
}

/// Spec: docs/specs/cli.md#scan
///
/// > Overlapping spans are all reported
#[test]
fn reports_overlapping_spans() {
    let (_dir, path) = temp_text(b"aaaa");
    tessel_cmd()
        .arg("scan")
        .arg(&path)
        .args(["-w", "a", "-w", "a"])
        .assert()
        .success()
        .stdout(predicates::str::contains("3 matches"));
}

/// Spec: docs/specs/cli.md#scan
///
/// > Inputs beyond the in-memory threshold are scanned via mmap
#[test]
fn scans_large_files() {
    let mut content = vec![b'x'; 70 * 1024];
    content.extend_from_slice(b"barfoo");
    let (_dir, path) = temp_text(&content);

    tessel_cmd()
        .arg("scan")
        .arg(&path)
        .args(["-w", "foo", "-w", "bar", "--output", "json"])
        .assert()
        .success()
        .stdout(predicates::str::contains(format!(
            "\"offset\": {}",
            70 * 1024
        )));
}
