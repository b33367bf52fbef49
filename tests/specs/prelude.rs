//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use assert_cmd::Command;

pub use assert_cmd::prelude::*;
pub use predicates;

/// Returns a Command configured to run the tessel binary
pub fn tessel_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("tessel"))
}

/// Write `content` into a fresh temp dir and return (dir, file path).
///
/// The dir carries a `.git` marker so config discovery never escapes it.
pub fn temp_text(content: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    let path = dir.path().join("input.txt");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

/// `temp_text` plus a tessel.toml next to the input file.
pub fn temp_text_with_config(
    content: &[u8],
    config: &str,
) -> (tempfile::TempDir, std::path::PathBuf) {
    let (dir, path) = temp_text(content);
    std::fs::write(dir.path().join("tessel.toml"), config).unwrap();
    (dir, path)
}
