// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loaded from tessel.toml.
//!
//! Every key is optional; the file itself is optional too. Command-line
//! flags override anything set here.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::cli::{MatcherChoice, OutputFormat};

/// Top-level configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Defaults for the scan command.
    pub scan: ScanConfig,
}

/// Defaults for `tessel scan`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Matching strategy: "window", "brute", or "both".
    pub matcher: MatcherChoice,
    /// Output format: "text" or "json".
    pub output: OutputFormat,
    /// Maximum matches displayed; 0 shows all.
    pub limit: usize,
    /// Bytes of context shown around each match in text output.
    pub context: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            matcher: MatcherChoice::default(),
            output: OutputFormat::default(),
            limit: 0,
            context: default_context(),
        }
    }
}

fn default_context() -> usize {
    10
}

/// Load configuration from `path`.
pub fn load(path: &Path) -> anyhow::Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("invalid config at {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
