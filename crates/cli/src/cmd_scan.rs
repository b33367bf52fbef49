// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `tessel scan` command implementation.
//!
//! Merges config with flags, reads the input, runs the chosen strategy, and
//! renders the report.

use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use chrono::Utc;
use termcolor::StandardStream;

use tessel::cli::{MatcherChoice, ScanArgs};
use tessel::color::resolve_color;
use tessel::config::{self, Config};
use tessel::discovery;
use tessel::engine::{self, BruteForce, SlidingWindow};
use tessel::exit::ExitCode;
use tessel::input;
use tessel::position::locate_all;
use tessel::report::{self, MatchEntry, ScanReport};

/// Run the `tessel scan` command.
pub fn run(args: &ScanArgs, config_path: Option<&Path>) -> anyhow::Result<ExitCode> {
    let config = load_config(config_path)?;

    let choice = args.matcher.unwrap_or(config.scan.matcher);
    let format = args.output.unwrap_or(config.scan.output);
    let limit = args.limit.unwrap_or(config.scan.limit);
    let context = args.context.unwrap_or(config.scan.context);

    let source = input::source_label(args.path.as_deref());
    let text = input::read_input(args.path.as_deref())
        .with_context(|| format!("failed to read {source}"))?;
    let text = text.as_bytes();

    let started = Instant::now();
    let (matcher_name, offsets) = run_matcher(choice, text, &args.words)?;
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    tracing::debug!(
        "{} found {} match(es) in {} ms",
        matcher_name,
        offsets.len(),
        elapsed_ms
    );

    let total = offsets.len();
    let shown = if limit > 0 && total > limit {
        offsets[..limit].to_vec()
    } else {
        offsets
    };
    let positions = locate_all(text, &shown);
    let matches = shown
        .iter()
        .zip(positions)
        .map(|(&offset, position)| MatchEntry {
            offset,
            line: position.line,
            col: position.col,
        })
        .collect();

    let scan_report = ScanReport {
        source,
        matcher: matcher_name.to_string(),
        word_len: args.words.first().map_or(0, |w| w.len()),
        word_count: args.words.len(),
        text_len: text.len(),
        matches,
        total,
        elapsed_ms,
        generated_at: Utc::now(),
    };

    let color = resolve_color(args.color, args.no_color);
    let mut out = StandardStream::stdout(color);
    report::render_report(format, &scan_report, text, context, &mut out)?;

    Ok(if total > 0 {
        ExitCode::Match
    } else {
        ExitCode::NoMatch
    })
}

/// Execute the chosen strategy. `both` runs the two strategies and fails
/// loudly on any disagreement.
fn run_matcher(
    choice: MatcherChoice,
    text: &[u8],
    words: &[String],
) -> anyhow::Result<(&'static str, Vec<usize>)> {
    match choice {
        MatcherChoice::Window => {
            let offsets = engine::find_starts_with(&SlidingWindow, text, words)?;
            Ok(("window", offsets))
        }
        MatcherChoice::Brute => {
            let offsets = engine::find_starts_with(&BruteForce, text, words)?;
            Ok(("brute", offsets))
        }
        MatcherChoice::Both => {
            let window = engine::find_starts_with(&SlidingWindow, text, words)?;
            let brute = engine::find_starts_with(&BruteForce, text, words)?;
            anyhow::ensure!(
                window == brute,
                "strategy disagreement: window found {} offset(s), brute found {}",
                window.len(),
                brute.len()
            );
            Ok(("both", window))
        }
    }
}

/// Load config: an explicit path wins, otherwise discover tessel.toml
/// upward from the working directory.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return config::load(path);
    }
    let cwd = std::env::current_dir()?;
    match discovery::find_config(&cwd) {
        Some(path) => config::load(&path),
        None => Ok(Config::default()),
    }
}
