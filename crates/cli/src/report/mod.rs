// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan report model and rendering.
//!
//! One [`ScanReport`] per scan, rendered to text or JSON through the same
//! small formatting seam.

mod json;
mod text;

use chrono::{DateTime, Utc};
use serde::Serialize;
use termcolor::WriteColor;

use crate::cli::OutputFormat;

pub use json::JsonRenderer;
pub use text::TextRenderer;

/// One match row: where a concatenation span starts.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MatchEntry {
    /// Byte offset of the span start.
    pub offset: usize,
    /// 1-based line of the span start.
    pub line: usize,
    /// 1-based byte column of the span start.
    pub col: usize,
}

/// Everything one scan produced.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Input label: the file path, or `<stdin>`.
    pub source: String,
    /// Strategy that produced the offsets.
    pub matcher: String,
    /// Length shared by every word, in bytes.
    pub word_len: usize,
    /// Number of words, duplicates included.
    pub word_count: usize,
    /// Bytes scanned.
    pub text_len: usize,
    /// Matches in ascending offset order, capped by the display limit.
    pub matches: Vec<MatchEntry>,
    /// Total matches found, independent of the display limit.
    pub total: usize,
    /// Scan wall time in milliseconds.
    pub elapsed_ms: u64,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
}

impl ScanReport {
    /// Combined byte length of one matched span.
    pub fn span_len(&self) -> usize {
        self.word_len * self.word_count
    }
}

/// Renders a scan report to a writer.
///
/// `text` is the scanned input, needed for match previews; JSON output
/// ignores it.
pub trait Render {
    fn render(
        &self,
        report: &ScanReport,
        text: &[u8],
        out: &mut dyn WriteColor,
    ) -> anyhow::Result<()>;
}

/// Render `report` in the requested format.
pub fn render_report(
    format: OutputFormat,
    report: &ScanReport,
    text: &[u8],
    context: usize,
    out: &mut dyn WriteColor,
) -> anyhow::Result<()> {
    let renderer: Box<dyn Render> = match format {
        OutputFormat::Text => Box::new(TextRenderer { context }),
        OutputFormat::Json => Box::new(JsonRenderer),
    };
    renderer.render(report, text, out)
}
