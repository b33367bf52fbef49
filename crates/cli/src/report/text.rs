// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format scan output with highlighted match previews.

use std::ops::Range;

use termcolor::WriteColor;

use crate::color::scheme;

use super::{Render, ScanReport};

/// Human-readable output: a header, one row per match, and a summary line.
pub struct TextRenderer {
    /// Bytes of context shown on each side of a span.
    pub context: usize,
}

impl Render for TextRenderer {
    fn render(
        &self,
        report: &ScanReport,
        text: &[u8],
        out: &mut dyn WriteColor,
    ) -> anyhow::Result<()> {
        out.set_color(&scheme::path())?;
        write!(out, "{}", report.source)?;
        out.reset()?;
        writeln!(
            out,
            ": {} bytes, {} words of length {}",
            report.text_len, report.word_count, report.word_len
        )?;

        let span_len = report.span_len();
        for entry in &report.matches {
            out.set_color(&scheme::offset())?;
            write!(out, "{:>8}", entry.offset)?;
            out.reset()?;
            write!(out, "  {}:{}  ", entry.line, entry.col)?;
            self.write_preview(text, entry.offset..entry.offset + span_len, out)?;
            writeln!(out)?;
        }

        if report.total > report.matches.len() {
            writeln!(out, "  ... and {} more", report.total - report.matches.len())?;
        }

        if report.total > 0 {
            out.set_color(&scheme::found())?;
            let plural = if report.total == 1 { "" } else { "es" };
            write!(out, "{} match{}", report.total, plural)?;
        } else {
            out.set_color(&scheme::missing())?;
            write!(out, "no matches")?;
        }
        out.reset()?;
        writeln!(out, " ({}, {} ms)", report.matcher, report.elapsed_ms)?;
        Ok(())
    }
}

impl TextRenderer {
    /// Write up to `context` bytes before the span, the highlighted span,
    /// and up to `context` bytes after it.
    fn write_preview(
        &self,
        text: &[u8],
        span: Range<usize>,
        out: &mut dyn WriteColor,
    ) -> anyhow::Result<()> {
        let before = span.start.saturating_sub(self.context);
        let after = span.end.saturating_add(self.context).min(text.len());
        write!(out, "{}", printable(&text[before..span.start]))?;
        out.set_color(&scheme::highlight())?;
        write!(out, "{}", printable(&text[span.start..span.end]))?;
        out.reset()?;
        write!(out, "{}", printable(&text[span.end..after]))?;
        Ok(())
    }
}

/// Lossy single-line rendering of raw input bytes. Control bytes would
/// break row alignment, so they render as a placeholder dot.
fn printable(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .map(|c| if c.is_control() { '.' } else { c })
        .collect()
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
