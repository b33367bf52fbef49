// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format scan output.

use termcolor::WriteColor;

use super::{Render, ScanReport};

/// Machine-readable output: the report serialized as pretty-printed JSON.
///
/// Previews are a display concern and stay out of the JSON; consumers have
/// the offsets and the input.
pub struct JsonRenderer;

impl Render for JsonRenderer {
    fn render(
        &self,
        report: &ScanReport,
        _text: &[u8],
        out: &mut dyn WriteColor,
    ) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
