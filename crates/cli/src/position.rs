// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Byte offset to line and column mapping.

use memchr::memchr_iter;

/// 1-based line and column for a byte offset.
///
/// Columns count bytes from the most recent newline, consistent with how
/// match offsets count bytes from the start of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    pub line: usize,
    pub col: usize,
}

/// Map ascending byte offsets to line:col positions in a single pass over
/// the text's newlines.
///
/// `offsets` must be sorted ascending; the result is parallel to it.
pub fn locate_all(text: &[u8], offsets: &[usize]) -> Vec<LineCol> {
    let mut positions = Vec::with_capacity(offsets.len());
    let mut line = 1;
    let mut line_start = 0;
    let mut newlines = memchr_iter(b'\n', text);
    let mut next_newline = newlines.next();

    for &offset in offsets {
        while let Some(newline) = next_newline {
            if newline >= offset {
                break;
            }
            line += 1;
            line_start = newline + 1;
            next_newline = newlines.next();
        }
        positions.push(LineCol {
            line,
            col: offset - line_start + 1,
        });
    }
    positions
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod tests;
