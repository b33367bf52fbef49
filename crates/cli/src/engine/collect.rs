// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match-offset aggregation.

/// Accumulates start offsets from matcher passes into the final match set.
///
/// Offsets from distinct residue passes can never collide (an offset
/// determines its own residue class), so the merged set is duplicate-free
/// by construction; sorting restores one deterministic global order after
/// parallel collection.
#[derive(Debug, Default)]
pub struct MatchCollector {
    offsets: Vec<usize>,
}

impl MatchCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one match offset.
    pub fn push(&mut self, offset: usize) {
        self.offsets.push(offset);
    }

    /// Append all offsets found by one pass.
    pub fn extend(&mut self, offsets: Vec<usize>) {
        self.offsets.extend(offsets);
    }

    /// The final match set, ascending and distinct.
    pub fn finish(mut self) -> Vec<usize> {
        self.offsets.sort_unstable();
        debug_assert!(
            self.offsets.windows(2).all(|pair| pair[0] < pair[1]),
            "duplicate match offset"
        );
        self.offsets
    }
}

#[cfg(test)]
#[path = "collect_tests.rs"]
mod tests;
