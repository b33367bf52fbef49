// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Linear sliding-window matcher.
//!
//! Runs one bounded scan per alignment residue `r in 0..word_len`. Each
//! pass keeps a live window of whole chunks and a running frequency map, so
//! every byte is visited a constant number of times per residue. The passes
//! share nothing but the read-only table and run on the rayon pool.

use std::collections::HashMap;

use rayon::prelude::*;

use super::collect::MatchCollector;
use super::{FrequencyTable, Matcher};

/// Production strategy: frequency-aware window per alignment residue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlidingWindow;

impl Matcher for SlidingWindow {
    fn name(&self) -> &'static str {
        "window"
    }

    fn scan(&self, text: &[u8], table: &FrequencyTable<'_>) -> Vec<usize> {
        let total_len = table.total_len();
        if total_len == 0 || total_len > text.len() {
            return Vec::new();
        }

        // Residue classes are independent units of work; the collector
        // restores one deterministic global order afterwards.
        let per_residue: Vec<Vec<usize>> = (0..table.word_len())
            .into_par_iter()
            .map(|residue| ResiduePass::new(text, table, residue).run())
            .collect();

        let mut collector = MatchCollector::new();
        for offsets in per_residue {
            collector.extend(offsets);
        }
        collector.finish()
    }
}

/// Scan state for one residue class: window bounds, running counts, and the
/// offsets found so far. Constructed fresh per pass and never shared.
struct ResiduePass<'t, 'w> {
    text: &'t [u8],
    table: &'t FrequencyTable<'w>,
    /// Window start, inclusive. Always `left <= right`.
    left: usize,
    /// Window end, exclusive. Advances by one word per step.
    right: usize,
    /// Number of chunks currently in the window.
    matched: usize,
    /// Occurrences of each word currently in the window.
    running: HashMap<&'t [u8], usize>,
    found: Vec<usize>,
}

impl<'t, 'w> ResiduePass<'t, 'w> {
    fn new(text: &'t [u8], table: &'t FrequencyTable<'w>, residue: usize) -> Self {
        Self {
            text,
            table,
            left: residue,
            right: residue,
            matched: 0,
            running: HashMap::with_capacity(table.distinct_count()),
            found: Vec::new(),
        }
    }

    /// Run the pass to completion. Offsets come out in ascending order.
    fn run(mut self) -> Vec<usize> {
        let text = self.text;
        let word_len = self.table.word_len();

        while self.right + word_len <= text.len() {
            let chunk = &text[self.right..self.right + word_len];
            self.right += word_len;

            if !self.table.contains(chunk) {
                self.reset();
                continue;
            }

            self.push_right(chunk);
            // Shrink until the chunk just added is back within budget.
            while self.over_budget(chunk) {
                self.evict_left();
            }

            if self.matched == self.table.word_count() {
                self.found.push(self.left);
                // Slide one word forward so overlapping spans in this
                // residue class are still seen.
                self.evict_left();
            }
        }
        self.found
    }

    /// A chunk outside the table can never sit inside a valid span: drop
    /// all window state and resume immediately past it.
    fn reset(&mut self) {
        self.running.clear();
        self.matched = 0;
        self.left = self.right;
    }

    fn push_right(&mut self, chunk: &'t [u8]) {
        *self.running.entry(chunk).or_insert(0) += 1;
        self.matched += 1;
    }

    fn over_budget(&self, chunk: &[u8]) -> bool {
        self.running.get(chunk).copied().unwrap_or(0) > self.table.count(chunk)
    }

    /// Remove the chunk at the left edge and advance the window one word.
    fn evict_left(&mut self) {
        let evicted = &self.text[self.left..self.left + self.table.word_len()];
        if let Some(count) = self.running.get_mut(evicted) {
            *count -= 1;
        }
        self.matched -= 1;
        self.left += self.table.word_len();
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
