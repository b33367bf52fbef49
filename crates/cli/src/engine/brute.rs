// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Quadratic reference matcher.
//!
//! Checks every candidate start directly against the frequency table. Slow
//! and obviously correct; [`SlidingWindow`](super::SlidingWindow) must agree
//! with it exactly on every input.

use std::collections::HashMap;

use super::collect::MatchCollector;
use super::{FrequencyTable, Matcher};

/// Reference strategy: per-candidate chunk walk with local counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl Matcher for BruteForce {
    fn name(&self) -> &'static str {
        "brute"
    }

    fn scan(&self, text: &[u8], table: &FrequencyTable<'_>) -> Vec<usize> {
        let word_len = table.word_len();
        let word_count = table.word_count();
        let total_len = table.total_len();
        if total_len == 0 || total_len > text.len() {
            return Vec::new();
        }

        let mut collector = MatchCollector::new();
        let mut seen: HashMap<&[u8], usize> = HashMap::with_capacity(table.distinct_count());

        for start in 0..=text.len() - total_len {
            seen.clear();
            let mut consumed = 0;
            while consumed < word_count {
                let at = start + consumed * word_len;
                let chunk = &text[at..at + word_len];
                let count = seen.entry(chunk).or_insert(0);
                *count += 1;
                // Covers both chunks outside the table (budget zero) and
                // too many repeats of a known word.
                if *count > table.count(chunk) {
                    break;
                }
                consumed += 1;
            }
            if consumed == word_count {
                collector.push(start);
            }
        }
        collector.finish()
    }
}

#[cfg(test)]
#[path = "brute_tests.rs"]
mod tests;
