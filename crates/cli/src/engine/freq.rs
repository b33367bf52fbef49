// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Immutable multiset view of the target words.

use std::collections::HashMap;

use super::ScanError;

/// Required occurrence count per distinct word, derived once per scan.
///
/// Built once from the word list and shared read-only across matcher
/// passes. The sum of all counts equals [`word_count`](Self::word_count).
#[derive(Debug, Clone)]
pub struct FrequencyTable<'w> {
    counts: HashMap<&'w [u8], usize>,
    word_len: usize,
    word_count: usize,
}

impl<'w> FrequencyTable<'w> {
    /// Count the occurrences of each word.
    ///
    /// Every word must share the same non-zero length. An empty list builds
    /// an empty table; scanning an empty table yields an empty match set.
    pub fn build<W: AsRef<[u8]>>(words: &'w [W]) -> Result<Self, ScanError> {
        let word_len = words.first().map_or(0, |w| w.as_ref().len());
        if !words.is_empty() && word_len == 0 {
            return Err(ScanError::EmptyWord);
        }

        let mut counts: HashMap<&[u8], usize> = HashMap::with_capacity(words.len());
        for (index, word) in words.iter().enumerate() {
            let word = word.as_ref();
            if word.len() != word_len {
                return Err(ScanError::UnevenWordLength {
                    index,
                    expected: word_len,
                    found: word.len(),
                });
            }
            *counts.entry(word).or_insert(0) += 1;
        }

        Ok(Self {
            counts,
            word_len,
            word_count: words.len(),
        })
    }

    /// Required count for `word`; zero when the word is not a target.
    pub fn count(&self, word: &[u8]) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Whether `word` is one of the targets.
    pub fn contains(&self, word: &[u8]) -> bool {
        self.counts.contains_key(word)
    }

    /// Length shared by every word. Zero only for an empty table.
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of words in the source list, duplicates included.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of distinct words.
    pub fn distinct_count(&self) -> usize {
        self.counts.len()
    }

    /// Combined length of one full concatenation.
    pub fn total_len(&self) -> usize {
        self.word_len * self.word_count
    }

    /// True when the table holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

#[cfg(test)]
#[path = "freq_tests.rs"]
mod tests;
