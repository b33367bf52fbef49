// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Word-concatenation matching engine.
//!
//! Finds every byte offset in a text where some permutation of a fixed
//! multiset of equal-length words appears concatenated, with no gaps and no
//! overlaps between the words. Two strategies implement the same [`Matcher`]
//! capability: [`BruteForce`] is the quadratic reference and
//! [`SlidingWindow`] is the linear production scan. Their match sets are
//! identical on every valid input.

mod brute;
mod collect;
mod freq;
mod window;

pub use brute::BruteForce;
pub use collect::MatchCollector;
pub use freq::FrequencyTable;
pub use window::SlidingWindow;

use thiserror::Error;

/// Validation errors surfaced before any scanning begins.
///
/// An empty match set is never an error: a text containing no valid
/// concatenation is a successful scan with zero results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The word list was empty.
    #[error("word list is empty")]
    NoWords,
    /// A word had length zero.
    #[error("words must be non-empty")]
    EmptyWord,
    /// Word lengths differ within the list.
    #[error("word {index} has length {found}, expected {expected}")]
    UnevenWordLength {
        index: usize,
        expected: usize,
        found: usize,
    },
}

/// A matching strategy over one text and one immutable word table.
///
/// Implementations must return the same offsets for the same inputs;
/// [`BruteForce`] defines the reference behavior.
pub trait Matcher {
    /// Short strategy name, used in reports and logs.
    fn name(&self) -> &'static str;

    /// Every offset in `text` where a permutation of the table's words
    /// appears concatenated. Ascending and duplicate-free.
    fn scan(&self, text: &[u8], table: &FrequencyTable<'_>) -> Vec<usize>;
}

/// Find every concatenated-permutation start in `text`.
///
/// Validates the word list (non-empty, uniform non-zero length), then scans
/// with [`SlidingWindow`].
pub fn find_starts<W: AsRef<[u8]>>(text: &[u8], words: &[W]) -> Result<Vec<usize>, ScanError> {
    find_starts_with(&SlidingWindow, text, words)
}

/// [`find_starts`] with a caller-chosen strategy.
pub fn find_starts_with<W: AsRef<[u8]>>(
    matcher: &dyn Matcher,
    text: &[u8],
    words: &[W],
) -> Result<Vec<usize>, ScanError> {
    if words.is_empty() {
        return Err(ScanError::NoWords);
    }
    let table = FrequencyTable::build(words)?;
    tracing::debug!(
        "scanning {} bytes for {} words of length {} with {}",
        text.len(),
        table.word_count(),
        table.word_len(),
        matcher.name()
    );
    Ok(matcher.scan(text, &table))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
