// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Finds every offset where a text tiles into a fixed multiset of
//! equal-length words.
//!
//! The [`engine`] is a pure function of its inputs: give it bytes and a
//! word list, get back ascending byte offsets. Everything else in this
//! crate exists to feed it (config, input reading) or to present its
//! results (reports, colors). The `tessel` binary is one caller of this
//! library, not the only possible one.

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod exit;
pub mod input;
pub mod position;
pub mod report;

pub use engine::{
    BruteForce, FrequencyTable, MatchCollector, Matcher, ScanError, SlidingWindow, find_starts,
    find_starts_with,
};
