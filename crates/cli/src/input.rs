// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan input reading with size-based strategy.
//!
// Allow unsafe_code for memory-mapped I/O (required by memmap2).
// Safety justification:
// 1. File handle is valid (just opened)
// 2. We don't mutate the mapped memory
// 3. Stale data on concurrent modification only changes what a one-shot
//    scan reports
#![allow(unsafe_code)]
//!
//! Files under 64KB are read straight into memory; larger files are
//! memory-mapped. The engine works on raw bytes, so no UTF-8 validation
//! happens here.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use memmap2::Mmap;

/// Files at or above this size are memory-mapped instead of read.
pub const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Bytes of one scan input, either owned or memory-mapped.
pub enum ScanInput {
    /// Small file or stdin read into memory.
    Owned(Vec<u8>),
    /// Large file memory-mapped.
    Mapped(Mmap),
}

impl ScanInput {
    /// Read a file using the appropriate strategy for its size.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let meta = fs::metadata(path)?;

        if meta.len() < MMAP_THRESHOLD {
            // Small file: direct read
            Ok(ScanInput::Owned(fs::read(path)?))
        } else {
            // Large file: memory-map
            let file = File::open(path)?;
            // SAFETY: File handle is valid (just opened), we don't mutate the
            // mapped memory, and stale data on concurrent modification only
            // changes what a one-shot scan reports.
            let mmap = unsafe { Mmap::map(&file)? };
            Ok(ScanInput::Mapped(mmap))
        }
    }

    /// Read stdin to EOF.
    pub fn from_stdin() -> io::Result<Self> {
        let mut buffer = Vec::new();
        io::stdin().lock().read_to_end(&mut buffer)?;
        Ok(ScanInput::Owned(buffer))
    }

    /// The input bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            ScanInput::Owned(bytes) => bytes,
            ScanInput::Mapped(mmap) => mmap,
        }
    }
}

/// Read the scan text from `path`, or from stdin when `path` is absent
/// or `-`.
pub fn read_input(path: Option<&Path>) -> io::Result<ScanInput> {
    match path {
        Some(path) if path.as_os_str() != "-" => ScanInput::from_file(path),
        _ => ScanInput::from_stdin(),
    }
}

/// Input label for report headers.
pub fn source_label(path: Option<&Path>) -> String {
    match path {
        Some(path) if path.as_os_str() != "-" => path.display().to_string(),
        _ => "<stdin>".to_string(),
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
