// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes.

/// Exit statuses for the tessel binary.
///
/// Grep-shaped: finding nothing is a distinct outcome from failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// At least one match was found.
    Match,
    /// The scan ran but found nothing.
    NoMatch,
    /// Usage, validation, or I/O failure.
    Error,
}

impl ExitCode {
    /// Numeric process exit code.
    pub fn code(self) -> u8 {
        match self {
            ExitCode::Match => 0,
            ExitCode::NoMatch => 1,
            ExitCode::Error => 2,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}

#[cfg(test)]
#[path = "exit_tests.rs"]
mod tests;
