// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run-wide verdict.

use crate::checks::CheckResult;
use crate::error::ExitCode;

/// Accumulated result of every check in a run.
///
/// Any issue or any blocking rule blocks the commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verdict {
    issues: usize,
    blocked: bool,
}

impl Verdict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count issues reported by a check.
    pub fn add_issues(&mut self, count: usize) {
        self.issues += count;
    }

    /// Record a rule that blocks regardless of issue count.
    pub fn block(&mut self) {
        self.blocked = true;
    }

    /// Fold in the result of one check.
    pub fn record(&mut self, result: &CheckResult) {
        self.add_issues(result.issues);
        if result.blocked {
            self.block();
        }
    }

    pub fn issues(&self) -> usize {
        self.issues
    }

    pub fn blocks(&self) -> bool {
        self.blocked || self.issues > 0
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.blocks() {
            ExitCode::Blocked
        } else {
            ExitCode::Success
        }
    }
}

#[cfg(test)]
#[path = "verdict_tests.rs"]
mod tests;
