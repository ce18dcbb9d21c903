// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Protected branch rule.

use super::{Check, CheckContext, CheckResult};
use crate::error::Result;

/// Blocks commits to the remote's head branch and to protected branches.
pub struct BranchCheck;

impl Check for BranchCheck {
    fn name(&self) -> &'static str {
        "branch"
    }

    fn run(&self, cx: &CheckContext<'_>) -> Result<CheckResult> {
        let git = &cx.tools.git;
        let branch = git.branch(cx.run)?;
        let head = git.head_branch(cx.run)?;

        if is_protected(&branch, &head, &cx.settings.protected_branches) {
            cx.reporter
                .error("branch name", &format!("do not commit to {branch}"));
            return Ok(CheckResult::blocked());
        }
        Ok(CheckResult::passed())
    }
}

/// Whether committing to `branch` is forbidden.
pub fn is_protected(branch: &str, head: &str, protected: &[String]) -> bool {
    branch == head || protected.iter().any(|p| p == branch)
}

#[cfg(test)]
#[path = "branch_tests.rs"]
mod tests;
