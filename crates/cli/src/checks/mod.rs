// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The gate's checks.
//!
//! - module: formatting, lint and tests for one go module
//! - branch: refuse commits to protected branches
//! - eol: every tracked text file ends with a newline

pub mod branch;
pub mod eol;
pub mod module;
pub mod testing;

use std::path::{Path, PathBuf};

use crate::context::RunContext;
use crate::error::Result;
use crate::output::Reporter;
use crate::tools::Toolbox;

pub use branch::BranchCheck;
pub use eol::EolCheck;
pub use module::ModuleCheck;

/// Run-wide settings the checks read.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Branches that may never be committed to, besides the remote's head.
    pub protected_branches: Vec<String>,
    /// Extensions exempt from the end-of-line rule.
    pub eol_exempt: Vec<String>,
    /// Allow cached `go test` results.
    pub cache: bool,
    /// Run `golint`.
    pub lint: bool,
    /// Drop `golint` complaints about missing doc comments.
    pub ignore_godoc: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            protected_branches: vec!["production".to_string(), "staging".to_string()],
            eol_exempt: vec!["jar".to_string()],
            cache: true,
            lint: true,
            ignore_godoc: false,
        }
    }
}

/// Everything a check needs from the run.
pub struct CheckContext<'a> {
    pub run: &'a RunContext,
    pub tools: &'a Toolbox,
    pub settings: &'a Settings,
    pub reporter: &'a Reporter,
}

/// What a check found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckResult {
    pub issues: usize,
    /// The check failed outright, independent of its issue count.
    pub blocked: bool,
}

impl CheckResult {
    pub fn passed() -> Self {
        Self::default()
    }

    pub fn with_issues(issues: usize) -> Self {
        Self {
            issues,
            blocked: false,
        }
    }

    pub fn blocked() -> Self {
        Self {
            issues: 0,
            blocked: true,
        }
    }

    pub fn passes(&self) -> bool {
        !self.blocked && self.issues == 0
    }
}

/// A single gate check.
pub trait Check {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Run the check. Expected failures are reported and returned in the
    /// result; errors are fatal to the run.
    fn run(&self, cx: &CheckContext<'_>) -> Result<CheckResult>;
}

/// Checked-in `go.mod` files, skipping vendored copies.
pub fn go_mod_files<S: AsRef<str>>(files: &[S], run: &RunContext) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for file in files {
        run.ensure_active()?;
        let file = file.as_ref();
        if file.starts_with("vendor/") || file.contains("/vendor/") {
            continue;
        }
        if Path::new(file).file_name().is_some_and(|name| name == "go.mod") {
            found.push(PathBuf::from(file));
        }
    }
    Ok(found)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
