// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `golint` client.

use crate::context::RunContext;
use crate::error::Result;
use crate::exec::{Tool, lines};
use crate::output::Reporter;

const GODOC_SUFFIX: &str = " or be unexported";

/// Client for the `golint` binary.
#[derive(Debug)]
pub struct Linter {
    tool: Tool,
}

impl Linter {
    pub fn new(tool: Tool) -> Self {
        Self { tool }
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Lint one package and report what `golint` prints.
    ///
    /// The first reported line is preceded by an error naming the package.
    /// Each line has `trim_prefix` removed. With `ignore_godoc`, complaints
    /// about missing doc comments are dropped. Returns whether anything was
    /// reported.
    pub fn lint(
        &self,
        ctx: &RunContext,
        pkg: &str,
        trim_prefix: &str,
        ignore_godoc: bool,
        reporter: &Reporter,
    ) -> Result<bool> {
        let name = self.tool.name();
        let out = self.tool.combined_output(ctx, [pkg])?;

        let mut reported = false;
        for line in lines(&out.text) {
            if ignore_godoc && line.ends_with(GODOC_SUFFIX) {
                continue;
            }
            if !reported {
                reporter.error(name, if pkg.is_empty() { "<root package>" } else { pkg });
                reported = true;
            }
            reporter.warning(name, line.strip_prefix(trim_prefix).unwrap_or(line));
        }
        Ok(reported)
    }
}

#[cfg(test)]
#[path = "lint_tests.rs"]
mod tests;
