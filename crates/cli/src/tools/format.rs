// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `gofmt` and `goimports`.

use std::collections::HashSet;

use crate::context::RunContext;
use crate::error::Result;
use crate::exec::{Tool, lines};
use crate::output::Reporter;

/// A formatter that can list the files it would change.
#[derive(Debug)]
pub struct Formatter {
    tool: Tool,
}

impl Formatter {
    pub fn new(tool: Tool) -> Self {
        Self { tool }
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// `<tool> -l FILES...`: files needing formatting, sorted.
    ///
    /// The exit status is ignored; what matters is what was printed.
    pub fn list<S: AsRef<str>>(&self, ctx: &RunContext, files: &[S]) -> Result<Vec<String>> {
        let args = std::iter::once("-l").chain(files.iter().map(AsRef::as_ref));
        let out = self.tool.combined_output(ctx, args)?;
        let mut flagged: Vec<String> = lines(&out.text).map(str::to_string).collect();
        flagged.sort();
        Ok(flagged)
    }
}

/// Report files flagged by `gofmt` or `goimports`, each once.
///
/// Returns the number of issues.
pub fn files_needing_format<S: AsRef<str>>(
    ctx: &RunContext,
    gofmt: &Formatter,
    goimports: &Formatter,
    files: &[S],
    reporter: &Reporter,
) -> Result<usize> {
    let mut issues = 0;

    let by_gofmt = gofmt.list(ctx, files)?;
    for file in &by_gofmt {
        reporter.error(gofmt.tool().name(), file);
        issues += 1;
    }

    let seen: HashSet<&str> = by_gofmt.iter().map(String::as_str).collect();
    for file in goimports.list(ctx, files)? {
        if seen.contains(file.as_str()) {
            continue;
        }
        reporter.error(goimports.tool().name(), &file);
        issues += 1;
    }

    Ok(issues)
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
