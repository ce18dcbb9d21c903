// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Classification of `go test` output.
//!
//! Each line maps to exactly one [`Outcome`]. Rules are tried in order and
//! the first match wins:
//!
//! | Line | Outcome | Issue |
//! |---|---|---|
//! | starts with `go: ` | Shadowed | no |
//! | `ok ... (cached)` | LowLit | no |
//! | starts with `ok` or `PASS` | Pass | no |
//! | exactly `FAIL` | Shadowed | no |
//! | starts with `FAIL` or `--- FAIL` | Fail | yes |
//! | `panic: ... [recovered]` | Warning | yes |
//! | starts with `panic:` | Fail | yes |
//! | contains `cannot find package` | Fail | yes |
//! | `? PKG [no test files]` | Shadowed for `main`, else Notice | no |
//! | `? PKG [no test files]`, PKG has no names | Shadowed, not shown | no |
//! | anything else | Warning | yes |
//!
//! A bare `FAIL` only repeats a failure already reported by the lines around
//! it, so it is always dimmed.

use std::borrow::Cow;

use crate::error::Result;
use crate::output::{Level, Reporter};

const CONTEXT: &str = "go test";

/// What a line of test output means for the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Noise; shown dimmed.
    Shadowed,
    /// A cached pass.
    LowLit,
    Pass,
    Fail,
    Warning,
    /// A library package without tests.
    Notice,
}

impl Outcome {
    pub fn counts_as_issue(self) -> bool {
        matches!(self, Outcome::Fail | Outcome::Warning)
    }

    /// Presentation level for lines with this outcome.
    pub fn level(self) -> Level {
        match self {
            Outcome::Shadowed => Level::Hide,
            Outcome::LowLit => Level::Info,
            Outcome::Pass => Level::Ok,
            Outcome::Fail => Level::Error,
            Outcome::Warning => Level::Warning,
            Outcome::Notice => Level::Notice,
        }
    }
}

/// Looks up the package names (`package main`, `package foo`) of a package
/// path.
pub trait PackageKinds {
    fn package_names(&self, pkg: &str) -> Result<Vec<String>>;
}

/// A classified line and the text to show for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified<'a> {
    pub outcome: Outcome,
    pub text: Cow<'a, str>,
    /// False for lines that are dropped without being reported.
    pub shown: bool,
}

/// Classify one line of output from `go test` run in `workdir`.
pub fn classify<'a>(
    line: &'a str,
    workdir: &str,
    kinds: &dyn PackageKinds,
) -> Result<Classified<'a>> {
    let outcome = if line.starts_with("go: ") {
        Outcome::Shadowed
    } else if line.starts_with("ok") && line.contains("(cached)") {
        Outcome::LowLit
    } else if line.starts_with("ok") || line.starts_with("PASS") {
        Outcome::Pass
    } else if line == "FAIL" {
        Outcome::Shadowed
    } else if line.starts_with("FAIL") || line.starts_with("--- FAIL") {
        Outcome::Fail
    } else if line.starts_with("panic:") {
        if line.contains("[recovered]") {
            Outcome::Warning
        } else {
            Outcome::Fail
        }
    } else if line.contains("cannot find package") {
        Outcome::Fail
    } else if line.starts_with('?') && line.contains("[no test files]") {
        return Ok(match untested_package(line, workdir, kinds)? {
            Some(outcome) => Classified {
                outcome,
                text: Cow::Borrowed(line),
                shown: true,
            },
            None => Classified {
                outcome: Outcome::Shadowed,
                text: Cow::Borrowed(line),
                shown: false,
            },
        });
    } else {
        let text = if workdir.is_empty() {
            Cow::Borrowed(line)
        } else {
            Cow::Owned(line.replace(workdir, "."))
        };
        return Ok(Classified {
            outcome: Outcome::Warning,
            text,
            shown: true,
        });
    };

    Ok(Classified {
        outcome,
        text: Cow::Borrowed(line),
        shown: true,
    })
}

/// `main` packages without tests are expected; libraries deserve a note.
///
/// `None` when the package has no names to judge it by.
fn untested_package(
    line: &str,
    workdir: &str,
    kinds: &dyn PackageKinds,
) -> Result<Option<Outcome>> {
    let Some(pkg) = line.split_whitespace().nth(1) else {
        return Ok(None);
    };

    let pkg = match pkg.strip_prefix('_').and_then(|p| p.strip_prefix(workdir)) {
        Some(rest) if !workdir.is_empty() && (rest.is_empty() || rest.starts_with('/')) => match rest.trim_start_matches('/') {
            "" => ".".to_string(),
            rest => format!("./{rest}"),
        },
        _ => pkg.to_string(),
    };

    let names = kinds.package_names(&pkg)?;
    if names.is_empty() {
        Ok(None)
    } else if names.iter().any(|name| name == "main") {
        Ok(Some(Outcome::Shadowed))
    } else {
        Ok(Some(Outcome::Notice))
    }
}

/// Running classification of one `go test` invocation.
pub struct TestTally<'a> {
    workdir: String,
    kinds: &'a dyn PackageKinds,
    reporter: &'a Reporter,
    issues: usize,
}

impl<'a> TestTally<'a> {
    pub fn new(workdir: impl Into<String>, kinds: &'a dyn PackageKinds, reporter: &'a Reporter) -> Self {
        Self {
            workdir: workdir.into(),
            kinds,
            reporter,
            issues: 0,
        }
    }

    /// Classify and report one line.
    pub fn record(&mut self, line: &str) -> Result<Outcome> {
        let classified = classify(line, &self.workdir, self.kinds)?;
        if classified.shown {
            self.reporter
                .emit(classified.outcome.level(), CONTEXT, &classified.text);
        }
        if classified.outcome.counts_as_issue() {
            self.issues += 1;
        }
        Ok(classified.outcome)
    }

    pub fn issues(&self) -> usize {
        self.issues
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
