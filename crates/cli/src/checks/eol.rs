// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-of-line rule: tracked text files end with `\n`.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use super::{Check, CheckContext, CheckResult};
use crate::error::Result;

/// Checks every tracked file in the run directory.
pub struct EolCheck;

impl Check for EolCheck {
    fn name(&self) -> &'static str {
        "eol"
    }

    fn run(&self, cx: &CheckContext<'_>) -> Result<CheckResult> {
        let files = cx.tools.git.files(cx.run)?;

        let mut failures = 0;
        for file in files.iter() {
            cx.run.ensure_active()?;
            if is_exempt(file, &cx.settings.eol_exempt) {
                continue;
            }
            match ends_with_eol(&cx.run.dir().join(file)) {
                Ok(true) => {}
                Ok(false) => {
                    cx.reporter.error("file doesn't end with EOL", file);
                    failures += 1;
                }
                Err(e) => {
                    cx.reporter.error("check eol", &format!("{file}: {e}"));
                    failures += 1;
                }
            }
        }

        Ok(CheckResult {
            issues: failures,
            blocked: failures > 0,
        })
    }
}

/// Files whose name ends in `.` plus an exempt extension, and files without any `.` in their path,
/// are not checked.
pub fn is_exempt(file: &str, exempt: &[String]) -> bool {
    if !file.contains('.') {
        return true;
    }
    exempt.iter().any(|ext| {
        file.strip_suffix(ext.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
    })
}

/// Whether the file is empty or its last byte is `\n`.
pub fn ends_with_eol(path: &Path) -> io::Result<bool> {
    let mut file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }

    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

#[cfg(test)]
#[path = "eol_tests.rs"]
mod tests;
