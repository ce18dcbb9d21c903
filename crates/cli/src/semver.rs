// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Version numbers as printed by the go toolchain.
//!
//! Go releases look like `1.21.3`, `1.22` or `1.22rc1`: up to three dotted
//! numbers, optionally followed by a lowercase alphanumeric pre-release tag
//! glued to the last number.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static DETAILS: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"[a-z][a-z0-9]*$").expect("valid regex")
});

/// A parsed version. Missing components are zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemVer {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Trailing pre-release tag such as `beta1` or `rc2`; empty for releases.
    pub details: String,
}

impl SemVer {
    /// Parse `[v]MAJOR[.MINOR[.PATCH]][details]`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.strip_prefix('v').unwrap_or(input);
        let mut fields: Vec<&str> = trimmed.splitn(3, '.').collect();

        let mut details = String::new();
        if let Some(last) = fields.last_mut()
            && let Some(m) = DETAILS.find(*last)
        {
            details = m.as_str().to_string();
            *last = &last[..m.start()];
        }

        let number = |field: &str| {
            field.parse::<u64>().map_err(|source| Error::InvalidVersion {
                input: input.to_string(),
                source,
            })
        };

        let mut version = SemVer {
            details,
            ..SemVer::default()
        };
        let mut numbers = fields.into_iter();
        if let Some(major) = numbers.next() {
            version.major = number(major)?;
        }
        if let Some(minor) = numbers.next() {
            version.minor = number(minor)?;
        }
        if let Some(patch) = numbers.next() {
            version.patch = number(patch)?;
        }
        Ok(version)
    }

    /// True when this version's major.minor is below the given one.
    pub fn is_before(&self, major: u64, minor: u64) -> bool {
        (self.major, self.minor) < (major, minor)
    }

    /// True for exactly `major.minor` with the given pre-release tag.
    pub fn is_prerelease(&self, major: u64, minor: u64, details: &str) -> bool {
        self.major == major && self.minor == minor && self.details == details
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v{}.{}.{}{}",
            self.major, self.minor, self.patch, self.details
        )
    }
}

#[cfg(test)]
#[path = "semver_tests.rs"]
mod tests;
