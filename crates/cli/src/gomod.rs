// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Small file probes used while preparing a Go module for checking.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Marker that `go generate` tools put on generated files.
static GENERATED_CODE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^// Code generated by .* DO NOT EDIT\.$").expect("valid regex")
});

/// Module path declared by a `go.mod` file, if it can be read.
pub fn module_name(go_mod: &Path) -> Option<String> {
    let file = File::open(go_mod).ok()?;
    BufReader::new(file)
        .lines()
        .map_while(Result::ok)
        .find_map(|line| {
            let rest = line.strip_prefix("module ")?;
            rest.split_whitespace()
                .next()
                .map(|name| name.trim_matches('"').to_string())
        })
}

/// Whether the file carries the generated-code marker on a line of its own.
pub fn is_generated(path: &Path) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };
    BufReader::new(file)
        .lines()
        .map_while(Result::ok)
        .any(|line| GENERATED_CODE.is_match(&line))
}

/// Whether the file exists and has zero length.
pub fn is_empty(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|m| m.len() == 0)
}

/// Whether the file can be opened for reading.
pub fn can_read(path: &Path) -> bool {
    File::open(path).is_ok()
}

#[cfg(test)]
#[path = "gomod_tests.rs"]
mod tests;
