// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! gogate: a commit gate for Go repositories.
//!
//! Runs `gofmt`, `goimports`, `golint` and `go test` over every checked-in
//! module, refuses commits to protected branches, and requires tracked files
//! to end with a newline.

pub mod checks;
pub mod classify;
pub mod cli;
pub mod color;
pub mod config;
pub mod context;
pub mod discovery;
pub mod env;
pub mod error;
pub mod exec;
pub mod gomod;
pub mod output;
pub mod search_path;
pub mod semver;
pub mod tools;
pub mod verdict;
pub mod walker;

pub use classify::{Outcome, PackageKinds, TestTally, classify};
pub use cli::Cli;
pub use context::{CancelToken, RunContext};
pub use error::{Error, ExitCode, Result};
pub use output::{Level, NoiseLevel, Reporter};
pub use verdict::Verdict;

#[cfg(test)]
pub mod test_utils;
