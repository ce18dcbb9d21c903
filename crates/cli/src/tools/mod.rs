// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Clients for the external tools the gate drives.
//!
//! The [`Toolbox`] is built once per run and passed by reference. Each client
//! owns its tool binding and the values it memoizes.

pub mod format;
pub mod git;
pub mod golang;
pub mod lint;

use std::sync::{Arc, Mutex, PoisonError};

pub use format::{Formatter, files_needing_format};
pub use git::GitClient;
pub use golang::{GoClient, ListOptions, PackageLookup, TestOptions};
pub use lint::Linter;

use crate::config::ToolsConfig;
use crate::env::{names, non_empty};
use crate::error::Result;
use crate::exec::Tool;
use crate::search_path::SearchPath;

/// Package installed when `golint` is missing.
pub const GOLINT_PKG: &str = "golang.org/x/lint/golint";
/// Package installed when `goimports` is missing.
pub const GOIMPORTS_PKG: &str = "golang.org/x/tools/cmd/goimports";

/// A value computed at most once.
///
/// Concurrent callers wait for the first computation. A failed computation
/// stores nothing; callers treat it as fatal.
#[derive(Debug)]
pub struct Memo<T> {
    slot: Mutex<Option<T>>,
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }
}

impl<T: Clone> Memo<T> {
    pub fn get_or_try(&self, compute: impl FnOnce() -> Result<T>) -> Result<T> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = slot.as_ref() {
            return Ok(value.clone());
        }
        let value = compute()?;
        *slot = Some(value.clone());
        Ok(value)
    }
}

/// Every client the gate uses.
#[derive(Debug)]
pub struct Toolbox {
    pub git: GitClient,
    pub go: GoClient,
    pub gofmt: Formatter,
    pub goimports: Formatter,
    pub golint: Linter,
}

impl Toolbox {
    /// Bind each tool to its program: environment first, then config, then
    /// the tool's own name.
    pub fn new(config: &ToolsConfig, search: Arc<SearchPath>) -> Self {
        let bind = |name: &'static str, env: &str, configured: &Option<String>| {
            let program = non_empty(env)
                .or_else(|| configured.clone())
                .unwrap_or_else(|| name.to_string());
            Tool::new(name, program, Arc::clone(&search))
        };

        Self {
            git: GitClient::new(bind("git", names::GIT, &config.git)),
            go: GoClient::new(bind("go", names::GO, &config.go)),
            gofmt: Formatter::new(bind("gofmt", names::GOFMT, &config.gofmt)),
            goimports: Formatter::new(bind("goimports", names::GOIMPORTS, &config.goimports)),
            golint: Linter::new(bind("golint", names::GOLINT, &config.golint)),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
