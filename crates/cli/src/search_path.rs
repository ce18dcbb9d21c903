// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Executable search path for the run.
//!
//! Tools installed with `go install` land in `$GOPATH/bin`, which is often
//! missing from `PATH` inside git hooks. The search path is computed once at
//! startup and handed to every tool binding and child process instead of
//! mutating the process environment.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::env::{names, non_empty};

/// An ordered list of directories searched for executables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
    appended: Option<PathBuf>,
}

impl SearchPath {
    /// Build from explicit directories, appending `extra` when not present.
    pub fn new(dirs: Vec<PathBuf>, extra: Option<PathBuf>) -> Self {
        let mut search = Self {
            dirs,
            appended: None,
        };
        if let Some(extra) = extra
            && !search.dirs.iter().any(|d| d == &extra)
        {
            search.dirs.push(extra.clone());
            search.appended = Some(extra);
        }
        search
    }

    /// `$PATH` plus `$GOPATH/bin` (go's default `$HOME/go/bin` when unset).
    pub fn from_env() -> Self {
        let dirs = std::env::var_os(names::PATH)
            .map(|p| std::env::split_paths(&p).collect())
            .unwrap_or_default();
        Self::new(dirs, gopath().map(|root| root.join("bin")))
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// The directory that was added to the inherited `PATH`, if any.
    pub fn appended(&self) -> Option<&Path> {
        self.appended.as_deref()
    }

    /// Value suitable for a child's `PATH`.
    pub fn to_os_string(&self) -> OsString {
        // Directories containing the separator cannot be joined; fall back
        // to passing them through one by one.
        std::env::join_paths(&self.dirs).unwrap_or_else(|_| {
            let mut joined = OsString::new();
            for (i, dir) in self.dirs.iter().enumerate() {
                if i > 0 {
                    joined.push(if cfg!(windows) { ";" } else { ":" });
                }
                joined.push(dir);
            }
            joined
        })
    }
}

/// First `$GOPATH` entry, or `$HOME/go`.
pub fn gopath() -> Option<PathBuf> {
    if let Some(value) = non_empty(names::GOPATH) {
        return std::env::split_paths(&value).next();
    }
    non_empty(names::HOME).map(|home| PathBuf::from(home).join("go"))
}

#[cfg(test)]
#[path = "search_path_tests.rs"]
mod tests;
