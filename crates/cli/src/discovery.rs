// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Looks for gogate.toml from the current directory upward, stopping at the
//! git root.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Name of the config file.
pub const CONFIG_FILE: &str = "gogate.toml";

/// Find gogate.toml in `start_dir` or one of its ancestors, not looking past
/// the first directory that contains `.git`.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Resolve the config path.
///
/// Priority:
/// 1. `-C`/`--config` (clap also reads `GOGATE_CONFIG`); it must exist
/// 2. Discovery from `cwd` up to the git root
/// 3. None (use defaults)
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    let Some(path) = explicit else {
        return Ok(find_config(cwd));
    };
    if !path.exists() {
        return Err(Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(Some(path.to_path_buf()))
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
