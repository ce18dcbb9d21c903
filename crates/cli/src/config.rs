// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles gogate.toml parsing with version validation and unknown key warnings.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::output::Reporter;

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Protected branch rule.
    #[serde(default)]
    pub branch: BranchConfig,

    /// End-of-line rule.
    #[serde(default)]
    pub eol: EolConfig,

    /// Program names for the external tools.
    #[serde(default)]
    pub tools: ToolsConfig,
}

/// Protected branch rule configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchConfig {
    /// Branches never committed to, in addition to the remote's head branch.
    #[serde(default = "BranchConfig::default_protected")]
    pub protected: Vec<String>,
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self {
            protected: Self::default_protected(),
        }
    }
}

impl BranchConfig {
    fn default_protected() -> Vec<String> {
        vec!["production".to_string(), "staging".to_string()]
    }
}

/// End-of-line rule configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EolConfig {
    /// File extensions (without the dot) that are not checked.
    #[serde(default = "EolConfig::default_exempt")]
    pub exempt: Vec<String>,
}

impl Default for EolConfig {
    fn default() -> Self {
        Self {
            exempt: Self::default_exempt(),
        }
    }
}

impl EolConfig {
    fn default_exempt() -> Vec<String> {
        vec!["jar".to_string()]
    }
}

/// Program names or paths. Environment variables take precedence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolsConfig {
    pub git: Option<String>,
    pub go: Option<String>,
    pub gofmt: Option<String>,
    pub goimports: Option<String>,
    pub golint: Option<String>,
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known keys, per table. The empty name is the top level.
const KNOWN_KEYS: &[(&str, &[&str])] = &[
    ("", &["version", "branch", "eol", "tools"]),
    ("branch", &["protected"]),
    ("eol", &["exempt"]),
    ("tools", &["git", "go", "gofmt", "goimports", "golint"]),
];

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    parse(&read(path)?, path)
}

/// Load config, reporting unknown keys as warnings.
pub fn load_with_warnings(path: &Path, reporter: &Reporter) -> Result<Config> {
    parse_with_warnings(&read(path)?, path, reporter)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse config from string content.
///
/// Unknown keys are ignored.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;
    let version = version_check
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})\n  Upgrade gogate to use this config.",
            version, SUPPORTED_VERSION
        )));
    }

    toml::from_str(content).map_err(|e| config_error(e.to_string()))
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path, reporter: &Reporter) -> Result<Config> {
    let config = parse(content, path)?;
    let context = path.display().to_string();
    for key in unknown_keys(content) {
        reporter.warning(&context, &format!("unrecognized field `{key}` (ignored)"));
    }
    Ok(config)
}

/// Dotted names of keys gogate does not know.
pub fn unknown_keys(content: &str) -> Vec<String> {
    let Ok(table) = content.parse::<toml::Table>() else {
        return Vec::new();
    };

    let known = |section: &str| {
        KNOWN_KEYS
            .iter()
            .find(|(name, _)| *name == section)
            .map_or(&[][..], |(_, keys)| *keys)
    };

    let mut unknown = Vec::new();
    for (key, value) in &table {
        if !known("").contains(&key.as_str()) {
            unknown.push(key.clone());
            continue;
        }
        if let toml::Value::Table(section) = value {
            let section_keys = known(key);
            for nested in section.keys() {
                if !section_keys.contains(&nested.as_str()) {
                    unknown.push(format!("{key}.{nested}"));
                }
            }
        }
    }
    unknown
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
