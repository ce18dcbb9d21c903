// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// gogate error types.
///
/// Every variant is fatal to the run. Tool failures that callers can branch
/// on (a non-zero exit from `gofmt`, a failing test) are data, not errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required executable could not be located.
    #[error("{tool}: executable not found: {message}")]
    ToolNotFound { tool: String, message: String },

    /// The subprocess could not be started.
    #[error("{tool}: could not run: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading subprocess output failed.
    #[error("{tool}: reading output: {source}")]
    Output {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A command with no fallback exited unsuccessfully.
    #[error("{tool} {args}: command unsuccessful\n{output}")]
    CommandFailed {
        tool: String,
        args: String,
        output: String,
    },

    /// `go version` printed something unexpected.
    #[error("go version: could not find version: {banner}")]
    VersionBanner { banner: String },

    /// A version string could not be parsed.
    #[error("invalid version {input:?}: {source}")]
    InvalidVersion {
        input: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A helper binary could not be installed.
    #[error("installing {bin}: {message}")]
    Install { bin: String, message: String },

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// The run was cancelled.
    #[error("cancelled")]
    Cancelled,
}

/// Result type using gogate Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// The change may proceed.
    Success,
    /// One or more checks blocked the commit.
    Blocked,
    /// A fatal error stopped the run.
    Fatal,
    /// The run was cancelled before it finished.
    Cancelled,
}

impl ExitCode {
    /// Numeric process status.
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Success => 0,
            ExitCode::Blocked | ExitCode::Fatal | ExitCode::Cancelled => 1,
        }
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Cancelled => ExitCode::Cancelled,
            _ => ExitCode::Fatal,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
