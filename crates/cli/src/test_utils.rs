// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use termcolor::{ColorSpec, WriteColor};

use crate::context::{CancelToken, RunContext};
use crate::exec::Tool;
use crate::output::{NoiseLevel, Reporter};
use crate::tools::{Formatter, GitClient, GoClient, Linter, Toolbox};

/// Creates a temp directory with a minimal gogate.toml.
pub fn temp_project() -> TempDir {
    temp_project_with_config("version = 1\n")
}

/// Creates a temp directory with custom config content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("gogate.toml"), config).unwrap();
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
///
/// # Example
///
/// ```ignore
/// let tmp = TempDir::new().unwrap();
/// create_tree(tmp.path(), &[
///     ("go.mod", "module example.com/a\n"),
///     ("pkg/a.go", "package pkg\n"),
/// ]);
/// ```
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// A run context rooted at `dir` with a fresh cancel token.
pub fn run_context(dir: &Path) -> RunContext {
    RunContext::new(dir, CancelToken::new())
}

/// Writes an executable `sh` script named `name` into `dir`.
#[cfg(unix)]
pub fn fake_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// A tool binding for a fake `sh` script.
#[cfg(unix)]
pub fn fake_binding(dir: &Path, name: &'static str, body: &str) -> Tool {
    Tool::at(name, fake_tool(dir, name, body))
}

/// In-memory, colorless sink that tests can read back.
#[derive(Clone, Default)]
pub struct Transcript {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Transcript {
    pub fn text(&self) -> String {
        String::from_utf8(self.buf.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_string).collect()
    }
}

impl Write for Transcript {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl WriteColor for Transcript {
    fn supports_color(&self) -> bool {
        false
    }

    fn set_color(&mut self, _spec: &ColorSpec) -> std::io::Result<()> {
        Ok(())
    }

    fn reset(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// A verbose reporter paired with the transcript it writes to.
pub fn recording_reporter() -> (Reporter, Transcript) {
    let transcript = Transcript::default();
    (
        Reporter::new(NoiseLevel::Verbose, transcript.clone()),
        transcript,
    )
}

/// Bodies of the fake tools behind [`fake_toolbox`].
#[cfg(unix)]
pub struct FakeTools<'a> {
    pub git: &'a str,
    pub go: &'a str,
    pub gofmt: &'a str,
    pub goimports: &'a str,
    pub golint: &'a str,
}

#[cfg(unix)]
impl Default for FakeTools<'_> {
    fn default() -> Self {
        Self {
            git: "exit 0",
            go: "exit 0",
            gofmt: "exit 0",
            goimports: "exit 0",
            golint: "exit 0",
        }
    }
}

/// A toolbox whose tools are `sh` scripts written into `bin`.
#[cfg(unix)]
pub fn fake_toolbox(bin: &Path, tools: FakeTools<'_>) -> Toolbox {
    Toolbox {
        git: GitClient::new(fake_binding(bin, "git", tools.git)),
        go: GoClient::new(fake_binding(bin, "go", tools.go)),
        gofmt: Formatter::new(fake_binding(bin, "gofmt", tools.gofmt)),
        goimports: Formatter::new(fake_binding(bin, "goimports", tools.goimports)),
        golint: Linter::new(fake_binding(bin, "golint", tools.golint)),
    }
}
