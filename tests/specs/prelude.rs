// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.
//!
//! [`FakeRepo`] lays out a work tree and a directory of `sh` scripts that
//! stand in for `git` and the go tools, then runs the gogate binary against
//! them with the tool environment variables pointing at the scripts.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the gogate binary
pub fn gogate_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gogate"));
    for var in [
        "GIT",
        "GO",
        "GOFMT",
        "GOIMPORTS",
        "GOLINT",
        "GOGATE_CONFIG",
        "GOGATE_NO_CACHE",
        "GOGATE_NO_LINT",
        "NO_COLOR",
        "COLOR",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// A work tree plus fake tools.
pub struct FakeRepo {
    root: TempDir,
    in_repo: bool,
    branch: String,
    tracked: Vec<String>,
    go_test: String,
    gofmt: String,
    golint: String,
}

impl FakeRepo {
    /// A module `example.com/m` with one passing package.
    pub fn new() -> Self {
        Self::empty()
            .file("go.mod", "module example.com/m\n\ngo 1.21\n")
            .file("main.go", "package main\n\nfunc main() {}\n")
    }

    /// A work tree with nothing tracked.
    pub fn empty() -> Self {
        let repo = Self {
            root: TempDir::new().unwrap(),
            in_repo: true,
            branch: "feature/x".to_string(),
            tracked: Vec::new(),
            go_test: r"printf 'ok  \texample.com/m\t0.01s\n'".to_string(),
            gofmt: String::new(),
            golint: String::new(),
        };
        fs::create_dir_all(repo.work()).unwrap();
        fs::create_dir_all(repo.bin()).unwrap();
        fs::create_dir_all(repo.root.path().join("gopath/bin")).unwrap();
        repo
    }

    /// The directory gogate runs in.
    pub fn work(&self) -> PathBuf {
        self.root.path().join("work")
    }

    fn bin(&self) -> PathBuf {
        self.root.path().join("bin")
    }

    /// Path of the log the fake `go` appends its arguments to.
    pub fn go_log(&self) -> PathBuf {
        self.root.path().join("go.log")
    }

    /// Write and track a file.
    pub fn file(mut self, path: &str, content: &str) -> Self {
        let full = self.work().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
        self.tracked.push(path.to_string());
        self
    }

    /// Write a file without tracking it.
    pub fn untracked(self, path: &str, content: &str) -> Self {
        fs::write(self.work().join(path), content).unwrap();
        self
    }

    pub fn outside_repo(mut self) -> Self {
        self.in_repo = false;
        self
    }

    pub fn on_branch(mut self, branch: &str) -> Self {
        self.branch = branch.to_string();
        self
    }

    /// Lines the fake `go test` prints.
    pub fn go_test_prints(mut self, lines: &[&str]) -> Self {
        self.go_test = lines
            .iter()
            .map(|line| format!("printf '%s\\n' '{line}'"))
            .collect::<Vec<_>>()
            .join("\n");
        self
    }

    /// Shell body the fake `go test` runs instead of printing lines.
    pub fn go_test_runs(mut self, body: &str) -> Self {
        self.go_test = body.to_string();
        self
    }

    /// Files the fake `gofmt` flags.
    pub fn gofmt_flags(mut self, files: &[&str]) -> Self {
        self.gofmt = files
            .iter()
            .map(|f| format!("echo {f}"))
            .collect::<Vec<_>>()
            .join("\n");
        self
    }

    /// Lines the fake `golint` prints for every package.
    pub fn golint_prints(mut self, line: &str) -> Self {
        self.golint = format!("echo '{line}'");
        self
    }

    /// Build the command, writing the fake tools first.
    pub fn cmd(&self) -> Command {
        let git = format!(
            r#"case "$*" in
  "rev-parse --is-inside-work-tree") {in_repo} ;;
  "rev-parse --abbrev-ref HEAD") echo '{branch}' ;;
  "rev-parse --abbrev-ref refs/remotes/origin/HEAD") echo origin/main ;;
  "ls-files") printf '%s\n' {tracked} ;;
  *) exit 1 ;;
esac"#,
            in_repo = if self.in_repo {
                "echo true"
            } else {
                "echo 'fatal: not a git repository' >&2; exit 128"
            },
            branch = self.branch,
            tracked = self.tracked.join(" "),
        );
        let go = format!(
            r#"echo "$*" >> '{log}'
case "$1" in
  version) echo 'go version go1.21.0 linux/amd64' ;;
  mod) exit 0 ;;
  list)
    if [ "$2" = -f ]; then echo lib; exit 0; fi
    echo example.com/m
    ;;
  test)
{test}
    ;;
esac"#,
            log = self.go_log().display(),
            test = self.go_test,
        );

        let mut cmd = gogate_cmd();
        cmd.current_dir(self.work())
            .env("GIT", self.script("git", &git))
            .env("GO", self.script("go", &go))
            .env("GOFMT", self.script("gofmt", &self.gofmt))
            .env("GOIMPORTS", self.script("goimports", ""))
            .env("GOLINT", self.script("golint", &self.golint))
            .env("GOPATH", self.root.path().join("gopath"))
            .env(
                "PATH",
                format!(
                    "{}:{}:/usr/bin:/bin",
                    self.bin().display(),
                    self.root.path().join("gopath/bin").display()
                ),
            );
        cmd
    }

    fn script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Arguments of every fake `go` invocation, one per line.
    pub fn go_calls(&self) -> Vec<String> {
        fs::read_to_string(self.go_log())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// Write a file at `path` relative to `root`.
pub fn write(root: &Path, path: &str, content: &str) {
    let full = root.join(path);
    fs::create_dir_all(full.parent().unwrap()).unwrap();
    fs::write(full, content).unwrap();
}
