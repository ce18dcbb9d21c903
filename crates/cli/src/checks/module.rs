// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-module check: tidy, format, lint and test one go module.
//!
//! ## Module mode
//!
//! Go modules are used when the toolchain supports them, the module
//! directory is outside `$GOPATH/src`, and its `go.mod` is readable.
//! Otherwise packages are resolved the GOPATH way and `go mod tidy` is
//! skipped.
//!
//! ## Package names
//!
//! `go list ./...` prints import paths. They are rewritten relative to the
//! module directory (`.` for the module root) so they can be handed back to
//! `golint`, `git check-ignore` and `go test ./PKG`.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::testing::run_tests;
use super::{Check, CheckContext, CheckResult};
use crate::context::RunContext;
use crate::error::Result;
use crate::gomod;
use crate::search_path::gopath;
use crate::tools::{ListOptions, files_needing_format};
use crate::walker::{WalkControl, walk};

/// Checks the module whose `go.mod` is at `go_mod`, relative to the run
/// directory.
pub struct ModuleCheck {
    go_mod: PathBuf,
}

impl ModuleCheck {
    pub fn new(go_mod: impl Into<PathBuf>) -> Self {
        Self {
            go_mod: go_mod.into(),
        }
    }

    pub fn go_mod(&self) -> &Path {
        &self.go_mod
    }
}

/// How import paths of one module map back to directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePaths {
    /// Absolute module directory.
    pub workdir: String,
    /// Import path prefix of the directory: relative to `$GOPATH/src` when
    /// inside it, else the directory itself.
    pub mod_path: String,
    /// Name from the `module` line of `go.mod`, in module mode.
    pub mod_base: Option<String>,
}

impl PackagePaths {
    /// Rewrite an import path printed by `go list` relative to the module.
    pub fn normalize(&self, pkg: &str) -> String {
        let mut pkg = strip_root(pkg, &format!("_{}", self.workdir));
        pkg = strip_root(&pkg, &self.mod_path);
        if let Some(base) = &self.mod_base {
            pkg = strip_root(&pkg, base);
        }
        pkg
    }

    /// Package argument for `golint`.
    pub fn lint_target<'a>(&self, pkg: &'a str) -> &'a str {
        let mut pkg = pkg;
        if let Some(base) = &self.mod_base
            && pkg != base
        {
            pkg = pkg.strip_prefix(base.as_str()).unwrap_or(pkg);
        }
        if pkg == "/" {
            pkg = ".";
        }
        pkg.strip_prefix('/').unwrap_or(pkg)
    }
}

/// Replace `root/` with nothing and a remaining `root` with `.`.
fn strip_root(pkg: &str, root: &str) -> String {
    if root.is_empty() {
        return pkg.to_string();
    }
    pkg.replace(&format!("{root}/"), "").replace(root, ".")
}

impl Check for ModuleCheck {
    fn name(&self) -> &'static str {
        "module"
    }

    fn run(&self, cx: &CheckContext<'_>) -> Result<CheckResult> {
        let reporter = cx.reporter;
        let go_mod = self.go_mod.display().to_string();
        reporter.verbose("using go.mod", &go_mod);

        let dir = match self.go_mod.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => cx.run.dir().join(parent),
            _ => cx.run.dir().to_path_buf(),
        };
        let pwd = match dir.canonicalize() {
            Ok(pwd) => pwd,
            Err(e) => {
                reporter.error(&go_mod, &format!("{}: {e}", dir.display()));
                return Ok(CheckResult::blocked());
            }
        };
        let module = cx.run.within(&pwd);
        let workdir = pwd.display().to_string();

        let in_gopath = gopath()
            .and_then(|gp| pwd.strip_prefix(gp.join("src")).ok().map(Path::to_path_buf));
        let mod_path = match &in_gopath {
            Some(rel) => rel.display().to_string(),
            None => workdir.clone(),
        };
        reporter.verbose("found module path", &mod_path);

        let go_mod_file = pwd.join("go.mod");
        let modules = cx.tools.go.supports_modules(&module)?
            && in_gopath.is_none()
            && gomod::can_read(&go_mod_file);
        if !modules {
            reporter.verbose("go modules", "ignoring go modules");
        }

        let mod_base = if modules {
            gomod::module_name(&go_mod_file)
        } else {
            None
        };
        if let Some(base) = &mod_base {
            reporter.verbose("found module name", base);
        }
        let paths = PackagePaths {
            workdir: workdir.clone(),
            mod_path,
            mod_base,
        };

        let go_files = go_files(cx, &module, &pwd)?;
        reporter.verbose("found files", &go_files.len().to_string());

        let subrepos = find_subrepos(&pwd);
        for subrepo in &subrepos {
            reporter.verbose("found subrepo", subrepo);
        }

        if modules && !cx.tools.go.mod_tidy(&module, reporter)? {
            return Ok(CheckResult::blocked());
        }

        let mut packages = Vec::new();
        for pkg in cx.tools.go.list(&module, &["./..."], &ListOptions::default())? {
            module.ensure_active()?;
            if pkg.contains("/vendor/") {
                continue;
            }
            let pkg = paths.normalize(&pkg);
            if cx.tools.git.check_ignore(&module, &pkg)? {
                reporter.verbose("package is ignored in git", &pkg);
                continue;
            }
            if subrepos.contains(&pkg) {
                reporter.verbose("package is in a subrepo", &pkg);
                continue;
            }
            packages.push(pkg);
        }
        reporter.verbose("found packages", &packages.join(" "));

        let mut issues = 0;

        if !go_files.is_empty() {
            tracing::debug!(files = go_files.len(), "checking formatting");
            issues += files_needing_format(
                &module,
                &cx.tools.gofmt,
                &cx.tools.goimports,
                &go_files,
                reporter,
            )?;
        }

        if cx.settings.lint && !packages.is_empty() {
            tracing::debug!(packages = packages.len(), "linting");
            let trim_prefix = format!("{workdir}/");
            for pkg in &packages {
                module.ensure_active()?;
                let target = paths.lint_target(pkg);
                if cx.tools.golint.lint(
                    &module,
                    target,
                    &trim_prefix,
                    cx.settings.ignore_godoc,
                    reporter,
                )? {
                    issues += 1;
                }
            }
        }

        if !packages.is_empty() {
            let test_packages: Vec<String> = packages.iter().map(|p| format!("./{p}")).collect();
            issues += run_tests(cx, &module, &test_packages, &workdir)?;
        }

        Ok(CheckResult::with_issues(issues))
    }
}

/// Tracked go sources worth formatting: not vendored, not empty, not
/// generated.
fn go_files(cx: &CheckContext<'_>, module: &RunContext, pwd: &Path) -> Result<Vec<String>> {
    let files = cx.tools.git.files(module)?;
    let mut found = Vec::new();
    for file in files.iter() {
        module.ensure_active()?;
        if !file.ends_with(".go") || file.starts_with("vendor/") {
            continue;
        }
        let path = pwd.join(file);
        if gomod::is_empty(&path) || gomod::is_generated(&path) {
            continue;
        }
        found.push(file.clone());
    }
    Ok(found)
}

/// Directories below `root` holding their own `.git`, relative to `root`.
///
/// Hidden directories and `vendor` are not descended into.
pub fn find_subrepos(root: &Path) -> BTreeSet<String> {
    let mut subrepos = BTreeSet::new();
    walk(root, |entry| {
        if !entry.is_dir() {
            return WalkControl::Continue;
        }
        if entry.name == ".git" {
            if let Some(parent) = entry.path.parent()
                && !parent.as_os_str().is_empty()
            {
                subrepos.insert(parent.display().to_string());
            }
            return WalkControl::SkipSubtree;
        }
        if entry.name.starts_with('.') || entry.name == "vendor" {
            return WalkControl::SkipSubtree;
        }
        WalkControl::Continue
    });
    subrepos
}

#[cfg(test)]
#[path = "module_tests.rs"]
mod tests;
