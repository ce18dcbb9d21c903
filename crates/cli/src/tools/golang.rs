// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `go` toolchain client.
//!
//! Covers the handful of subcommands the gate needs: `version`, `list`,
//! `mod tidy`, `install` and `test`. The version is asked for once; every
//! version-dependent decision reads the memoized value.

use super::Memo;
use crate::classify::PackageKinds;
use crate::context::RunContext;
use crate::error::{Error, Result};
use crate::exec::{LineStream, Tool, lines};
use crate::output::Reporter;
use crate::semver::SemVer;

const BANNER_PREFIX: &str = "go version go";

/// Options for `go list`.
#[derive(Debug, Clone, Default)]
pub struct ListOptions<'a> {
    /// Template passed with `-f`.
    pub format: Option<&'a str>,
}

/// Options for `go test`.
#[derive(Debug, Clone, Copy)]
pub struct TestOptions {
    /// Allow cached test results. When false `-count=1` is passed.
    pub cache: bool,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self { cache: true }
    }
}

/// Client for the `go` binary.
#[derive(Debug)]
pub struct GoClient {
    tool: Tool,
    version: Memo<SemVer>,
}

impl GoClient {
    pub fn new(tool: Tool) -> Self {
        Self {
            tool,
            version: Memo::default(),
        }
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Toolchain version from `go version`.
    pub fn version(&self, ctx: &RunContext) -> Result<SemVer> {
        self.version.get_or_try(|| {
            let banner = self.tool.must_output(ctx, ["version"])?;
            if !banner.starts_with(BANNER_PREFIX) {
                return Err(Error::VersionBanner { banner });
            }
            let Some(field) = banner.split_whitespace().nth(2) else {
                return Err(Error::VersionBanner { banner });
            };
            let version = SemVer::parse(field.strip_prefix("go").unwrap_or(field))?;
            tracing::debug!(%version, "go version");
            Ok(version)
        })
    }

    /// Whether this toolchain supports go modules.
    pub fn supports_modules(&self, ctx: &RunContext) -> Result<bool> {
        let version = self.version(ctx)?;
        Ok(!version.is_before(1, 11) && !version.is_prerelease(1, 11, "beta1"))
    }

    /// `go list [-f FORMAT] PKGS...`, one entry per line.
    pub fn list<S: AsRef<str>>(
        &self,
        ctx: &RunContext,
        packages: &[S],
        opts: &ListOptions<'_>,
    ) -> Result<Vec<String>> {
        let mut args = vec!["list"];
        if let Some(format) = opts.format {
            args.extend(["-f", format]);
        }
        args.extend(packages.iter().map(AsRef::as_ref));

        let out = self.tool.must_output(ctx, &args)?;
        Ok(lines(&out).map(str::to_string).collect())
    }

    /// Package names (`{{.Name}}`) of `pkg`.
    pub fn package_names(&self, ctx: &RunContext, pkg: &str) -> Result<Vec<String>> {
        self.list(
            ctx,
            &[pkg],
            &ListOptions {
                format: Some("{{.Name}}"),
            },
        )
    }

    /// Tidy the module in the context directory.
    ///
    /// Toolchains without module support have nothing to tidy. Output is
    /// reported dimmed. Returns whether tidying succeeded.
    pub fn mod_tidy(&self, ctx: &RunContext, reporter: &Reporter) -> Result<bool> {
        let version = self.version(ctx)?;
        let verb = if version.is_before(1, 11) {
            return Ok(true);
        } else if version.is_prerelease(1, 11, "beta2") {
            "-sync"
        } else {
            "tidy"
        };

        let context = format!("go mod {verb}");
        let out = self.tool.combined_output(ctx, ["mod", verb])?;
        for line in lines(&out.text) {
            let line = line.strip_prefix("go: ").unwrap_or(line);
            if !line.is_empty() {
                reporter.hide(&context, line);
            }
        }
        Ok(out.success)
    }

    /// Make sure `bin` is on the search path, installing `pkg` if it is not.
    pub fn install(&self, ctx: &RunContext, bin: &str, pkg: &str) -> Result<()> {
        if self.tool.search_finds(bin) {
            return Ok(());
        }
        tracing::debug!(bin, pkg, "installing");

        let version = self.version(ctx)?;
        let out = if version.is_before(1, 16) {
            self.tool.combined_output(ctx, ["get", "-u", pkg])?
        } else {
            self.tool
                .combined_output(ctx, ["install".to_string(), format!("{pkg}@latest")])?
        };
        if !out.success {
            return Err(Error::Install {
                bin: bin.to_string(),
                message: out.text,
            });
        }

        if !self.tool.search_finds(bin) {
            return Err(Error::Install {
                bin: bin.to_string(),
                message: "binary not found after installing".to_string(),
            });
        }
        Ok(())
    }

    /// Start `go test` over `packages` and stream its output.
    pub fn test<S: AsRef<str>>(
        &self,
        ctx: &RunContext,
        packages: &[S],
        opts: TestOptions,
    ) -> Result<LineStream> {
        let mut args = vec!["test"];
        if !opts.cache {
            args.push("-count=1");
        }
        args.extend(packages.iter().map(AsRef::as_ref));
        self.tool.stream(ctx, &args)
    }
}

/// Package name lookup bound to one run context.
pub struct PackageLookup<'a> {
    pub go: &'a GoClient,
    pub ctx: &'a RunContext,
}

impl PackageKinds for PackageLookup<'_> {
    fn package_names(&self, pkg: &str) -> Result<Vec<String>> {
        self.go.package_names(self.ctx, pkg)
    }
}

#[cfg(test)]
#[path = "golang_tests.rs"]
mod tests;
