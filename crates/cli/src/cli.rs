// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::output::NoiseLevel;

/// Pre-commit gate for Go repositories: formatting, lint, tests, branch and
/// end-of-line rules
#[derive(Parser, Debug)]
#[command(name = "gogate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "GOGATE_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Bypass go's test cache
    #[arg(long, env = "GOGATE_NO_CACHE")]
    pub no_cache: bool,

    /// Skip golint
    #[arg(long, env = "GOGATE_NO_LINT")]
    pub no_lint: bool,

    /// Hide golint complaints about missing doc comments
    #[arg(long)]
    pub no_godoc: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Show every step
    #[arg(short, long, conflicts_with_all = ["short", "quiet"])]
    pub verbose: bool,

    /// Only show errors
    #[arg(long, conflicts_with = "quiet")]
    pub short: bool,

    /// Show nothing; the exit status is the answer
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Noise level selected by `--verbose`, `--short` or `--quiet`.
    pub fn noise(&self) -> NoiseLevel {
        if self.quiet {
            NoiseLevel::Quiet
        } else if self.short {
            NoiseLevel::Short
        } else if self.verbose {
            NoiseLevel::Verbose
        } else {
            NoiseLevel::Normal
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
