// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The gate run.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use gogate::checks::{
    BranchCheck, Check, CheckContext, EolCheck, ModuleCheck, Settings, go_mod_files,
};
use gogate::cli::Cli;
use gogate::color::resolve_color;
use gogate::config::{self, Config};
use gogate::context::{CancelToken, RunContext};
use gogate::discovery::resolve_config;
use gogate::error::ExitCode;
use gogate::output::{Level, Reporter};
use gogate::search_path::SearchPath;
use gogate::tools::{GOIMPORTS_PKG, GOLINT_PKG, Toolbox};
use gogate::verdict::Verdict;

/// Run every check and turn the verdict into an exit code.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().context("reading current directory")?;
    let reporter = Reporter::stderr(cli.noise(), resolve_color(cli.color, cli.no_color));

    let config = match resolve_config(cli.config.as_deref(), &cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load_with_warnings(&path, &reporter)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };

    let search = Arc::new(SearchPath::from_env());
    let tools = Toolbox::new(&config.tools, Arc::clone(&search));
    let cancel = CancelToken::new();
    cancel_on_interrupt(&cancel);
    let run = RunContext::new(&cwd, cancel);

    if !tools.git.in_repo(&run)? {
        reporter.emit_bare(Level::Verbose, "not in git repo");
        return Ok(ExitCode::Success);
    }
    reporter.emit_bare(Level::Verbose, "in git repo");

    let version = tools.go.version(&run)?;
    reporter.verbose("found go version", &version.to_string());

    if search.appended().is_some() {
        reporter.warning(
            "putting $GOPATH/bin into PATH",
            &search.to_os_string().to_string_lossy(),
        );
    }

    if !cli.no_lint {
        tools.go.install(&run, tools.golint.tool().program(), GOLINT_PKG)?;
    }
    tools
        .go
        .install(&run, tools.goimports.tool().program(), GOIMPORTS_PKG)?;

    let files = tools.git.files(&run)?;
    let mut go_mods = go_mod_files(&files, &run)?;
    if go_mods.is_empty() {
        reporter.emit_bare(Level::Warning, "could not find any checked in go.mod files");
        go_mods.push(PathBuf::from("go.mod"));
    } else {
        reporter.verbose("found checked in go.mod files", &go_mods.len().to_string());
    }

    let settings = Settings {
        protected_branches: config.branch.protected.clone(),
        eol_exempt: config.eol.exempt.clone(),
        cache: !cli.no_cache,
        lint: !cli.no_lint,
        ignore_godoc: cli.no_godoc,
    };
    let cx = CheckContext {
        run: &run,
        tools: &tools,
        settings: &settings,
        reporter: &reporter,
    };

    let mut verdict = Verdict::new();
    for go_mod in go_mods {
        run.ensure_active()?;
        record(&mut verdict, &ModuleCheck::new(go_mod), &cx)?;
    }
    record(&mut verdict, &BranchCheck, &cx)?;
    record(&mut verdict, &EolCheck, &cx)?;

    tracing::debug!(
        issues = verdict.issues(),
        blocks = verdict.blocks(),
        "gate finished"
    );
    Ok(verdict.exit_code())
}

fn record(verdict: &mut Verdict, check: &dyn Check, cx: &CheckContext<'_>) -> anyhow::Result<()> {
    let result = check.run(cx)?;
    tracing::debug!(
        check = check.name(),
        issues = result.issues,
        blocked = result.blocked,
        "check finished"
    );
    verdict.record(&result);
    Ok(())
}

/// Trip `cancel` on SIGINT, SIGTERM or SIGHUP. A second signal exits at once.
fn cancel_on_interrupt(cancel: &CancelToken) {
    let token = cancel.clone();
    let installed = ctrlc::set_handler(move || {
        if token.is_cancelled() {
            std::process::exit(ExitCode::Cancelled.code());
        }
        tracing::debug!("interrupted, cancelling run");
        token.cancel();
    });
    if let Err(e) = installed {
        tracing::warn!("cannot install interrupt handler: {e}");
    }
}
