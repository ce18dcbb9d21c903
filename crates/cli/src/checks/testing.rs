// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Drive `go test` and tally its output.

use super::CheckContext;
use crate::classify::TestTally;
use crate::context::RunContext;
use crate::error::Result;
use crate::tools::{PackageLookup, TestOptions};

/// Run `go test` over `packages` in `module` and return the issue count.
///
/// Output is classified line by line as it arrives. `workdir` is the
/// absolute module directory as the go tool prints it.
pub fn run_tests(
    cx: &CheckContext<'_>,
    module: &RunContext,
    packages: &[String],
    workdir: &str,
) -> Result<usize> {
    let go = &cx.tools.go;
    let lookup = PackageLookup { go, ctx: module };
    let mut tally = TestTally::new(workdir, &lookup, cx.reporter);

    let mut stream = go.test(
        module,
        packages,
        TestOptions {
            cache: cx.settings.cache,
        },
    )?;
    loop {
        let next = stream.next();
        if let Err(e) = module.ensure_active() {
            tracing::debug!("cancelled, abandoning go test");
            drop(stream.abandon());
            return Err(e);
        }
        let Some(line) = next else { break };
        tally.record(&line)?;
    }

    tracing::debug!(issues = tally.issues(), "go test finished");
    Ok(tally.issues())
}

#[cfg(test)]
#[path = "testing_tests.rs"]
mod tests;
