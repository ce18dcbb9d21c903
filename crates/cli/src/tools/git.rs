// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `git` queries used by the gate.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use super::Memo;
use crate::context::RunContext;
use crate::error::Result;
use crate::exec::{Tool, lines};

/// Client for the `git` binary.
#[derive(Debug)]
pub struct GitClient {
    tool: Tool,
    branch: Memo<String>,
    head_branch: Memo<String>,
    files: Mutex<HashMap<PathBuf, Arc<[String]>>>,
}

impl GitClient {
    pub fn new(tool: Tool) -> Self {
        Self {
            tool,
            branch: Memo::default(),
            head_branch: Memo::default(),
            files: Mutex::new(HashMap::new()),
        }
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Whether the context directory is inside a git work tree.
    pub fn in_repo(&self, ctx: &RunContext) -> Result<bool> {
        let out = self
            .tool
            .combined_output(ctx, ["rev-parse", "--is-inside-work-tree"])?;
        Ok(out.success && out.text == "true")
    }

    /// The checked-out branch.
    pub fn branch(&self, ctx: &RunContext) -> Result<String> {
        self.branch.get_or_try(|| {
            self.tool
                .must_output(ctx, ["rev-parse", "--abbrev-ref", "HEAD"])
        })
    }

    /// The remote's default branch, without the `origin/` prefix.
    pub fn head_branch(&self, ctx: &RunContext) -> Result<String> {
        self.head_branch.get_or_try(|| {
            let head = self.tool.must_output(
                ctx,
                ["rev-parse", "--abbrev-ref", "refs/remotes/origin/HEAD"],
            )?;
            Ok(head.strip_prefix("origin/").unwrap_or(&head).to_string())
        })
    }

    /// Tracked files below the context directory, relative to it.
    ///
    /// Listed once per directory.
    pub fn files(&self, ctx: &RunContext) -> Result<Arc<[String]>> {
        let mut cache = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(files) = cache.get(ctx.dir()) {
            tracing::trace!(dir = %ctx.dir().display(), "file list cached");
            return Ok(Arc::clone(files));
        }

        let listing = self.tool.must_output(ctx, ["ls-files"])?;
        let files: Arc<[String]> = lines(&listing).map(str::to_string).collect();
        tracing::debug!(dir = %ctx.dir().display(), count = files.len(), "listed tracked files");
        cache.insert(ctx.dir().to_path_buf(), Arc::clone(&files));
        Ok(files)
    }

    /// Whether `path` is ignored by git.
    pub fn check_ignore(&self, ctx: &RunContext, path: &str) -> Result<bool> {
        Ok(self
            .tool
            .combined_output(ctx, ["check-ignore", "-q", path])?
            .success)
    }
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
