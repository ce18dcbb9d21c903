// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run context: cooperative cancellation plus the working directory that
//! external tools are invoked in.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Error, Result};

/// Shared cancellation flag.
///
/// Clones observe the same flag. Cancellation is cooperative: loops and
/// invocations check it between units of work.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Fail with [`Error::Cancelled`] once cancellation has been requested.
    pub fn ensure_active(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(Error::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Context passed to every tool invocation.
#[derive(Debug, Clone)]
pub struct RunContext {
    cancel: CancelToken,
    dir: PathBuf,
}

impl RunContext {
    pub fn new(dir: impl Into<PathBuf>, cancel: CancelToken) -> Self {
        Self {
            cancel,
            dir: dir.into(),
        }
    }

    /// The same run, scoped to another working directory.
    ///
    /// Relative paths are joined onto the current directory.
    pub fn within(&self, dir: impl AsRef<Path>) -> Self {
        Self {
            cancel: self.cancel.clone(),
            dir: self.dir.join(dir),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    pub fn ensure_active(&self) -> Result<()> {
        self.cancel.ensure_active()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
