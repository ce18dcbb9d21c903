// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess invocation layer.
//!
//! - [`Tool`] binds a logical tool name to an executable, resolved at most
//!   once per process, and runs it in one of three capture modes.
//! - [`LineStream`] runs a long-lived subprocess and yields its combined
//!   output one line at a time while it is still running.
//!
//! Both watch the run's cancel token while the child runs and kill the
//! child once it trips.

mod stream;
mod tool;

use std::io;
use std::process::{Child, ExitStatus};
use std::time::Duration;

pub use stream::LineStream;
pub use tool::{Captured, Tool};

use crate::context::CancelToken;

/// Interval between cancellation checks while a child runs.
const POLL: Duration = Duration::from_millis(20);

/// Wait for `child` to exit, killing it if `cancel` trips first.
///
/// Returns `Ok(None)` when the child was killed.
fn supervise(child: &mut Child, cancel: &CancelToken) -> io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if cancel.is_cancelled() {
            // Fails only when the child exited since try_wait; wait reaps it either way.
            let _ = child.kill();
            child.wait()?;
            return Ok(None);
        }
        std::thread::sleep(POLL);
    }
}

/// Non-empty lines of captured output.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
