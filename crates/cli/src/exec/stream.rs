// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-by-line streaming of a running subprocess.
//!
//! A producer thread owns the child and a forwarder thread reads the merged
//! stdout/stderr pipe, handing each line over a zero-capacity channel, so
//! the consumer sees every line in the order the child wrote it, as soon as
//! it is written. The producer kills the child when the run is cancelled.
//!
//! ## Failure lines
//!
//! The stream never fails as a whole. When the pipe cannot be created, the
//! child cannot be started, reading breaks, or waiting on the child fails,
//! one line describing the problem is forwarded and the stream ends.

use std::io::{self, BufRead, BufReader, PipeReader};
use std::process::Command;
use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, bounded};

use super::{POLL, supervise};
use crate::context::CancelToken;

/// Single-pass sequence of output lines from a running subprocess.
pub struct LineStream {
    rx: Receiver<String>,
    producer: JoinHandle<()>,
    cancel: CancelToken,
}

impl LineStream {
    /// Start `cmd` on a producer thread. Its stdout and stderr are replaced
    /// by a shared pipe. The child is killed once `cancel` trips.
    pub fn spawn(tool: &str, cmd: Command, cancel: CancelToken) -> Self {
        let (tx, rx) = bounded(0);
        let tool = tool.to_string();
        let token = cancel.clone();
        let producer = std::thread::spawn(move || produce(&tool, cmd, tx, &token));
        Self {
            rx,
            producer,
            cancel,
        }
    }

    /// Stop reading.
    ///
    /// The producer keeps draining the pipe so the child can run to
    /// completion, discards what it reads, and reaps the child. The returned
    /// handle finishes once that is done, or once the child has been killed
    /// after cancellation.
    pub fn abandon(self) -> JoinHandle<()> {
        drop(self.rx);
        self.producer
    }
}

impl Iterator for LineStream {
    type Item = String;

    /// Next line, or `None` once the output is exhausted or the run is
    /// cancelled.
    fn next(&mut self) -> Option<String> {
        loop {
            match self.rx.recv_timeout(POLL) {
                Ok(line) => return Some(line),
                Err(RecvTimeoutError::Timeout) if !self.cancel.is_cancelled() => continue,
                Err(_) => return None,
            }
        }
    }
}

fn produce(tool: &str, mut cmd: Command, tx: Sender<String>, cancel: &CancelToken) {
    let (reader, writer) = match io::pipe() {
        Ok(pipe) => pipe,
        Err(e) => {
            let _ = tx.send(format!("{tool}: {e}"));
            return;
        }
    };
    let stderr = match writer.try_clone() {
        Ok(w) => w,
        Err(e) => {
            let _ = tx.send(format!("{tool}: {e}"));
            return;
        }
    };

    cmd.stdout(writer).stderr(stderr);
    let spawned = cmd.spawn();
    drop(cmd);

    let mut child = match spawned {
        Ok(child) => child,
        Err(e) => {
            let _ = tx.send(format!("{tool}: {e}"));
            return;
        }
    };

    let forwarder = {
        let tool = tool.to_string();
        let tx = tx.clone();
        std::thread::spawn(move || forward(&tool, reader, &tx))
    };

    match supervise(&mut child, cancel) {
        Ok(Some(status)) => {
            let _ = forwarder.join();
            tracing::debug!(tool, %status, "stream finished");
        }
        // Killed; a grandchild may still hold the pipe, so the forwarder is left behind.
        Ok(None) => tracing::debug!(tool, "cancelled, child killed"),
        Err(e) => {
            if forwarder.join().unwrap_or(false) {
                let _ = tx.send(format!("{tool}: {e}"));
            }
        }
    }
}

/// Forward lines until the pipe closes. Returns whether the consumer was
/// still listening at the end.
fn forward(tool: &str, reader: PipeReader, tx: &Sender<String>) -> bool {
    let mut forwarding = true;
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                if !forwarding {
                    continue;
                }
                if tx.send(decode_line(&buf)).is_err() {
                    tracing::debug!(tool, "stream abandoned, draining output");
                    forwarding = false;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                if forwarding {
                    forwarding = tx.send(format!("{tool}: reading output: {e}")).is_ok();
                }
                break;
            }
        }
    }
    forwarding
}

/// Strip the line terminator and decode lossily.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
