// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tool bindings and synchronous capture modes.

use std::ffi::{OsStr, OsString};
use std::io::{self, PipeReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::{Arc, OnceLock};

use super::{LineStream, supervise};
use crate::context::RunContext;
use crate::env::names;
use crate::error::{Error, Result};
use crate::search_path::SearchPath;

/// Output of a command that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    /// Captured text with surrounding whitespace trimmed.
    pub text: String,
    /// Whether the command exited successfully.
    pub success: bool,
}

/// A logical tool bound to an executable.
///
/// The executable is located on first use and the result, success or not,
/// is kept for the life of the binding.
#[derive(Debug)]
pub struct Tool {
    name: &'static str,
    program: String,
    search: Arc<SearchPath>,
    resolved: OnceLock<std::result::Result<PathBuf, String>>,
}

impl Tool {
    pub fn new(name: &'static str, program: impl Into<String>, search: Arc<SearchPath>) -> Self {
        Self {
            name,
            program: program.into(),
            search,
            resolved: OnceLock::new(),
        }
    }

    /// A binding whose executable is already known.
    pub fn at(name: &'static str, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name,
            program: path.display().to_string(),
            search: Arc::new(SearchPath::default()),
            resolved: OnceLock::from(Ok(path)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Program name or path as configured, before resolution.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Locate the executable, once.
    pub fn resolve(&self) -> Result<&Path> {
        self.resolve_with(|program| locate(program, &self.search))
    }

    pub(crate) fn resolve_with(
        &self,
        lookup: impl FnOnce(&str) -> std::result::Result<PathBuf, String>,
    ) -> Result<&Path> {
        let resolved = self.resolved.get_or_init(|| {
            let found = lookup(&self.program);
            match &found {
                Ok(path) => tracing::debug!(tool = self.name, path = %path.display(), "resolved"),
                Err(e) => tracing::debug!(tool = self.name, error = %e, "not found"),
            }
            found
        });

        match resolved {
            Ok(path) => Ok(path),
            Err(message) => Err(Error::ToolNotFound {
                tool: self.name.to_string(),
                message: message.clone(),
            }),
        }
    }

    /// Whether `program` is currently on this tool's search path.
    ///
    /// Unlike [`Tool::resolve`] this is not memoized; it is used to decide
    /// whether a helper binary needs installing.
    pub fn search_finds(&self, program: &str) -> bool {
        locate(program, &self.search).is_ok()
    }

    /// Build a subprocess description for this tool.
    pub fn command<I, S>(&self, ctx: &RunContext, args: I) -> Result<Command>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let program = self.resolve()?;

        let mut cmd = Command::new(program);
        cmd.args(args).current_dir(ctx.dir()).stdin(Stdio::null());
        if !self.search.dirs().is_empty() {
            cmd.env(names::PATH, self.search.to_os_string());
        }
        Ok(cmd)
    }

    /// Run to completion, capturing stdout. Stderr passes through.
    ///
    /// A non-zero exit is reported through [`Captured::success`].
    pub fn output<I, S>(&self, ctx: &RunContext, args: I) -> Result<Captured>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.capture(ctx, collect_args(args), false)
    }

    /// Like [`Tool::output`], but a non-zero exit is an error.
    pub fn must_output<I, S>(&self, ctx: &RunContext, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args = collect_args(args);
        let captured = self.capture(ctx, args.clone(), false)?;
        if !captured.success {
            return Err(Error::CommandFailed {
                tool: self.name.to_string(),
                args: display_args(&args),
                output: captured.text,
            });
        }
        Ok(captured.text)
    }

    /// Like [`Tool::output`], with stderr merged into the captured text.
    pub fn combined_output<I, S>(&self, ctx: &RunContext, args: I) -> Result<Captured>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.capture(ctx, collect_args(args), true)
    }

    /// Start a long-running invocation and stream its combined output.
    ///
    /// Only resolving the executable can fail here; failures to start the
    /// subprocess arrive as a line on the stream.
    pub fn stream<I, S>(&self, ctx: &RunContext, args: I) -> Result<LineStream>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        ctx.ensure_active()?;
        let args = collect_args(args);
        tracing::debug!(tool = self.name, args = %display_args(&args), dir = %ctx.dir().display(), "streaming");
        let cmd = self.command(ctx, &args)?;
        Ok(LineStream::spawn(self.name, cmd, ctx.cancel_token().clone()))
    }

    fn capture(&self, ctx: &RunContext, args: Vec<OsString>, merge: bool) -> Result<Captured> {
        ctx.ensure_active()?;
        tracing::debug!(tool = self.name, args = %display_args(&args), dir = %ctx.dir().display(), "running");

        let (reader, writer) = io::pipe().map_err(|source| self.spawn_error(source))?;
        let mut child = {
            let mut cmd = self.command(ctx, &args)?;
            let stderr = if merge {
                Stdio::from(writer.try_clone().map_err(|source| self.spawn_error(source))?)
            } else {
                Stdio::inherit()
            };
            cmd.stdout(writer).stderr(stderr);
            cmd.spawn().map_err(|source| self.spawn_error(source))?
            // `cmd` drops here, closing our copies of the write end.
        };

        let collector = std::thread::spawn(move || read_all(reader));
        let status = supervise(&mut child, ctx.cancel_token())
            .map_err(|source| self.output_error(source))?;
        let Some(status) = status else {
            tracing::debug!(tool = self.name, "cancelled, child killed");
            return Err(Error::Cancelled);
        };
        let bytes = collector
            .join()
            .unwrap_or_else(|_| Err(io::Error::other("output reader panicked")))
            .map_err(|source| self.output_error(source))?;
        ctx.ensure_active()?;

        tracing::trace!(tool = self.name, %status, bytes = bytes.len(), "finished");

        Ok(Captured {
            text: String::from_utf8_lossy(&bytes).trim().to_string(),
            success: status.success(),
        })
    }

    fn output_error(&self, source: io::Error) -> Error {
        Error::Output {
            tool: self.name.to_string(),
            source,
        }
    }

    fn spawn_error(&self, source: io::Error) -> Error {
        Error::Spawn {
            tool: self.name.to_string(),
            source,
        }
    }
}

fn read_all(mut reader: PipeReader) -> io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}

fn locate(program: &str, search: &SearchPath) -> std::result::Result<PathBuf, String> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let found = if search.dirs().is_empty() {
        which::which_in(program, std::env::var_os(names::PATH), cwd)
    } else {
        which::which_in(program, Some(search.to_os_string()), cwd)
    };
    found.map_err(|e| format!("{program}: {e}"))
}

fn collect_args<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    args.into_iter().map(|a| a.as_ref().to_os_string()).collect()
}

fn display_args(args: &[OsString]) -> String {
    args.iter()
        .map(|a| a.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "tool_tests.rs"]
mod tests;
