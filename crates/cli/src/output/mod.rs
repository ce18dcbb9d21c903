// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Leveled, colorized reporting on stderr.
//!
//! Every line has the form `gogate: CONTEXT: MESSAGE`, or `gogate: MESSAGE`
//! when no context applies. Only the message is colored.

use std::io::Write;
use std::sync::Mutex;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::color::scheme;

const PREFIX: &str = "gogate: ";

/// Severity of a reported line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Verbose,
    /// Low-importance output, shown dimmed.
    Hide,
    Ok,
    Info,
    Notice,
    Warning,
    Error,
}

/// How much the reporter prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum NoiseLevel {
    /// Nothing at all.
    Quiet,
    /// Errors only.
    Short,
    /// Everything except verbose lines.
    #[default]
    Normal,
    /// Everything.
    Verbose,
}

impl NoiseLevel {
    /// Whether lines at `level` are printed.
    pub fn shows(self, level: Level) -> bool {
        let needed = match level {
            Level::Error => NoiseLevel::Short,
            Level::Verbose => NoiseLevel::Verbose,
            _ => NoiseLevel::Normal,
        };
        self >= needed
    }
}

/// Shared sink for user-facing lines.
///
/// Writes are serialized so a line is never interleaved with another.
/// Write failures are ignored: losing a report must not stop the gate.
pub struct Reporter {
    noise: NoiseLevel,
    out: Mutex<Box<dyn WriteColor + Send>>,
}

impl Reporter {
    /// Reporter writing to stderr.
    pub fn stderr(noise: NoiseLevel, choice: ColorChoice) -> Self {
        Self::new(noise, StandardStream::stderr(choice))
    }

    pub fn new(noise: NoiseLevel, writer: impl WriteColor + Send + 'static) -> Self {
        Self {
            noise,
            out: Mutex::new(Box::new(writer)),
        }
    }

    pub fn noise(&self) -> NoiseLevel {
        self.noise
    }

    /// Report `msg` under `context`.
    pub fn emit(&self, level: Level, context: &str, msg: &str) {
        self.write(level, Some(context), msg);
    }

    /// Report `msg` without a context.
    pub fn emit_bare(&self, level: Level, msg: &str) {
        self.write(level, None, msg);
    }

    pub fn verbose(&self, context: &str, msg: &str) {
        self.emit(Level::Verbose, context, msg);
    }

    pub fn hide(&self, context: &str, msg: &str) {
        self.emit(Level::Hide, context, msg);
    }

    pub fn ok(&self, context: &str, msg: &str) {
        self.emit(Level::Ok, context, msg);
    }

    pub fn info(&self, context: &str, msg: &str) {
        self.emit(Level::Info, context, msg);
    }

    pub fn notice(&self, context: &str, msg: &str) {
        self.emit(Level::Notice, context, msg);
    }

    pub fn warning(&self, context: &str, msg: &str) {
        self.emit(Level::Warning, context, msg);
    }

    pub fn error(&self, context: &str, msg: &str) {
        self.emit(Level::Error, context, msg);
    }

    fn write(&self, level: Level, context: Option<&str>, msg: &str) {
        if !self.noise.shows(level) {
            return;
        }
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        let _ = write_line(&mut **out, level, context, msg);
    }
}

fn write_line(
    out: &mut dyn WriteColor,
    level: Level,
    context: Option<&str>,
    msg: &str,
) -> std::io::Result<()> {
    write!(out, "{PREFIX}")?;
    if let Some(context) = context {
        write!(out, "{context}: ")?;
    }
    out.set_color(&scheme::level(level))?;
    write!(out, "{msg}")?;
    out.reset()?;
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
