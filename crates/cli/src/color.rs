// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `--no-color` flag → no color
//! 2. `--color` flag → use color
//! 3. NO_COLOR env var (any value) → no color
//! 4. COLOR env var (any value) → use color
//! 5. default: color only when stderr is a terminal

use std::io::IsTerminal;

use termcolor::ColorChoice;

use crate::env::names;

/// Resolve color choice from flags and environment variables.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any value
/// (including empty string) disables color.
pub fn resolve_color(force: bool, disable: bool) -> ColorChoice {
    if disable {
        return ColorChoice::Never;
    }
    if force {
        return ColorChoice::Always;
    }
    if std::env::var_os(names::NO_COLOR).is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os(names::COLOR).is_some() {
        return ColorChoice::Always;
    }
    if !std::io::stderr().is_terminal() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Color scheme for reported lines. Every colored message is bold.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    use crate::output::Level;

    fn bold(color: Color, intense: bool) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color)).set_intense(intense).set_bold(true);
        spec
    }

    /// Color for a message at the given level.
    pub fn level(level: Level) -> ColorSpec {
        match level {
            Level::Verbose => bold(Color::White, false),
            // Intense black renders as dark gray.
            Level::Hide => bold(Color::Black, true),
            Level::Ok => bold(Color::Green, true),
            Level::Info => bold(Color::Blue, true),
            Level::Notice => bold(Color::Cyan, true),
            Level::Warning => bold(Color::Yellow, true),
            Level::Error => bold(Color::Red, true),
        }
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
