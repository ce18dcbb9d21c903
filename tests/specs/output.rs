// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Presentation: line format and color.

use crate::prelude::*;

#[test]
fn lines_have_context_prefix() {
    FakeRepo::new()
        .on_branch("staging")
        .cmd()
        .assert()
        .stderr(predicates::str::is_match("(?m)^gogate: branch name: do not commit to staging$").unwrap());
}

#[test]
fn no_color_when_piped() {
    FakeRepo::new()
        .cmd()
        .assert()
        .success()
        .stderr(predicates::str::contains("\x1b[").not());
}

#[test]
fn color_flag_forces_color() {
    FakeRepo::new()
        .cmd()
        .arg("--color")
        .assert()
        .success()
        .stderr(predicates::str::contains("\x1b["));
}

#[test]
fn color_env_forces_color() {
    FakeRepo::new()
        .cmd()
        .env("COLOR", "1")
        .assert()
        .success()
        .stderr(predicates::str::contains("\x1b["));
}

#[test]
fn no_color_env_wins_over_color_env() {
    FakeRepo::new()
        .cmd()
        .env("COLOR", "1")
        .env("NO_COLOR", "")
        .assert()
        .success()
        .stderr(predicates::str::contains("\x1b[").not());
}

#[test]
fn no_color_flag_wins_over_color_flag() {
    FakeRepo::new()
        .cmd()
        .args(["--color", "--no-color"])
        .assert()
        .success()
        .stderr(predicates::str::contains("\x1b[").not());
}

#[test]
fn verbose_shows_steps() {
    FakeRepo::new()
        .cmd()
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicates::str::contains("gogate: in git repo"))
        .stderr(predicates::str::contains("gogate: found go version: v1.21.0"))
        .stderr(predicates::str::contains("gogate: using go.mod: go.mod"));
}
