// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command line surface.

use crate::prelude::*;

#[test]
fn help_exits_successfully() {
    gogate_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage: gogate"))
        .stdout(predicates::str::contains("--no-godoc"));
}

#[test]
fn version_flag_prints_version() {
    gogate_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::starts_with("gogate "));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    gogate_cmd()
        .arg("--unknown-flag")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unexpected argument"));
}

#[test]
fn noise_flags_are_exclusive() {
    gogate_cmd().args(["--quiet", "--verbose"]).assert().code(2);
}

#[test]
fn outside_a_repository_passes_silently() {
    FakeRepo::new()
        .outside_repo()
        .cmd()
        .assert()
        .success()
        .stderr(predicates::str::is_empty());
}

#[test]
fn outside_a_repository_says_so_when_verbose() {
    FakeRepo::new()
        .outside_repo()
        .cmd()
        .arg("-v")
        .assert()
        .success()
        .stderr(predicates::str::contains("gogate: not in git repo"));
}
