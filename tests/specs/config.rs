// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! gogate.toml handling.

use crate::prelude::*;

#[test]
fn configured_protected_branches_replace_defaults() {
    let repo = FakeRepo::new()
        .on_branch("release")
        .untracked("gogate.toml", "version = 1\n[branch]\nprotected = [\"release\"]\n");
    repo.cmd()
        .assert()
        .code(1)
        .stderr(predicates::str::contains("do not commit to release"));

    let repo = FakeRepo::new()
        .on_branch("staging")
        .untracked("gogate.toml", "version = 1\n[branch]\nprotected = [\"release\"]\n");
    repo.cmd().assert().success();
}

#[test]
fn configured_exemptions() {
    FakeRepo::new()
        .file("logo.svg", "<svg/>")
        .untracked("gogate.toml", "version = 1\n[eol]\nexempt = [\"svg\"]\n")
        .cmd()
        .assert()
        .success();
}

#[test]
fn unknown_keys_warn() {
    FakeRepo::new()
        .untracked("gogate.toml", "version = 1\nbogus = true\n")
        .cmd()
        .assert()
        .success()
        .stderr(predicates::str::contains("unrecognized field `bogus` (ignored)"));
}

#[test]
fn unsupported_version_is_fatal() {
    FakeRepo::new()
        .untracked("gogate.toml", "version = 2\n")
        .cmd()
        .assert()
        .code(1)
        .stderr(predicates::str::contains("unsupported config version 2"));
}

#[test]
fn explicit_config_must_exist() {
    FakeRepo::new()
        .cmd()
        .args(["-C", "missing.toml"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("config file not found"));
}

#[test]
fn environment_overrides_configured_tool() {
    FakeRepo::new()
        .untracked("gogate.toml", "version = 1\n[tools]\ngo = \"/nonexistent/go\"\n")
        .cmd()
        .assert()
        .success();
}

#[test]
fn configured_tool_is_used() {
    let repo = FakeRepo::new()
        .untracked("gogate.toml", "version = 1\n[tools]\ngofmt = \"/nonexistent/gofmt\"\n");
    repo.cmd()
        .env_remove("GOFMT")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("gogate: gofmt: executable not found"));
}
