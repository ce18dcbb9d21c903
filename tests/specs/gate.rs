// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end gate runs against fake tools.

use crate::prelude::*;

#[test]
fn clean_module_passes() {
    let repo = FakeRepo::new();
    repo.cmd()
        .assert()
        .success()
        .stderr(predicates::str::contains("gogate: go test: ok"));

    assert_eq!(
        repo.go_calls(),
        ["version", "mod tidy", "list ./...", "test ./."]
    );
}

#[test]
fn failing_test_blocks() {
    FakeRepo::new()
        .go_test_prints(&["--- FAIL: TestMain (0.00s)", "FAIL", "FAIL\texample.com/m\t0.01s"])
        .cmd()
        .assert()
        .code(1)
        .stderr(predicates::str::contains("gogate: go test: --- FAIL: TestMain"));
}

#[test]
fn cached_results_pass() {
    FakeRepo::new()
        .go_test_prints(&["ok  \texample.com/m\t(cached)"])
        .cmd()
        .assert()
        .success();
}

#[test]
fn library_without_tests_passes() {
    FakeRepo::new()
        .go_test_prints(&["?   \texample.com/m\t[no test files]"])
        .cmd()
        .assert()
        .success()
        .stderr(predicates::str::contains("[no test files]"));
}

#[test]
fn unrecognized_test_output_blocks() {
    FakeRepo::new()
        .go_test_prints(&["something unexpected"])
        .cmd()
        .assert()
        .code(1);
}

#[test]
fn no_cache_forces_test_run() {
    let repo = FakeRepo::new();
    repo.cmd().arg("--no-cache").assert().success();
    assert!(repo.go_calls().contains(&"test -count=1 ./.".to_string()));
}

#[test]
fn no_cache_from_environment() {
    let repo = FakeRepo::new();
    repo.cmd().env("GOGATE_NO_CACHE", "1").assert().success();
    assert!(repo.go_calls().contains(&"test -count=1 ./.".to_string()));
}

#[test]
fn unformatted_file_blocks() {
    FakeRepo::new()
        .gofmt_flags(&["main.go"])
        .cmd()
        .assert()
        .code(1)
        .stderr(predicates::str::contains("gogate: gofmt: main.go"));
}

#[test]
fn lint_complaints_block() {
    FakeRepo::new()
        .golint_prints("main.go:1:1: don't use an underscore in package name")
        .cmd()
        .assert()
        .code(1)
        .stderr(predicates::str::contains("gogate: golint: ."));
}

#[test]
fn no_lint_skips_golint() {
    FakeRepo::new()
        .golint_prints("main.go:1:1: don't use an underscore in package name")
        .cmd()
        .arg("--no-lint")
        .assert()
        .success();
}

#[test]
fn no_godoc_hides_comment_complaints() {
    FakeRepo::new()
        .golint_prints("main.go:3:1: exported function Run should have comment or be unexported")
        .cmd()
        .arg("--no-godoc")
        .assert()
        .success();
}

#[test]
fn protected_branch_blocks() {
    FakeRepo::new()
        .on_branch("staging")
        .cmd()
        .assert()
        .code(1)
        .stderr(predicates::str::contains(
            "gogate: branch name: do not commit to staging",
        ));
}

#[test]
fn head_branch_blocks() {
    FakeRepo::new().on_branch("main").cmd().assert().code(1);
}

#[test]
fn missing_final_newline_blocks() {
    FakeRepo::new()
        .file("notes.txt", "no newline")
        .cmd()
        .assert()
        .code(1)
        .stderr(predicates::str::contains(
            "gogate: file doesn't end with EOL: notes.txt",
        ));
}

#[test]
fn empty_and_exempt_files_pass() {
    FakeRepo::new()
        .file("empty.txt", "")
        .file("lib/tool.jar", "PK")
        .file("LICENSE", "MIT")
        .cmd()
        .assert()
        .success();
}

#[test]
fn missing_go_mod_warns_and_checks_gopath_style() {
    let repo = FakeRepo::empty().file("main.go", "package main\n");
    repo.cmd()
        .assert()
        .success()
        .stderr(predicates::str::contains(
            "gogate: could not find any checked in go.mod files",
        ));

    assert_eq!(
        repo.go_calls(),
        ["version", "list ./...", "test ./example.com/m"]
    );
}

#[test]
fn missing_tool_is_fatal() {
    FakeRepo::new()
        .cmd()
        .env("GO", "/nonexistent/go")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("gogate: go: executable not found"));
}

#[test]
fn quiet_prints_nothing_but_still_blocks() {
    FakeRepo::new()
        .on_branch("production")
        .cmd()
        .arg("--quiet")
        .assert()
        .code(1)
        .stderr(predicates::str::is_empty());
}

#[test]
fn short_prints_only_errors() {
    FakeRepo::new()
        .on_branch("production")
        .cmd()
        .arg("--short")
        .assert()
        .code(1)
        .stderr(
            predicates::str::contains("do not commit to production")
                .and(predicates::str::contains("go test").not()),
        );
}

#[test]
fn interrupt_kills_go_test_and_exits_1() {
    use std::process::Stdio;
    use std::time::{Duration, Instant};

    let repo = FakeRepo::new().go_test_runs("echo started; sleep 3; touch finished");
    let mut child = repo
        .cmd()
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let deadline = Instant::now() + Duration::from_secs(10);
    while !repo.go_calls().iter().any(|call| call.starts_with("test")) {
        assert!(Instant::now() < deadline, "go test never started");
        std::thread::sleep(Duration::from_millis(20));
    }
    std::thread::sleep(Duration::from_millis(100));

    let interrupted = Instant::now();
    let status = std::process::Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());

    let output = child.wait_with_output().unwrap();
    assert!(interrupted.elapsed() < Duration::from_secs(2));
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("gogate: cancelled"));

    std::thread::sleep(Duration::from_secs(3));
    assert!(!repo.work().join("finished").exists());
}
