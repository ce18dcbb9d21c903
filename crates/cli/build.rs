// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build script that generates env var name constants for `env.rs`.

// A build script has nothing to recover to; failing loudly is enough.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest = Path::new(&out_dir).join("env_names.rs");

    let contents = r#"
/// Environment variable: disables color output (any value).
pub const NO_COLOR: &str = "NO_COLOR";
/// Environment variable: forces color output (any value).
pub const COLOR: &str = "COLOR";
/// Environment variable: configures tracing log filter.
pub const GOGATE_LOG: &str = "GOGATE_LOG";
/// Environment variable: overrides the git program.
pub const GIT: &str = "GIT";
/// Environment variable: overrides the go program.
pub const GO: &str = "GO";
/// Environment variable: overrides the gofmt program.
pub const GOFMT: &str = "GOFMT";
/// Environment variable: overrides the goimports program.
pub const GOIMPORTS: &str = "GOIMPORTS";
/// Environment variable: overrides the golint program.
pub const GOLINT: &str = "GOLINT";
/// Environment variable: go workspace root.
pub const GOPATH: &str = "GOPATH";
/// Environment variable: executable search path.
pub const PATH: &str = "PATH";
/// Environment variable: user home directory.
pub const HOME: &str = "HOME";
"#;

    fs::write(dest, contents).expect("failed to write env_names.rs");
}
