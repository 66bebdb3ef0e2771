// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw stream specs
//!
//! Without a console, error-level logs go to stderr and everything else to stdout.

use crate::prelude::*;

#[test]
fn raw_mode_splits_stdout_and_stderr() {
    let temp = Project::empty();
    temp.logroute()
        .args(&["--raw"])
        .stdin(&script(&[
            r#"{"kind":"log","severity":"warn","text":"low disk"}"#,
            r#"{"kind":"log","severity":"error","text":"compilation failed"}"#,
            r#"{"kind":"progress_start","operation_id":9,"description":"Task :lint"}"#,
            r#"{"kind":"progress_complete","operation_id":9}"#,
        ]))
        .passes()
        .stdout_eq("low disk\n> Task :lint\n")
        .stderr_eq("compilation failed\n");
}

#[test]
fn raw_mode_respects_quiet_level() {
    let temp = Project::empty();
    temp.logroute()
        .args(&["--raw", "--level", "quiet"])
        .stdin(&script(&[
            r#"{"kind":"log","severity":"warn","text":"hidden"}"#,
            r#"{"kind":"log","severity":"quiet","text":"shown"}"#,
        ]))
        .passes()
        .stdout_eq("shown\n");
}

#[test]
fn debug_logging_goes_to_stderr_only() {
    let temp = Project::empty();
    temp.logroute()
        .env("RUST_LOG", "debug")
        .args(&["--raw"])
        .stdin(&script(&[r#"{"kind":"log","severity":"warn","text":"routed"}"#]))
        .passes()
        .stdout_eq("routed\n")
        .stderr_has("attached system stdout and stderr");
}
