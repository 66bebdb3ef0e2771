// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error reporting specs

use crate::prelude::*;

#[test]
fn malformed_line_fails_with_its_number_after_routing_earlier_events() {
    let temp = Project::empty();
    temp.logroute()
        .args(&["--console", "plain"])
        .stdin(&script(&[
            r#"{"kind":"log","severity":"warn","text":"first"}"#,
            r#"{"kind":"log","severity":"warn""#,
        ]))
        .fails()
        .stdout_eq("first\n")
        .stderr_has("invalid event on line 2");
}

#[test]
fn unknown_console_mode_is_rejected() {
    let temp = Project::empty();
    temp.logroute()
        .args(&["--console", "fancy"])
        .fails()
        .stderr_has("unknown console output: fancy");
}

#[test]
fn missing_events_file_is_reported() {
    let temp = Project::empty();
    let missing = temp.path().join("missing.jsonl");
    temp.logroute()
        .args(&[missing.to_str().unwrap()])
        .fails()
        .stderr_has("failed to open")
        .stderr_lacks("panicked");
}

#[test]
fn zero_throttle_interval_is_invalid() {
    let temp = Project::empty();
    temp.file("logroute.toml", "throttle_interval = \"0ms\"\n");
    temp.logroute()
        .args(&["--config", "logroute.toml"])
        .stdin("")
        .fails()
        .stderr_has("failed to load config")
        .stderr_has("throttle_interval must be greater than zero");
}
