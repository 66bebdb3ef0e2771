// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plain console specs
//!
//! Both streams render as text to stdout, with progress grouped per operation.

use crate::prelude::*;

const BUILD: &[&str] = &[
    r#"{"kind":"log","severity":"lifecycle","text":"Starting build"}"#,
    r#"{"kind":"log","severity":"info","text":"resolved 12 dependencies"}"#,
    r#"{"kind":"progress_start","operation_id":1,"description":"Task :compile"}"#,
    r#"{"kind":"progress","operation_id":1,"text":"compiling 3 files"}"#,
    r#"{"kind":"progress_complete","operation_id":1}"#,
    r#"{"kind":"log","severity":"error","text":"Build failed"}"#,
];

#[test]
fn plain_console_groups_progress_and_filters_by_level() {
    let temp = Project::empty();
    temp.logroute()
        .args(&["--console", "plain"])
        .stdin(&script(BUILD))
        .passes()
        .stdout_eq("Starting build\n> Task :compile\ncompiling 3 files\nBuild failed\n")
        .stderr_eq("");
}

#[test]
fn level_flag_lowers_the_threshold() {
    let temp = Project::empty();
    temp.logroute()
        .args(&["--console", "plain", "--level", "info"])
        .stdin(&script(BUILD))
        .passes()
        .stdout_has("resolved 12 dependencies");
}

#[test]
fn level_change_events_apply_to_later_lines() {
    let temp = Project::empty();
    temp.logroute()
        .args(&["--console", "plain"])
        .stdin(&script(&[
            r#"{"kind":"log","severity":"debug","text":"before"}"#,
            r#"{"kind":"level_change","severity":"debug"}"#,
            r#"{"kind":"log","severity":"debug","text":"after"}"#,
        ]))
        .passes()
        .stdout_eq("after\n");
}

#[test]
fn events_can_be_read_from_a_file() {
    let temp = Project::empty();
    temp.file("build.jsonl", &script(BUILD));
    temp.logroute()
        .args(&["--console", "plain", "build.jsonl"])
        .passes()
        .stdout_has("> Task :compile\n");
}

#[test]
fn config_file_selects_level_and_console() {
    let temp = Project::empty();
    temp.file(
        "logroute.toml",
        "level = \"quiet\"\nthrottle_interval = \"20ms\"\nconsole = \"plain\"\n",
    );
    temp.logroute()
        .args(&["--config", "logroute.toml"])
        .stdin(&script(BUILD))
        .passes()
        .stdout_eq("> Task :compile\ncompiling 3 files\nBuild failed\n");
}

#[test]
fn piped_output_defaults_to_plain() {
    let temp = Project::empty();
    temp.logroute()
        .stdin(&script(BUILD))
        .passes()
        .stdout_has("Starting build\n")
        .stdout_lacks("\x1b[");
}

#[test]
fn prompts_are_written_without_a_newline() {
    let temp = Project::empty();
    temp.logroute()
        .args(&["--console", "plain"])
        .stdin(&script(&[
            r#"{"kind":"prompt_request","prompt":"Continue? "}"#,
            r#"{"kind":"prompt_resume"}"#,
            r#"{"kind":"log","severity":"warn","text":"resumed"}"#,
        ]))
        .passes()
        .stdout_eq("Continue? resumed\n");
}
