// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rich console specs

use crate::prelude::*;

#[test]
fn rich_console_draws_status_and_work_in_progress() {
    let temp = Project::empty();
    let run = temp
        .logroute()
        .args(&["--console", "rich"])
        .stdin(&script(&[
            r#"{"kind":"progress_start","operation_id":1,"description":"Task :test"}"#,
            r#"{"kind":"flush"}"#,
            r#"{"kind":"log","severity":"warn","text":"flaky test"}"#,
            r#"{"kind":"progress_complete","operation_id":1}"#,
        ]))
        .passes()
        .stdout_has("EXECUTING")
        .stdout_has("> Task :test\n")
        .stdout_has("flaky test\n");

    // The live area is erased before the build output continues
    assert!(run.stdout().contains("\x1b[1A\x1b[2K"));
}

#[test]
fn verbose_console_keeps_every_progress_line() {
    let temp = Project::empty();
    temp.logroute()
        .args(&["--console", "verbose"])
        .stdin(&script(&[
            r#"{"kind":"progress_start","operation_id":2,"description":"Task :jar"}"#,
            r#"{"kind":"progress","operation_id":2,"text":"first"}"#,
            r#"{"kind":"progress","operation_id":2,"text":"second"}"#,
            r#"{"kind":"progress_complete","operation_id":2}"#,
        ]))
        .passes()
        .stdout_has("> Task :jar\nfirst\nsecond\n");
}

#[test]
fn summary_console_keeps_only_the_latest_progress_line() {
    let temp = Project::empty();
    temp.logroute()
        .args(&["--console", "rich"])
        .stdin(&script(&[
            r#"{"kind":"progress_start","operation_id":2,"description":"Task :jar"}"#,
            r#"{"kind":"progress","operation_id":2,"text":"first"}"#,
            r#"{"kind":"progress","operation_id":2,"text":"second"}"#,
            r#"{"kind":"progress_complete","operation_id":2}"#,
        ]))
        .passes()
        .stdout_has("> Task :jar\nsecond\n")
        .stdout_lacks("first\n");
}
