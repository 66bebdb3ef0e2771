// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help output specs

use crate::prelude::*;

#[test]
fn help_lists_every_option() {
    let temp = Project::empty();
    temp.logroute()
        .args(&["--help"])
        .passes()
        .stdout_has("--config <FILE>")
        .stdout_has("--console <MODE>")
        .stdout_has("--level <LEVEL>")
        .stdout_has("--raw")
        .stdout_has("[EVENTS]");
}

#[test]
fn version_is_printed() {
    let temp = Project::empty();
    temp.logroute()
        .args(&["--version"])
        .passes()
        .stdout_has("logroute 0.1.0");
}
