// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use logroute_core::{MemoryStream, RecordingDestination, SharedStream};

fn stage() -> (WorkInProgress<RecordingDestination>, RichConsole, RecordingDestination) {
    let console = RichConsole::new(SharedStream::new(MemoryStream::new()));
    let sink = RecordingDestination::new();
    (
        WorkInProgress::new(sink.clone(), console.clone()),
        console,
        sink,
    )
}

#[test]
fn tracks_running_operations_with_latest_status() {
    let (mut stage, console, sink) = stage();

    for event in [
        OutputEvent::ProgressStart {
            operation_id: OperationId(1),
            description: "Task :compile".into(),
        },
        OutputEvent::ProgressStart {
            operation_id: OperationId(2),
            description: "Task :test".into(),
        },
        OutputEvent::Progress {
            operation_id: OperationId(2),
            text: "3 tests completed".into(),
        },
    ] {
        stage.on_output(&event).unwrap();
    }

    assert_eq!(
        console.work_in_progress(),
        vec![
            "> Task :compile".to_string(),
            "> Task :test > 3 tests completed".to_string()
        ]
    );
    assert_eq!(sink.events().len(), 3);
}

#[test]
fn completed_operations_leave_the_panel() {
    let (mut stage, console, _sink) = stage();

    stage
        .on_output(&OutputEvent::ProgressStart {
            operation_id: OperationId(1),
            description: "only".into(),
        })
        .unwrap();
    stage
        .on_output(&OutputEvent::ProgressComplete {
            operation_id: OperationId(1),
        })
        .unwrap();

    assert!(console.work_in_progress().is_empty());
}
