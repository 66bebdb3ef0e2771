// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use logroute_core::{
    FakeClock, MemoryStream, OperationId, OutputEvent, RecordingDestination, RecordingListener,
    Severity,
};
use similar_asserts::assert_eq;

fn ctx() -> PipelineContext<FakeClock> {
    PipelineContext::new(FakeClock::new(), Duration::from_millis(100)).without_ticker()
}

#[test]
fn plain_mode_throttles_then_filters_then_groups() {
    assert_eq!(
        stages_for(ConsoleMode::Plain),
        vec![
            Stage::Throttle,
            Stage::LevelFilter,
            Stage::Grouping { verbose: true }
        ]
    );
}

#[test]
fn rich_mode_inserts_feature_stages_between_throttle_and_filter() {
    assert_eq!(
        stages_for(ConsoleMode::Rich { verbose: false }),
        vec![
            Stage::Throttle,
            Stage::UserInput,
            Stage::StatusBar,
            Stage::WorkInProgress,
            Stage::LevelFilter,
            Stage::Grouping { verbose: false },
        ]
    );
    assert_eq!(
        stages_for(ConsoleMode::Rich { verbose: true }).last(),
        Some(&Stage::Grouping { verbose: true })
    );
}

#[test]
fn default_mode_has_no_throttle() {
    let stages = stages_for(ConsoleMode::Default);
    assert!(!stages.contains(&Stage::Throttle));
    assert!(stages.contains(&Stage::LevelFilter));
}

#[test]
fn rich_stages_require_a_console() {
    let result = build_pipeline(
        &[Stage::StatusBar],
        Box::new(RecordingDestination::new()),
        &ctx(),
    );
    assert!(matches!(
        result,
        Err(ComposeError::MissingConsole(Stage::StatusBar))
    ));
}

#[test]
fn built_pipeline_applies_stages_in_order() {
    let sink = RecordingDestination::new();
    let mut pipeline = build_pipeline(
        &[Stage::LevelFilter, Stage::Grouping { verbose: true }],
        Box::new(sink.clone()),
        &ctx(),
    )
    .unwrap();

    pipeline
        .on_output(&OutputEvent::log(Severity::Debug, "filtered"))
        .unwrap();
    pipeline
        .on_output(&OutputEvent::ProgressStart {
            operation_id: OperationId(1),
            description: "op".into(),
        })
        .unwrap();
    pipeline
        .on_output(&OutputEvent::ProgressComplete {
            operation_id: OperationId(1),
        })
        .unwrap();

    assert!(sink.texts().is_empty());
    assert_eq!(
        sink.count(|e| matches!(e, OutputEvent::Grouped(_))),
        1
    );
}

#[test]
fn default_pipeline_splits_streams_across_listener_sets() {
    let out = RecordingListener::new();
    let err = RecordingListener::new();
    let stdout = ListenerSet::new();
    let stderr = ListenerSet::new();
    stdout.add(Box::new(out.clone()));
    stderr.add(Box::new(err.clone()));

    let mut pipeline = default_pipeline(stdout, stderr, &ctx()).unwrap();
    pipeline
        .on_output(&OutputEvent::log(Severity::Lifecycle, "progress"))
        .unwrap();
    pipeline
        .on_output(&OutputEvent::log(Severity::Error, "failure"))
        .unwrap();

    assert_eq!(out.contents(), "progress\n");
    assert_eq!(err.contents(), "failure\n");
}

#[test]
fn plain_pipeline_renders_after_flush() {
    let memory = MemoryStream::new();
    let mut pipeline = plain_pipeline(SharedStream::new(memory.clone()), &ctx()).unwrap();

    for event in [
        OutputEvent::level_change(Severity::Lifecycle),
        OutputEvent::log(Severity::Info, "hidden"),
        OutputEvent::log(Severity::Warn, "shown"),
        OutputEvent::ProgressStart {
            operation_id: OperationId(4),
            description: "Task :jar".into(),
        },
        OutputEvent::Progress {
            operation_id: OperationId(4),
            text: "packing".into(),
        },
        OutputEvent::ProgressComplete {
            operation_id: OperationId(4),
        },
    ] {
        pipeline.on_output(&event).unwrap();
    }
    assert_eq!(memory.contents(), "");

    pipeline.on_output(&OutputEvent::Flush).unwrap();
    assert_eq!(memory.contents(), "shown\n> Task :jar\npacking\n");
}

#[test]
fn rich_pipeline_writes_build_output_and_live_area() {
    let memory = MemoryStream::new();
    let console = RichConsole::new(SharedStream::new(memory.clone()));
    let mut pipeline = rich_pipeline(console.clone(), false, &ctx()).unwrap();

    pipeline
        .on_output(&OutputEvent::ProgressStart {
            operation_id: OperationId(1),
            description: "Task :test".into(),
        })
        .unwrap();
    pipeline
        .on_output(&OutputEvent::log(Severity::Warn, "flaky"))
        .unwrap();
    pipeline.on_output(&OutputEvent::Flush).unwrap();

    assert_eq!(console.work_in_progress(), vec!["> Task :test".to_string()]);
    assert_eq!(
        memory.contents(),
        "flaky\n<-------------> 0% EXECUTING [0s]\n> Task :test\n"
    );
}
