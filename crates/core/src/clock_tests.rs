// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn system_clock_is_monotonic() {
    let clock = SystemClock;
    let start = clock.now();
    assert!(clock.now() >= start);
    assert!(clock.elapsed_since(start) < Duration::from_secs(60));
}

#[test]
fn fake_clock_moves_only_when_advanced() {
    let clock = FakeClock::new();
    let start = clock.now();
    assert_eq!(clock.elapsed_since(start), Duration::ZERO);

    clock.advance(Duration::from_millis(250));
    clock.advance(Duration::from_millis(50));

    assert_eq!(clock.elapsed_since(start), Duration::from_millis(300));
    assert_eq!(clock.elapsed(), Duration::from_millis(300));
}

#[test]
fn elapsed_since_a_later_instant_is_zero() {
    let clock = FakeClock::new();
    let later = clock.now() + Duration::from_secs(5);
    assert_eq!(clock.elapsed_since(later), Duration::ZERO);
}

#[test]
fn clones_share_the_offset() {
    let stage_clock = FakeClock::new();
    let test_clock = stage_clock.clone();
    let start = stage_clock.now();

    test_clock.advance(Duration::from_secs(30));

    assert_eq!(stage_clock.elapsed_since(start), Duration::from_secs(30));
}
