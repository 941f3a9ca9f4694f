#![allow(clippy::float_cmp)]

use super::*;

// 100 fps gives an exact 10 ms interval, keeping float arithmetic exact.
fn running_at(now: f64) -> FrameTimer {
    let mut timer = FrameTimer::new(100.0);
    assert!(timer.start(now));
    timer
}

#[test]
fn new_timer_is_stopped() {
    let timer = FrameTimer::new(60.0);
    assert!(!timer.is_running());
}

#[test]
fn interval_is_ms_per_frame() {
    assert_eq!(FrameTimer::new(100.0).interval_ms(), 10.0);
    assert_eq!(FrameTimer::new(50.0).interval_ms(), 20.0);
}

#[test]
fn start_sets_baseline_and_runs() {
    let timer = running_at(1_000.0);
    assert!(timer.is_running());
    assert_eq!(timer.then_ms(), 1_000.0);
    assert_eq!(timer.elapsed_ms(), 0.0);
}

#[test]
fn second_start_is_noop() {
    let mut timer = running_at(1_000.0);
    assert!(!timer.start(5_000.0));
    assert_eq!(timer.then_ms(), 1_000.0);
}

#[test]
fn stopped_timer_never_ticks() {
    let mut timer = FrameTimer::new(100.0);
    assert!(!timer.poll(1_000.0));
    assert!(!timer.poll(1_000_000.0));
}

#[test]
fn readings_below_interval_do_not_tick() {
    let mut timer = running_at(0.0);
    for now in [1.0, 4.0, 7.5, 9.0, 9.999] {
        assert!(!timer.poll(now), "ticked at {now}");
    }
    assert_eq!(timer.then_ms(), 0.0);
}

#[test]
fn crossing_interval_ticks_once() {
    let mut timer = running_at(0.0);
    assert!(!timer.poll(6.0));
    assert!(timer.poll(12.0));
    // Baseline snapped to the 10 ms boundary, so 12 -> 19 is not yet due.
    assert!(!timer.poll(19.0));
    assert!(timer.poll(20.0));
}

#[test]
fn exact_interval_ticks() {
    let mut timer = running_at(0.0);
    assert!(timer.poll(10.0));
    assert_eq!(timer.then_ms(), 10.0);
}

#[test]
fn baseline_advances_by_interval_multiple_not_raw_elapsed() {
    let mut timer = running_at(0.0);
    assert!(timer.poll(13.0));
    assert_eq!(timer.elapsed_ms(), 13.0);
    assert_eq!(timer.then_ms(), 10.0);
}

#[test]
fn long_stall_catches_up_with_single_tick() {
    let mut timer = running_at(0.0);
    assert!(timer.poll(47.0));
    assert_eq!(timer.then_ms(), 40.0);
    assert!(!timer.poll(49.0));
    assert!(timer.poll(50.0));
}

#[test]
fn fps_is_none_before_first_poll() {
    assert_eq!(running_at(0.0).fps(), None);
}

#[test]
fn fps_truncates_measured_rate() {
    let mut timer = running_at(0.0);
    assert!(timer.poll(16.0));
    assert_eq!(timer.fps(), Some(62));
}
