// Host-side tests for the render-loop state machine.
// The main crate is wasm-only, so we mount the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/lifecycle.rs"]
mod lifecycle;

use lifecycle::*;

fn running_state() -> LoopState {
    let mut s = LoopState::new();
    let fx = s.start();
    assert!(fx.request_frame);
    s.frame_scheduled(1);
    s
}

#[test]
fn start_requests_the_first_frame() {
    let mut s = LoopState::new();
    assert_eq!(s.phase(), Phase::Stopped);
    let fx = s.start();
    assert!(fx.request_frame);
    assert_eq!(s.phase(), Phase::Running);
}

#[test]
fn start_is_a_noop_once_running() {
    let mut s = running_state();
    assert_eq!(s.start(), Effects::default());
}

#[test]
fn start_while_hidden_begins_paused() {
    let mut s = LoopState::new();
    let _ = s.visibility_changed(true);
    let fx = s.start();
    assert!(!fx.request_frame);
    assert_eq!(s.phase(), Phase::Paused);

    // becoming visible schedules the first frame
    let fx = s.visibility_changed(false);
    assert!(fx.request_frame);
    assert_eq!(s.phase(), Phase::Running);
}

#[test]
fn visibility_reported_before_start_has_no_effects() {
    // The wiring samples document.hidden and reports it ahead of start();
    // while Stopped that report must only record the flag.
    let mut s = LoopState::new();
    assert_eq!(s.visibility_changed(true), Effects::default());
    assert_eq!(s.phase(), Phase::Stopped);

    let fx = s.start();
    assert!(!fx.request_frame);
    assert_eq!(s.frame_handle(), None);
    assert_eq!(s.phase(), Phase::Paused);
}

#[test]
fn hiding_while_running_pauses_and_cancels_the_frame() {
    let mut s = running_state();
    let fx = s.visibility_changed(true);
    assert_eq!(s.phase(), Phase::Paused);
    assert_eq!(fx.cancel_frame, Some(1));
    assert_eq!(s.frame_handle(), None);
    assert!(!fx.request_frame);
}

#[test]
fn visible_while_paused_resumes_and_schedules() {
    let mut s = running_state();
    let _ = s.visibility_changed(true);
    let fx = s.visibility_changed(false);
    assert_eq!(s.phase(), Phase::Running);
    assert!(fx.request_frame);
}

#[test]
fn frame_began_consumes_the_handle_and_runs_only_while_running() {
    let mut s = running_state();
    assert_eq!(s.frame_handle(), Some(1));
    assert!(s.frame_began());
    assert_eq!(s.frame_handle(), None);

    let _ = s.visibility_changed(true);
    assert!(!s.frame_began());
}

#[test]
fn resize_pauses_and_restarts_the_settle_timer() {
    let mut s = running_state();
    let fx = s.resize_observed();
    assert_eq!(s.phase(), Phase::Paused);
    assert_eq!(fx.cancel_frame, Some(1));
    assert_eq!(fx.cancel_settle, None);
    assert!(fx.schedule_settle);
    s.settle_scheduled(10);

    let fx = s.resize_observed();
    assert_eq!(fx.cancel_settle, Some(10));
    assert!(fx.schedule_settle);
}

#[test]
fn resize_storm_reprovisions_exactly_once() {
    let mut s = running_state();
    let mut reprovisions = 0;
    let mut timer = 100;
    for _ in 0..10 {
        let fx = s.resize_observed();
        assert!(fx.schedule_settle);
        assert!(!fx.reprovision);
        s.settle_scheduled(timer);
        timer += 1;
    }
    // only the surviving timer fires
    let fx = s.settle_fired();
    if fx.reprovision {
        reprovisions += 1;
    }
    assert!(fx.request_frame);
    assert_eq!(reprovisions, 1);
    assert_eq!(s.phase(), Phase::Running);

    // a stray late fire after settling does nothing
    assert_eq!(s.settle_fired(), Effects::default());
}

#[test]
fn settle_while_hidden_reprovisions_without_scheduling() {
    let mut s = running_state();
    let _ = s.visibility_changed(true);
    let _ = s.resize_observed();
    let fx = s.settle_fired();
    assert!(fx.reprovision);
    assert!(!fx.request_frame);
    assert_eq!(s.phase(), Phase::Paused);

    let fx = s.visibility_changed(false);
    assert!(fx.request_frame);
}

#[test]
fn visible_during_settle_window_stays_paused_until_settled() {
    let mut s = running_state();
    let _ = s.resize_observed();
    let fx = s.visibility_changed(false);
    // already visible and still settling; nothing to do yet
    assert!(!fx.request_frame);
    assert_eq!(s.phase(), Phase::Paused);
    let fx = s.settle_fired();
    assert!(fx.reprovision && fx.request_frame);
}

#[test]
fn dispose_cancels_everything_and_is_idempotent() {
    let mut s = running_state();
    let _ = s.resize_observed();
    s.settle_scheduled(42);
    s.frame_scheduled(7);

    let fx = s.dispose();
    assert_eq!(fx.cancel_frame, Some(7));
    assert_eq!(fx.cancel_settle, Some(42));
    assert_eq!(s.phase(), Phase::Stopped);

    // second dispose: no error, no effects, still Stopped
    assert_eq!(s.dispose(), Effects::default());
    assert_eq!(s.phase(), Phase::Stopped);
    assert!(s.is_disposed());
}

#[test]
fn disposed_machine_ignores_all_events() {
    let mut s = running_state();
    let _ = s.dispose();
    assert_eq!(s.start(), Effects::default());
    assert_eq!(s.resize_observed(), Effects::default());
    assert_eq!(s.visibility_changed(false), Effects::default());
    assert_eq!(s.settle_fired(), Effects::default());
    assert!(!s.frame_began());
    assert_eq!(s.phase(), Phase::Stopped);
}

#[test]
fn never_double_schedules_a_frame() {
    let mut s = LoopState::new();
    let fx = s.start();
    assert!(fx.request_frame);
    s.frame_scheduled(1);

    // visibility noise while a frame is already in flight
    let fx = s.visibility_changed(false);
    assert!(!fx.request_frame);
    assert_eq!(s.frame_handle(), Some(1));
}
