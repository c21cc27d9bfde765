//! Integration tests for the blink controller driven by a host frame clock
//!
//! These tests verify that:
//! - Visibility follows the cycle at realistic frame rates
//! - Typing input toggles between solid and blinking without restarts
//! - Opacity fades track the visibility flag

use caret_animation::{BlinkController, BlinkMode, BlinkTiming, Easing};
use std::sync::{Arc, Mutex};

const FRAME_MS: f32 = 1000.0 / 60.0;

/// Test that visibility matches the cycle table frame by frame
#[test]
fn test_visibility_follows_cycle_at_60fps() {
    let timing = BlinkTiming::modern();
    let mut blink = BlinkController::new();
    blink.observe_typing(false);

    let mut now = 0.0_f32;
    for _ in 0..180 {
        blink.tick(FRAME_MS);
        now += FRAME_MS;
        assert_eq!(blink.visible(), timing.visible_at(now), "at {now}ms");
    }
}

/// Test that opacity only settles at the extremes when the fades complete
#[test]
fn test_opacity_tracks_visibility() {
    let mut blink = BlinkController::new().with_easing(Easing::Linear);
    blink.set_mode(BlinkMode::Blinking);

    let mut min_seen = 1.0_f32;
    for _ in 0..1032 {
        blink.tick(1.0);
        min_seen = min_seen.min(blink.opacity());
        assert!((0.0..=1.0).contains(&blink.opacity()));
    }

    assert_eq!(min_seen, 0.0);
    assert!(blink.visible());
    assert_eq!(blink.opacity(), 1.0);
}

/// Test a host that reports typing every frame while keys are held
#[test]
fn test_repeated_typing_reports() {
    let changes = Arc::new(Mutex::new(0));
    let counter = changes.clone();

    let mut blink = BlinkController::new();
    blink.subscribe(move |_| *counter.lock().unwrap() += 1);

    for frame in 0..120 {
        let typing = (40..90).contains(&frame);
        blink.observe_typing(typing);
        blink.tick(FRAME_MS);
        if typing {
            assert!(blink.visible());
            assert!(!blink.is_timer_active());
        }
    }

    // Blinking, hidden at 533ms, solid at frame 40, blinking at frame 90
    assert_eq!(*changes.lock().unwrap(), 4);
    assert_eq!(blink.mode(), Some(BlinkMode::Blinking));
}

/// Test that a long stall in the frame clock does not replay missed cycles
#[test]
fn test_stalled_clock_resumes_in_phase() {
    let timing = BlinkTiming::modern();
    let mut blink = BlinkController::new();
    blink.set_mode(BlinkMode::Blinking);

    blink.tick(timing.period_ms() * 50.0 + 600.0);
    assert!(!blink.visible());

    blink.tick(400.0);
    assert!(blink.visible());
}

/// Test the remount sequence: stop, forget the mode, observe again
#[test]
fn test_reset_then_observe() {
    let mut blink = BlinkController::new();
    blink.observe_typing(true);
    blink.reset();

    assert_eq!(blink.mode(), None);
    assert!(blink.observe_typing(true));
    assert_eq!(blink.mode(), Some(BlinkMode::Solid));
    assert!(blink.visible());
}
