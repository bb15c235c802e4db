#![allow(clippy::float_cmp)]

use super::*;

fn slider_tracker() -> SwipeTracker {
    SwipeTracker::new(SwipeConfig { threshold_px: 40.0, slop_px: 0.0 })
}

fn lightbox_tracker() -> SwipeTracker {
    SwipeTracker::new(SwipeConfig { threshold_px: 50.0, slop_px: 10.0 })
}

fn swipe(tracker: &mut SwipeTracker, from: f64, to: f64) -> Option<Swipe> {
    tracker.touch_start(1, from);
    tracker.touch_move(1, to);
    tracker.touch_end()
}

// =============================================================
// classify
// =============================================================

#[test]
fn classify_below_threshold_is_none() {
    assert_eq!(classify(39.9, 40.0), None);
    assert_eq!(classify(-39.9, 40.0), None);
    assert_eq!(classify(0.0, 40.0), None);
}

#[test]
fn classify_at_threshold_counts() {
    assert_eq!(classify(40.0, 40.0), Some(Swipe::Right));
    assert_eq!(classify(-40.0, 40.0), Some(Swipe::Left));
}

#[test]
fn classify_far_past_threshold() {
    assert_eq!(classify(500.0, 40.0), Some(Swipe::Right));
    assert_eq!(classify(-500.0, 40.0), Some(Swipe::Left));
}

// =============================================================
// SwipeTracker
// =============================================================

#[test]
fn tracker_starts_idle() {
    assert_eq!(slider_tracker().state(), SwipeState::Idle);
}

#[test]
fn short_drag_produces_nothing() {
    let mut t = slider_tracker();
    assert_eq!(swipe(&mut t, 100.0, 120.0), None);
}

#[test]
fn drag_right_past_threshold_is_right() {
    let mut t = slider_tracker();
    assert_eq!(swipe(&mut t, 100.0, 140.0), Some(Swipe::Right));
}

#[test]
fn drag_left_past_threshold_is_left() {
    let mut t = slider_tracker();
    assert_eq!(swipe(&mut t, 200.0, 100.0), Some(Swipe::Left));
}

#[test]
fn touch_end_resets_to_idle() {
    let mut t = slider_tracker();
    swipe(&mut t, 0.0, 100.0);
    assert_eq!(t.state(), SwipeState::Idle);
    assert_eq!(t.touch_end(), None);
}

#[test]
fn touch_end_without_start_is_none() {
    let mut t = lightbox_tracker();
    assert_eq!(t.touch_end(), None);
}

#[test]
fn tap_without_move_is_none() {
    let mut t = slider_tracker();
    t.touch_start(1, 50.0);
    assert_eq!(t.touch_end(), None);
}

#[test]
fn multi_touch_start_is_ignored() {
    let mut t = slider_tracker();
    t.touch_start(2, 0.0);
    assert_eq!(t.state(), SwipeState::Idle);
    t.touch_move(1, 100.0);
    assert_eq!(t.touch_end(), None);
}

#[test]
fn multi_touch_move_does_not_update_position() {
    let mut t = slider_tracker();
    t.touch_start(1, 0.0);
    t.touch_move(2, 300.0);
    assert_eq!(t.touch_end(), None);
}

#[test]
fn last_move_position_wins() {
    let mut t = slider_tracker();
    t.touch_start(1, 100.0);
    t.touch_move(1, 200.0);
    t.touch_move(1, 110.0);
    assert_eq!(t.touch_end(), None);
}

#[test]
fn lightbox_slop_arms_gesture() {
    let mut t = lightbox_tracker();
    t.touch_start(1, 100.0);
    assert_eq!(t.state(), SwipeState::Tracking { start_x: 100.0, current_x: 100.0, armed: false });
    t.touch_move(1, 111.0);
    assert_eq!(t.state(), SwipeState::Tracking { start_x: 100.0, current_x: 111.0, armed: true });
}

#[test]
fn lightbox_swipe_needs_fifty_pixels() {
    let mut t = lightbox_tracker();
    assert_eq!(swipe(&mut t, 100.0, 145.0), None);
    assert_eq!(swipe(&mut t, 100.0, 150.0), Some(Swipe::Right));
    assert_eq!(swipe(&mut t, 100.0, 40.0), Some(Swipe::Left));
}

#[test]
fn armed_flag_survives_return_inside_slop() {
    let mut t = lightbox_tracker();
    t.touch_start(1, 100.0);
    t.touch_move(1, 130.0);
    t.touch_move(1, 102.0);
    assert!(matches!(t.state(), SwipeState::Tracking { armed: true, .. }));
    assert_eq!(t.touch_end(), None);
}

#[test]
fn restart_discards_previous_gesture() {
    let mut t = slider_tracker();
    t.touch_start(1, 0.0);
    t.touch_move(1, 300.0);
    t.touch_start(1, 500.0);
    assert_eq!(t.touch_end(), None);
}
