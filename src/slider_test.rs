#![allow(clippy::float_cmp)]

use super::*;

fn slider(count: usize, width: f64) -> SliderCore {
    SliderCore::new(count, width, SwipeConfig { threshold_px: 40.0, slop_px: 0.0 })
}

// =============================================================
// Frame
// =============================================================

#[test]
fn initial_frame_is_first_slide_at_zero_offset() {
    let s = slider(3, 800.0);
    let frame = s.frame();
    assert_eq!(frame.active, 0);
    assert_eq!(frame.count, 3);
    assert_eq!(frame.offset_px, 0.0);
    assert_eq!(frame.transform(), "translateX(-0px)");
}

#[test]
fn offset_is_index_times_width() {
    let mut s = slider(4, 320.0);
    let frame = s.jump(2);
    assert_eq!(frame.offset_px, 640.0);
    assert_eq!(frame.transform(), "translateX(-640px)");
}

#[test]
fn aria_hidden_marks_only_active_slide_visible() {
    let mut s = slider(3, 100.0);
    let frame = s.jump(1);
    assert_eq!(frame.aria_hidden(0), "true");
    assert_eq!(frame.aria_hidden(1), "false");
    assert_eq!(frame.aria_hidden(2), "true");
    assert!(frame.is_active(1));
    assert!(!frame.is_active(0));
}

#[test]
fn dot_labels_are_one_based() {
    assert_eq!(dot_label(0), "Show testimonial 1");
    assert_eq!(dot_label(4), "Show testimonial 5");
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn next_from_last_wraps_to_first() {
    let mut s = slider(3, 100.0);
    s.jump(2);
    assert_eq!(s.next().active, 0);
}

#[test]
fn prev_from_first_wraps_to_last() {
    let mut s = slider(3, 100.0);
    let frame = s.prev();
    assert_eq!(frame.active, 2);
    assert_eq!(frame.offset_px, 200.0);
}

#[test]
fn jump_out_of_range_wraps() {
    let mut s = slider(3, 100.0);
    assert_eq!(s.jump(4).active, 1);
}

// =============================================================
// Resize
// =============================================================

#[test]
fn resize_recomputes_offset_and_keeps_index() {
    let mut s = slider(5, 1000.0);
    s.jump(3);
    let frame = s.resize(400.0);
    assert_eq!(s.index(), 3);
    assert_eq!(frame.active, 3);
    assert_eq!(frame.offset_px, 1200.0);
    assert_eq!(s.viewport_width(), 400.0);
}

#[test]
fn resize_to_negative_width_clamps_to_zero() {
    let mut s = slider(2, 500.0);
    s.jump(1);
    assert_eq!(s.resize(-10.0).offset_px, 0.0);
}

// =============================================================
// Swipe
// =============================================================

#[test]
fn swipe_below_threshold_does_nothing() {
    let mut s = slider(3, 100.0);
    s.on_touch_start(1, 100.0);
    s.on_touch_move(1, 61.0);
    assert_eq!(s.on_touch_end(), None);
    assert_eq!(s.index(), 0);
}

#[test]
fn swipe_at_threshold_steps_once() {
    let mut s = slider(3, 100.0);
    s.on_touch_start(1, 100.0);
    s.on_touch_move(1, 60.0);
    let frame = s.on_touch_end();
    assert_eq!(frame.map(|f| f.active), Some(1));
}

#[test]
fn swipe_right_goes_back_with_wrap() {
    let mut s = slider(3, 100.0);
    s.on_touch_start(1, 0.0);
    s.on_touch_move(1, 250.0);
    assert_eq!(s.on_touch_end().map(|f| f.active), Some(2));
}

#[test]
fn touch_end_without_start_is_ignored() {
    let mut s = slider(3, 100.0);
    assert_eq!(s.on_touch_end(), None);
}
