//! Testimonial slider: one slide visible at a time, paged horizontally.
//!
//! The track element is translated by `index × viewport width` pixels, so the
//! offset has to be recomputed whenever the viewport is resized. `SliderCore`
//! keeps the index, the last measured width and the swipe tracker; the DOM
//! shell renders a [`SliderFrame`] after every change.

#[cfg(test)]
#[path = "slider_test.rs"]
mod slider_test;

use crate::gesture::{Swipe, SwipeConfig, SwipeTracker};
use crate::pager::Pager;

/// Everything the shell needs to paint the slider.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderFrame {
    /// Horizontal offset of the track in pixels (non-negative; applied as a
    /// leftward translation).
    pub offset_px: f64,
    /// Index of the visible slide and its active dot.
    pub active: usize,
    /// Number of slides.
    pub count: usize,
}

impl SliderFrame {
    /// CSS `transform` value for the track.
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translateX(-{}px)", self.offset_px)
    }

    /// `aria-hidden` value for slide `index`.
    #[must_use]
    pub fn aria_hidden(&self, index: usize) -> &'static str {
        if index == self.active { "false" } else { "true" }
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        index == self.active
    }
}

/// Accessible label of the indicator dot for slide `index`.
#[must_use]
pub fn dot_label(index: usize) -> String {
    format!("Show testimonial {}", index + 1)
}

#[derive(Debug, Clone)]
pub struct SliderCore {
    pager: Pager,
    viewport_width: f64,
    swipe: SwipeTracker,
}

impl SliderCore {
    #[must_use]
    pub fn new(count: usize, viewport_width: f64, swipe: SwipeConfig) -> Self {
        Self { pager: Pager::new(count), viewport_width, swipe: SwipeTracker::new(swipe) }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.pager.index()
    }

    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    #[must_use]
    pub fn frame(&self) -> SliderFrame {
        #[allow(clippy::cast_precision_loss)]
        let offset_px = self.pager.index() as f64 * self.viewport_width;
        SliderFrame { offset_px, active: self.pager.index(), count: self.pager.len() }
    }

    // --- Navigation ---

    pub fn next(&mut self) -> SliderFrame {
        self.pager.next();
        self.frame()
    }

    pub fn prev(&mut self) -> SliderFrame {
        self.pager.prev();
        self.frame()
    }

    /// Jump straight to slide `index` (dot click).
    pub fn jump(&mut self, index: usize) -> SliderFrame {
        self.pager.go_to(isize::try_from(index).unwrap_or(0));
        self.frame()
    }

    /// Re-layout after the viewport changed width. The index is kept.
    pub fn resize(&mut self, viewport_width: f64) -> SliderFrame {
        self.viewport_width = viewport_width.max(0.0);
        self.frame()
    }

    // --- Touch ---

    pub fn on_touch_start(&mut self, touches: u32, x: f64) {
        self.swipe.touch_start(touches, x);
    }

    pub fn on_touch_move(&mut self, touches: u32, x: f64) {
        self.swipe.touch_move(touches, x);
    }

    /// Finish a gesture. Returns a new frame only when the slide changed.
    pub fn on_touch_end(&mut self) -> Option<SliderFrame> {
        match self.swipe.touch_end()? {
            Swipe::Right => Some(self.prev()),
            Swipe::Left => Some(self.next()),
        }
    }
}
