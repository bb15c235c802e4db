//! Horizontal swipe recognition shared by the lightbox and the slider.
//!
//! The DOM shell feeds raw touch positions into a `SwipeTracker` on
//! `touchstart`, `touchmove` and `touchend`. The tracker only follows
//! single-finger gestures; on release it reports at most one `Swipe`, which
//! the widget maps to a single navigation step.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

/// Direction of a completed swipe, named by finger travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right (positive Δx). Shows the previous item.
    Right,
    /// Finger moved left (negative Δx). Shows the next item.
    Left,
}

/// Distances that turn a touch into a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Travel (px) a release needs to count as a swipe.
    pub threshold_px: f64,
    /// Travel (px) during the move phase before the gesture is armed.
    /// Zero arms every tracked touch immediately.
    pub slop_px: f64,
}

/// State of the gesture between touch-start and touch-end.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SwipeState {
    /// No single-finger gesture in progress.
    #[default]
    Idle,
    /// A single finger is down.
    Tracking {
        /// Client x at touch-start.
        start_x: f64,
        /// Most recent client x.
        current_x: f64,
        /// Whether the finger has left the slop radius.
        armed: bool,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    config: SwipeConfig,
    state: SwipeState,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self { config, state: SwipeState::Idle }
    }

    #[must_use]
    pub fn state(&self) -> SwipeState {
        self.state
    }

    /// Drop any gesture in progress.
    pub fn reset(&mut self) {
        self.state = SwipeState::Idle;
    }

    /// Begin tracking. Multi-touch starts are ignored and leave the current
    /// state untouched.
    pub fn touch_start(&mut self, touches: u32, x: f64) {
        if touches != 1 {
            return;
        }
        self.state = SwipeState::Tracking { start_x: x, current_x: x, armed: self.config.slop_px <= 0.0 };
    }

    /// Record finger movement for a tracked single-finger gesture.
    pub fn touch_move(&mut self, touches: u32, x: f64) {
        if touches != 1 {
            return;
        }
        if let SwipeState::Tracking { start_x, current_x, armed } = &mut self.state {
            *current_x = x;
            if (x - *start_x).abs() > self.config.slop_px {
                *armed = true;
            }
        }
    }

    /// Finish the gesture, returning the swipe it produced, if any.
    pub fn touch_end(&mut self) -> Option<Swipe> {
        let state = std::mem::take(&mut self.state);
        let SwipeState::Tracking { start_x, current_x, armed } = state else {
            return None;
        };
        if !armed {
            return None;
        }
        classify(current_x - start_x, self.config.threshold_px)
    }
}

/// Map a horizontal travel to a swipe direction. Travel exactly at the
/// threshold counts.
#[must_use]
pub fn classify(delta_x: f64, threshold_px: f64) -> Option<Swipe> {
    if delta_x >= threshold_px {
        Some(Swipe::Right)
    } else if delta_x <= -threshold_px {
        Some(Swipe::Left)
    } else {
        None
    }
}
