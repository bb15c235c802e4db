//! Lightbox controller: navigation state for the full-screen image overlay.
//!
//! `LightboxCore` holds the slide collection, the open/closed state and the
//! overlay's swipe tracker. Every input returns a list of [`Action`]s that the
//! DOM shell in [`crate::dom::lightbox`] applies to the page. The core never
//! touches the DOM, so navigation can be tested natively.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

use crate::gesture::{Swipe, SwipeConfig, SwipeTracker};
use crate::pager::Pager;

/// One image in the navigable collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Resolved image URL.
    pub src: String,
    /// Alternative text; empty when the source image has none.
    pub alt: String,
}

impl Slide {
    #[must_use]
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self { src: src.into(), alt: alt.into() }
    }
}

/// Instructions for the DOM shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Build the overlay, attach it to the body and focus it.
    MountOverlay,
    /// Show this image in the overlay.
    ShowImage { src: String, alt: String },
    /// Start fetching an image so a later navigation renders instantly.
    Preload(String),
    /// Remove the overlay and its document-level listeners.
    UnmountOverlay,
}

/// Key presses the overlay reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl OverlayKey {
    /// Map a `KeyboardEvent.key` value.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Escape),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            _ => None,
        }
    }
}

/// Whether a key pressed on a focused slide image opens the overlay.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[derive(Debug, Clone)]
pub struct LightboxCore {
    slides: Vec<Slide>,
    pager: Pager,
    open: bool,
    swipe: SwipeTracker,
}

impl LightboxCore {
    #[must_use]
    pub fn new(slides: Vec<Slide>, swipe: SwipeConfig) -> Self {
        let pager = Pager::new(slides.len());
        Self { slides, pager, open: false, swipe: SwipeTracker::new(swipe) }
    }

    // --- Queries ---

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the displayed image, or `None` while the overlay is closed.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.open.then(|| self.pager.index())
    }

    // --- Lifecycle ---

    /// Open the overlay at `start`. An already open overlay is reused and
    /// only the displayed image changes.
    pub fn open(&mut self, start: usize) -> Vec<Action> {
        if self.slides.is_empty() {
            return Vec::new();
        }
        let mut actions = Vec::with_capacity(4);
        if !self.open {
            self.open = true;
            actions.push(Action::MountOverlay);
        }
        actions.extend(self.show(isize::try_from(start).unwrap_or(0)));
        actions
    }

    /// Close the overlay. No-op when already closed.
    pub fn close(&mut self) -> Vec<Action> {
        if !self.open {
            return Vec::new();
        }
        self.open = false;
        self.swipe.reset();
        vec![Action::UnmountOverlay]
    }

    // --- Navigation ---

    /// Display image `index`, wrapping out-of-range values, and pre-fetch its
    /// neighbours. No-op while closed.
    pub fn show(&mut self, index: isize) -> Vec<Action> {
        if !self.open || self.slides.is_empty() {
            return Vec::new();
        }
        let current = self.pager.go_to(index);
        let slide = &self.slides[current];
        vec![
            Action::ShowImage { src: slide.src.clone(), alt: slide.alt.clone() },
            Action::Preload(self.slides[self.pager.before()].src.clone()),
            Action::Preload(self.slides[self.pager.after()].src.clone()),
        ]
    }

    pub fn next(&mut self) -> Vec<Action> {
        self.show(self.signed_index() + 1)
    }

    pub fn prev(&mut self) -> Vec<Action> {
        self.show(self.signed_index() - 1)
    }

    // --- Input ---

    pub fn on_key(&mut self, key: OverlayKey) -> Vec<Action> {
        match key {
            OverlayKey::Escape => self.close(),
            OverlayKey::ArrowLeft => self.prev(),
            OverlayKey::ArrowRight => self.next(),
        }
    }

    pub fn on_touch_start(&mut self, touches: u32, x: f64) {
        self.swipe.touch_start(touches, x);
    }

    pub fn on_touch_move(&mut self, touches: u32, x: f64) {
        self.swipe.touch_move(touches, x);
    }

    pub fn on_touch_end(&mut self) -> Vec<Action> {
        match self.swipe.touch_end() {
            Some(Swipe::Right) => self.prev(),
            Some(Swipe::Left) => self.next(),
            None => Vec::new(),
        }
    }

    fn signed_index(&self) -> isize {
        isize::try_from(self.pager.index()).unwrap_or(0)
    }
}
