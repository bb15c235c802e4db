//! Pointer capability detection.
//!
//! Touch-first devices keep the browser's native image view (pinch zoom,
//! share sheet) instead of the custom lightbox overlay.

#[cfg(test)]
#[path = "capability_test.rs"]
mod capability_test;

use wasm_bindgen::JsValue;
use web_sys::Window;

/// Media query that matches touch-first devices.
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

/// The precision of the device's primary pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerCapability {
    /// Mouse or trackpad.
    Fine,
    /// Finger.
    Coarse,
}

impl PointerCapability {
    /// Combine the two browser signals: the presence of `ontouchstart` on the
    /// window and the coarse-pointer media query.
    #[must_use]
    pub fn from_signals(has_touch_start: bool, coarse_query_matches: bool) -> Self {
        if has_touch_start || coarse_query_matches { Self::Coarse } else { Self::Fine }
    }

    /// Probe the window.
    #[must_use]
    pub fn detect(window: &Window) -> Self {
        let has_touch_start = js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
        let coarse = matches!(window.match_media(COARSE_POINTER_QUERY), Ok(Some(mq)) if mq.matches());
        Self::from_signals(has_touch_start, coarse)
    }

    /// Whether the custom overlay should handle image activation.
    #[must_use]
    pub fn wants_overlay(self) -> bool {
        self == Self::Fine
    }
}
