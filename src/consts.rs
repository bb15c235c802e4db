//! Shared constants for the widget crate: thresholds, timings and the page's
//! marker class names.

// ── Gestures ────────────────────────────────────────────────────

/// Horizontal travel (px) before a touch on the lightbox counts as a swipe.
pub const LIGHTBOX_SWIPE_SLOP_PX: f64 = 10.0;

/// Horizontal travel (px) a lightbox swipe needs to change slide.
pub const LIGHTBOX_SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Horizontal travel (px) a slider swipe needs to change slide.
pub const SLIDER_SWIPE_THRESHOLD_PX: f64 = 40.0;

// ── Read more ───────────────────────────────────────────────────

/// Paragraphs taller than this (px, `scrollHeight`) get collapsed.
pub const READ_MORE_THRESHOLD_PX: f64 = 120.0;

/// Delay before re-scanning after testimonials are inserted.
pub const READ_MORE_SETTLE_MS: u32 = 60;

pub const READ_MORE_LABEL: &str = "Read more";
pub const SHOW_LESS_LABEL: &str = "Show less";

// ── Selectors ───────────────────────────────────────────────────

pub const SLIDE_IMAGES: &str = ".slides img";
pub const SLIDES: &str = ".slides";
pub const DETAILS: &str = "details";

pub const SLIDER: &str = ".testimonial-slider";
pub const SLIDER_TRACK: &str = ".slider-track";
pub const SLIDER_VIEWPORT: &str = ".slider-viewport";
pub const SLIDER_PREV: &str = ".slider-btn.prev";
pub const SLIDER_NEXT: &str = ".slider-btn.next";
pub const SLIDER_DOTS: &str = ".slider-dots";

pub const TESTIMONIAL: &str = ".testimonial";
pub const TESTIMONIALS: &str = ".testimonials";
pub const TESTIMONIAL_PARAGRAPH: &str = "blockquote > p";

/// Id of the optional JSON configuration block.
pub const CONFIG_SCRIPT_ID: &str = "site-widgets-config";

// ── Class names ─────────────────────────────────────────────────

pub const OVERLAY_CLASS: &str = "lightbox-overlay";
pub const OVERLAY_IMAGE_CLASS: &str = "lightbox-img";
pub const OVERLAY_CONTROLS_CLASS: &str = "lightbox-controls";
pub const OVERLAY_PREV_CLASS: &str = "lightbox-btn prev";
pub const OVERLAY_NEXT_CLASS: &str = "lightbox-btn next";
pub const OVERLAY_CLOSE_CLASS: &str = "lightbox-close";

pub const DOT_CLASS: &str = "slider-dot";
pub const ACTIVE_CLASS: &str = "active";
pub const READ_MORE_BUTTON_CLASS: &str = "read-more-btn";
pub const COLLAPSED_CLASS: &str = "collapsed";
pub const JS_OPEN_CLASS: &str = "js-open";

/// Data attribute marking a testimonial the read-more scan already handled.
pub const READ_MORE_APPLIED_ATTR: &str = "data-readmore-applied";
