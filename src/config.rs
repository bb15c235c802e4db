//! Widget configuration.
//!
//! Defaults come from [`crate::consts`]. A page can override any field with a
//! JSON block:
//!
//! ```html
//! <script type="application/json" id="site-widgets-config">
//!   { "readMore": { "thresholdPx": 160 }, "logLevel": "debug" }
//! </script>
//! ```
//!
//! Missing keys keep their defaults. A block that fails to parse or validate
//! is reported and the defaults are used instead.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    LIGHTBOX_SWIPE_SLOP_PX, LIGHTBOX_SWIPE_THRESHOLD_PX, READ_MORE_LABEL, READ_MORE_SETTLE_MS, READ_MORE_THRESHOLD_PX,
    SHOW_LESS_LABEL, SLIDER_SWIPE_THRESHOLD_PX,
};
use crate::error::{Result, WidgetError};
use crate::gesture::SwipeConfig;
use crate::read_more::ToggleLabels;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LightboxConfig {
    pub enabled: bool,
    pub swipe_threshold_px: f64,
    pub swipe_slop_px: f64,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self { enabled: true, swipe_threshold_px: LIGHTBOX_SWIPE_THRESHOLD_PX, swipe_slop_px: LIGHTBOX_SWIPE_SLOP_PX }
    }
}

impl LightboxConfig {
    #[must_use]
    pub fn swipe(&self) -> SwipeConfig {
        SwipeConfig { threshold_px: self.swipe_threshold_px, slop_px: self.swipe_slop_px }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderConfig {
    pub enabled: bool,
    pub swipe_threshold_px: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self { enabled: true, swipe_threshold_px: SLIDER_SWIPE_THRESHOLD_PX }
    }
}

impl SliderConfig {
    #[must_use]
    pub fn swipe(&self) -> SwipeConfig {
        SwipeConfig { threshold_px: self.swipe_threshold_px, slop_px: 0.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReadMoreConfig {
    pub enabled: bool,
    pub threshold_px: f64,
    pub settle_ms: u32,
    pub expand_label: String,
    pub collapse_label: String,
}

impl Default for ReadMoreConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold_px: READ_MORE_THRESHOLD_PX,
            settle_ms: READ_MORE_SETTLE_MS,
            expand_label: READ_MORE_LABEL.to_string(),
            collapse_label: SHOW_LESS_LABEL.to_string(),
        }
    }
}

impl ReadMoreConfig {
    #[must_use]
    pub fn labels(&self) -> ToggleLabels {
        ToggleLabels { expand: self.expand_label.clone(), collapse: self.collapse_label.clone() }
    }
}

/// Console log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub fn to_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Debug => log::Level::Debug,
            Self::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub lightbox: LightboxConfig,
    pub slider: SliderConfig,
    pub read_more: ReadMoreConfig,
    pub log_level: LogLevel,
}

impl WidgetConfig {
    /// Parse and validate a JSON override block.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject thresholds that would make gestures or measurements meaningless.
    pub fn validate(&self) -> Result<()> {
        positive("lightbox.swipeThresholdPx", self.lightbox.swipe_threshold_px)?;
        non_negative("lightbox.swipeSlopPx", self.lightbox.swipe_slop_px)?;
        positive("slider.swipeThresholdPx", self.slider.swipe_threshold_px)?;
        non_negative("readMore.thresholdPx", self.read_more.threshold_px)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WidgetError::ConfigValue { field, reason: format!("expected a positive number, got {value}") })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(WidgetError::ConfigValue { field, reason: format!("expected a non-negative number, got {value}") })
    }
}
