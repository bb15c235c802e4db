#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_constants() {
    let cfg = WidgetConfig::default();
    assert!(cfg.lightbox.enabled);
    assert_eq!(cfg.lightbox.swipe_threshold_px, 50.0);
    assert_eq!(cfg.lightbox.swipe_slop_px, 10.0);
    assert_eq!(cfg.slider.swipe_threshold_px, 40.0);
    assert_eq!(cfg.read_more.threshold_px, 120.0);
    assert_eq!(cfg.read_more.settle_ms, 60);
    assert_eq!(cfg.read_more.expand_label, "Read more");
    assert_eq!(cfg.read_more.collapse_label, "Show less");
    assert_eq!(cfg.log_level, LogLevel::Info);
    assert!(cfg.validate().is_ok());
}

#[test]
fn empty_object_yields_defaults() {
    let cfg = WidgetConfig::from_json("{}").unwrap();
    assert_eq!(cfg, WidgetConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = WidgetConfig::from_json(r#"{ "readMore": { "thresholdPx": 160 }, "logLevel": "debug" }"#).unwrap();
    assert_eq!(cfg.read_more.threshold_px, 160.0);
    assert_eq!(cfg.read_more.settle_ms, 60);
    assert_eq!(cfg.log_level, LogLevel::Debug);
    assert_eq!(cfg.slider, SliderConfig::default());
}

#[test]
fn widgets_can_be_disabled() {
    let cfg = WidgetConfig::from_json(r#"{ "lightbox": { "enabled": false } }"#).unwrap();
    assert!(!cfg.lightbox.enabled);
    assert!(cfg.slider.enabled);
}

#[test]
fn custom_labels_flow_into_toggle_labels() {
    let cfg = WidgetConfig::from_json(r#"{ "readMore": { "expandLabel": "More", "collapseLabel": "Less" } }"#).unwrap();
    let labels = cfg.read_more.labels();
    assert_eq!(labels.expand, "More");
    assert_eq!(labels.collapse, "Less");
}

#[test]
fn swipe_configs_carry_thresholds() {
    let cfg = WidgetConfig::default();
    assert_eq!(cfg.lightbox.swipe(), SwipeConfig { threshold_px: 50.0, slop_px: 10.0 });
    assert_eq!(cfg.slider.swipe(), SwipeConfig { threshold_px: 40.0, slop_px: 0.0 });
}

#[test]
fn malformed_json_is_config_error() {
    let err = WidgetConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, WidgetError::Config(_)));
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = WidgetConfig::from_json(r#"{ "logLevel": "loud" }"#).unwrap_err();
    assert!(matches!(err, WidgetError::Config(_)));
}

#[test]
fn zero_swipe_threshold_is_rejected() {
    let err = WidgetConfig::from_json(r#"{ "slider": { "swipeThresholdPx": 0 } }"#).unwrap_err();
    assert!(matches!(err, WidgetError::ConfigValue { field: "slider.swipeThresholdPx", .. }));
}

#[test]
fn negative_slop_is_rejected() {
    let err = WidgetConfig::from_json(r#"{ "lightbox": { "swipeSlopPx": -1 } }"#).unwrap_err();
    assert!(matches!(err, WidgetError::ConfigValue { field: "lightbox.swipeSlopPx", .. }));
}

#[test]
fn log_level_maps_to_log_crate() {
    assert_eq!(LogLevel::Warn.to_level(), log::Level::Warn);
    assert_eq!(LogLevel::Trace.to_level(), log::Level::Trace);
}
