use super::*;

const THRESHOLD: f64 = 120.0;

// =============================================================
// plan
// =============================================================

#[test]
fn tall_paragraph_collapses() {
    assert_eq!(plan(false, Some(300.0), THRESHOLD), ScanDecision::Collapse);
}

#[test]
fn short_paragraph_is_only_marked() {
    assert_eq!(plan(false, Some(80.0), THRESHOLD), ScanDecision::MarkOnly);
}

#[test]
fn paragraph_at_threshold_is_not_collapsed() {
    assert_eq!(plan(false, Some(THRESHOLD), THRESHOLD), ScanDecision::MarkOnly);
}

#[test]
fn missing_paragraph_is_skipped_unmarked() {
    assert_eq!(plan(false, None, THRESHOLD), ScanDecision::Skip);
}

#[test]
fn processed_testimonial_is_skipped() {
    assert_eq!(plan(true, Some(300.0), THRESHOLD), ScanDecision::Skip);
    assert_eq!(plan(true, Some(10.0), THRESHOLD), ScanDecision::Skip);
}

#[test]
fn rescanning_after_marking_is_noop() {
    let first = plan(false, Some(500.0), THRESHOLD);
    assert_eq!(first, ScanDecision::Collapse);
    let applied = first != ScanDecision::Skip;
    assert_eq!(plan(applied, Some(500.0), THRESHOLD), ScanDecision::Skip);
}

// =============================================================
// ReadMoreToggle
// =============================================================

#[test]
fn new_toggle_is_collapsed_with_read_more_label() {
    let t = ReadMoreToggle::new(ToggleLabels::default());
    assert!(!t.is_expanded());
    assert_eq!(t.view(), ToggleView { collapsed: true, label: "Read more", aria_expanded: "false" });
}

#[test]
fn toggle_expands() {
    let mut t = ReadMoreToggle::new(ToggleLabels::default());
    assert_eq!(t.toggle(), ToggleView { collapsed: false, label: "Show less", aria_expanded: "true" });
    assert!(t.is_expanded());
}

#[test]
fn toggle_twice_restores_collapsed_state() {
    let mut t = ReadMoreToggle::new(ToggleLabels::default());
    t.toggle();
    let view = t.toggle();
    assert_eq!(view, ToggleView { collapsed: true, label: "Read more", aria_expanded: "false" });
    assert!(!t.is_expanded());
}

#[test]
fn custom_labels_are_used() {
    let labels = ToggleLabels { expand: "Mehr".into(), collapse: "Weniger".into() };
    let mut t = ReadMoreToggle::new(labels);
    assert_eq!(t.view().label, "Mehr");
    assert_eq!(t.toggle().label, "Weniger");
}
