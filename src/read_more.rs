//! Read-more collapsing for long testimonial paragraphs.
//!
//! A scan visits every testimonial once: the processed flag lives on the
//! element itself, so later scans (window load, inserted nodes) skip it.
//! Paragraphs taller than the threshold get a toggle button and start
//! collapsed.

#[cfg(test)]
#[path = "read_more_test.rs"]
mod read_more_test;

use crate::consts::{READ_MORE_LABEL, SHOW_LESS_LABEL};

/// What a scan should do with one testimonial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDecision {
    /// Already processed, or has no paragraph yet. Leave it alone.
    Skip,
    /// Short enough to show in full. Flag it as processed.
    MarkOnly,
    /// Insert the toggle, collapse the paragraph and flag it.
    Collapse,
}

/// Decide how to treat a testimonial.
///
/// A testimonial without a paragraph is not flagged, so a later scan can pick
/// it up once its content arrives.
#[must_use]
pub fn plan(already_applied: bool, paragraph_height: Option<f64>, threshold_px: f64) -> ScanDecision {
    if already_applied {
        return ScanDecision::Skip;
    }
    match paragraph_height {
        None => ScanDecision::Skip,
        Some(height) if height > threshold_px => ScanDecision::Collapse,
        Some(_) => ScanDecision::MarkOnly,
    }
}

/// Labels for the two toggle states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleLabels {
    pub expand: String,
    pub collapse: String,
}

impl Default for ToggleLabels {
    fn default() -> Self {
        Self { expand: READ_MORE_LABEL.to_string(), collapse: SHOW_LESS_LABEL.to_string() }
    }
}

/// How the paragraph and its button should look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleView<'a> {
    /// Whether the paragraph carries the `collapsed` class.
    pub collapsed: bool,
    /// Button text.
    pub label: &'a str,
    /// `aria-expanded` value for the button.
    pub aria_expanded: &'static str,
}

/// Expanded/collapsed state of one paragraph.
#[derive(Debug, Clone, Default)]
pub struct ReadMoreToggle {
    expanded: bool,
    labels: ToggleLabels,
}

impl ReadMoreToggle {
    /// A toggle in the collapsed state.
    #[must_use]
    pub fn new(labels: ToggleLabels) -> Self {
        Self { expanded: false, labels }
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip the state and return the new view.
    pub fn toggle(&mut self) -> ToggleView<'_> {
        self.expanded = !self.expanded;
        self.view()
    }

    #[must_use]
    pub fn view(&self) -> ToggleView<'_> {
        if self.expanded {
            ToggleView { collapsed: false, label: &self.labels.collapse, aria_expanded: "true" }
        } else {
            ToggleView { collapsed: true, label: &self.labels.expand, aria_expanded: "false" }
        }
    }
}
