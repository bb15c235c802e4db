//! Gallery pre-fetch for `<details>` blocks that wrap a `.slides` element.
//!
//! Images inside a collapsed `<details>` are fetched as soon as the user shows
//! intent (hover, focus, touch) and again on open, and the `js-open` class is
//! cycled so the opening animation replays every time.

#[cfg(test)]
#[path = "preload_test.rs"]
mod preload_test;

/// Fires once, then stays spent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Latch {
    fired: bool,
}

impl Latch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time only.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    #[must_use]
    pub fn is_spent(&self) -> bool {
        self.fired
    }
}

/// What to do when a gallery's `<details>` toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsToggle {
    /// Fetch the gallery and replay the opening animation.
    Opened,
    /// Drop the animation class.
    Closed,
}

impl DetailsToggle {
    #[must_use]
    pub fn from_open(open: bool) -> Self {
        if open { Self::Opened } else { Self::Closed }
    }

    /// Whether the gallery images should be fetched now.
    #[must_use]
    pub fn wants_preload(self) -> bool {
        self == Self::Opened
    }
}

/// Sources worth fetching: non-empty and not repeated.
#[must_use]
pub fn distinct_sources<I, S>(sources: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for src in sources {
        let src = src.into();
        if !src.is_empty() && !out.contains(&src) {
            out.push(src);
        }
    }
    out
}
