//! Circular index over a fixed-length collection.
//!
//! Both the lightbox and the testimonial slider page through a collection
//! that never changes length after initialization, and both wrap at either
//! end instead of stopping. `Pager` owns that arithmetic.

#[cfg(test)]
#[path = "pager_test.rs"]
mod pager_test;

/// A position within `0..len` that wraps on navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    index: usize,
    len: usize,
}

impl Pager {
    /// Create a pager positioned at the first item.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move to `index`, wrapping negative and out-of-range values around the
    /// collection. Returns the resulting position.
    pub fn go_to(&mut self, index: isize) -> usize {
        self.index = wrap(index, self.len);
        self.index
    }

    /// Step forward one item, wrapping from the last item to the first.
    pub fn next(&mut self) -> usize {
        self.step(1)
    }

    /// Step back one item, wrapping from the first item to the last.
    pub fn prev(&mut self) -> usize {
        self.step(-1)
    }

    /// Index of the item before the current one.
    #[must_use]
    pub fn before(&self) -> usize {
        wrap(signed(self.index) - 1, self.len)
    }

    /// Index of the item after the current one.
    #[must_use]
    pub fn after(&self) -> usize {
        wrap(signed(self.index) + 1, self.len)
    }

    fn step(&mut self, delta: isize) -> usize {
        self.go_to(signed(self.index) + delta)
    }
}

/// Wrap `index` into `0..len`. An empty collection always yields 0.
#[must_use]
pub fn wrap(index: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = signed(len);
    // rem_euclid keeps the result in 0..len for negative input.
    usize::try_from(index.rem_euclid(len)).unwrap_or(0)
}

fn signed(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}
