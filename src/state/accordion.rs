//! "At most one open" selection over a fixed set of items.
//!
//! Backs the FAQ list, the generic accordion, and the pricing-card highlight.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

/// Ordered items of which at most one is open. Starts all closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExclusiveSet {
    len: usize,
    open: Option<usize>,
}

impl ExclusiveSet {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn open(self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub fn is_open(self, i: usize) -> bool {
        self.open == Some(i)
    }

    /// Close everything, then open `i` unless it was the open one.
    /// Out-of-range indices leave the set untouched.
    pub fn toggle(&mut self, i: usize) -> Option<usize> {
        if i >= self.len {
            return self.open;
        }
        let was_open = self.is_open(i);
        self.open = None;
        if !was_open {
            self.open = Some(i);
        }
        self.open
    }

    /// Make `i` the open item, even if it already is.
    pub fn select(&mut self, i: usize) -> Option<usize> {
        if i < self.len {
            self.open = Some(i);
        }
        self.open
    }
}
