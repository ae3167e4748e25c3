//! Source location tracking for tokens.
//!
//! Every token carries a `Span` naming the bytes of the root input it was
//! scanned from. Spans are diagnostic data: rendering never looks at them.

use std::ops::Range;

/// A byte range in the source text.
///
/// Spans use byte offsets (not character offsets), half-open: `[start, end)`.
///
/// # Example
///
/// ```rust
/// use marklet_core::span::Span;
///
/// let span = Span::new(2, 10);
/// assert_eq!(span.len(), 8);
/// assert_eq!(&"# Title here"[span.range()], "Title he");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Starting byte offset (inclusive).
    pub start: u32,
    /// Ending byte offset (exclusive).
    pub end: u32,
}

impl Span {
    /// Create a new span from byte offsets.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Build a span from `usize` scanner positions.
    #[inline]
    pub(crate) fn from_range(start: usize, end: usize) -> Self {
        Self::new(start as u32, end as u32)
    }

    /// A zero-width span at `offset`.
    #[inline]
    pub const fn empty_at(offset: u32) -> Self {
        Self::new(offset, offset)
    }

    /// Get the length of this span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Check if this span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if this span contains a byte offset.
    #[inline]
    pub const fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// The span moved right by `offset` bytes.
    #[inline]
    pub const fn shifted(self, offset: u32) -> Span {
        Span::new(self.start + offset, self.end + offset)
    }

    /// Whether `next` starts exactly where this span ends.
    #[inline]
    pub const fn abuts(&self, next: &Span) -> bool {
        self.end == next.start
    }

    /// The span as a `usize` range, for slicing the source.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let span = Span::new(3, 6);
        assert!(span.contains(3));
        assert!(span.contains(5));
        assert!(!span.contains(6));
        assert!(!Span::empty_at(3).contains(3));
    }

    #[test]
    fn abuts_and_shifted() {
        let first = Span::new(0, 4);
        let second = Span::new(4, 9);
        assert!(first.abuts(&second));
        assert!(!second.abuts(&first));
        assert_eq!(first.shifted(10), Span::new(10, 14));
    }
}
