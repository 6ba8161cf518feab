//! Span module - Source location tracking.
//!
//! This module provides the [`Span`] type for representing source code
//! locations, combining byte offsets with human-readable line/column
//! information.
//!
//! # Examples
//!
//! ```
//! use scrawl_util::span::Span;
//!
//! // A span covering bytes 4..10, starting at line 1, column 5
//! let span = Span::new(4, 10, 1, 5);
//! assert_eq!(span.len(), 6);
//! ```

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end)
/// - Line and column numbers of the start (for human-readable output)
///
/// # Examples
///
/// ```
/// use scrawl_util::span::Span;
///
/// let span = Span::new(10, 20, 2, 3);
/// assert_eq!(span.start, 10);
/// assert_eq!(span.end, 20);
///
/// // A point span marks a single location
/// let point = Span::point(7, 2, 3);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number of the start (1-based)
    pub line: u32,
    /// Column number of the start (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use scrawl_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number of the start (1-based)
    /// * `column` - Column number of the start (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span at a single point
    ///
    /// # Examples
    ///
    /// ```
    /// use scrawl_util::span::Span;
    ///
    /// let point = Span::point(12, 3, 1);
    /// assert_eq!(point.start, point.end);
    /// ```
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self {
            start: offset,
            end: offset,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use scrawl_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.len(), 10);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use scrawl_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert!(span.contains(15));
    /// assert!(!span.contains(20));
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Merge two spans into a single span covering both
    ///
    /// The resulting span starts at the minimum of both starts and ends
    /// at the maximum of both ends; line/column come from whichever span
    /// starts first.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrawl_util::span::Span;
    ///
    /// let span1 = Span::new(10, 20, 1, 11);
    /// let span2 = Span::new(25, 35, 2, 5);
    /// let merged = span1.merge(span2);
    /// assert_eq!(merged.start, 10);
    /// assert_eq!(merged.end, 35);
    /// assert_eq!(merged.line, 1);
    /// ```
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        let (line, column) = if self.start <= other.start {
            (self.line, self.column)
        } else {
            (other.line, other.column)
        };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line,
            column,
        }
    }
}
