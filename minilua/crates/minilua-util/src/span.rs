//! Span module - Source location tracking.
//!
//! A [`Span`] records where a piece of text came from: its byte range in the
//! source buffer plus the human-readable line and column of its first
//! character.
//!
//! # Examples
//!
//! ```
//! use minilua_util::span::Span;
//!
//! let span = Span::new(4, 9, 1, 5);
//! assert_eq!(span.len(), 5);
//! ```

/// A unique identifier for a source file
///
/// FileIds are assigned sequentially as files are added to the
/// [`SourceMap`](crate::SourceMap).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FileId(pub usize);

impl FileId {
    /// Get the raw index value
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// Source location span
///
/// Byte offsets are half-open (`start..end`). `line` and `column` are
/// 1-based and describe `start`; the column counts characters, not bytes.
///
/// # Examples
///
/// ```
/// use minilua_util::span::Span;
///
/// let span = Span::new(10, 20, 2, 3);
/// assert!(span.contains(15));
/// assert!(!span.contains(20));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number of `start` (1-based)
    pub line: u32,
    /// Column number of `start` (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use minilua_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert!(Span::DUMMY.is_empty());
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
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a single offset
    ///
    /// # Examples
    ///
    /// ```
    /// use minilua_util::span::Span;
    ///
    /// let point = Span::point(7, 1, 8);
    /// assert_eq!(point.start, point.end);
    /// ```
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}
