//! Source map for managing source files and computing source locations.
//!
//! This module provides [`SourceFile`], a source buffer with a precomputed
//! line table, and [`SourceMap`], which owns every file a tool has loaded.

use std::sync::Arc;

use crate::error::{SourceMapError, SourceMapResult};
use crate::span::FileId;

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use minilua_util::SourceFile;
///
/// let file = SourceFile::new(0, "main.lua", "local x = 1\nprint(x)\n");
/// assert_eq!(file.name(), "main.lua");
/// assert_eq!(file.line_at(2), Some("print(x)"));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    id: FileId,
    name: String,
    content: Arc<str>,
    /// Byte offset at which each line starts; always begins with 0.
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `id` - Unique file identifier
    /// * `name` - File name or display name (`<stdin>` for piped input)
    /// * `content` - File content
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        std::iter::once(0)
            .chain(
                content
                    .bytes()
                    .enumerate()
                    .filter(|&(_, b)| b == b'\n')
                    .map(|(i, _)| i + 1),
            )
            .collect()
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// A trailing newline opens a final, empty line.
    ///
    /// # Examples
    ///
    /// ```
    /// use minilua_util::SourceFile;
    ///
    /// assert_eq!(SourceFile::new(0, "a", "x\ny").line_count(), 2);
    /// assert_eq!(SourceFile::new(0, "a", "x\ny\n").line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to 1-based `(line, column)` coordinates
    ///
    /// The column counts characters from the start of the line. Offsets past
    /// the end of the content are clamped to the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use minilua_util::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.lua", "a = 1\nbb = 2");
    /// assert_eq!(file.offset_to_line_col(0), (1, 1));
    /// assert_eq!(file.offset_to_line_col(8), (2, 3));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        let column = match self.content.get(line_start..offset) {
            Some(prefix) => prefix.chars().count(),
            None => offset - line_start,
        };
        (line + 1, column + 1)
    }

    /// Get a specific source line (1-indexed), without its line terminator
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());
        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Extract a substring from the file content with bounds checking
    ///
    /// # Examples
    ///
    /// ```
    /// use minilua_util::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.lua", "return nil");
    /// assert_eq!(file.extract_range(7, 10).unwrap(), "nil");
    /// assert!(file.extract_range(7, 99).is_err());
    /// ```
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        self.content
            .get(start..end)
            .ok_or(SourceMapError::NotCharBoundary { start, end })
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// A source map managing multiple source files
///
/// # Examples
///
/// ```
/// use minilua_util::SourceMap;
///
/// let mut map = SourceMap::new();
/// let id = map.add_file("a.lua", "x = 1");
/// assert_eq!(map.get(id).unwrap().content(), "x = 1");
/// ```
#[derive(Debug, Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    /// Create an empty source map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file and return its identifier
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let id = self.files.len();
        self.files.push(Arc::new(SourceFile::new(id, name, content)));
        FileId(id)
    }

    /// Look up a file by identifier
    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        self.files.get(id.index()).cloned()
    }

    /// Look up a file by identifier, failing with [`SourceMapError::FileNotFound`]
    pub fn get_file(&self, id: FileId) -> SourceMapResult<Arc<SourceFile>> {
        self.get(id).ok_or(SourceMapError::FileNotFound(id.index()))
    }

    /// Number of files in the map
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Iterate over files in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<SourceFile>> {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_line_table() {
        let file = SourceFile::new(0, "t.lua", "a\nbc\n\nd");
        assert_eq!(file.line_count(), 4);
        assert_eq!(file.line_start(1), Some(2));
        assert_eq!(file.line_at(3), Some(""));
        assert_eq!(file.line_at(4), Some("d"));
        assert_eq!(file.line_at(5), None);
        assert_eq!(file.line_at(0), None);
    }

    #[test]
    fn test_crlf_line_is_trimmed() {
        let file = SourceFile::new(0, "t.lua", "x = 1\r\ny = 2\r\n");
        assert_eq!(file.line_at(1), Some("x = 1"));
        assert_eq!(file.line_at(2), Some("y = 2"));
    }

    #[test]
    fn test_column_counts_characters() {
        let file = SourceFile::new(0, "t.lua", "s = \"héllo\" ~");
        // 'é' is two bytes, the '~' is the 13th character
        let offset = file.content().find('~').unwrap();
        assert_eq!(file.offset_to_line_col(offset), (1, 13));
    }

    #[test]
    fn test_offset_past_end_is_clamped() {
        let file = SourceFile::new(0, "t.lua", "ab\ncd");
        assert_eq!(file.offset_to_line_col(100), (2, 3));
    }

    #[test]
    fn test_extract_range_errors() {
        let file = SourceFile::new(0, "t.lua", "é");
        assert_eq!(
            file.extract_range(2, 1),
            Err(SourceMapError::InvalidSpan { start: 2, end: 1 })
        );
        assert_eq!(
            file.extract_range(0, 1),
            Err(SourceMapError::NotCharBoundary { start: 0, end: 1 })
        );
        assert_eq!(file.extract_range(0, 2), Ok("é"));
    }

    #[test]
    fn test_source_map_lookup() {
        let mut map = SourceMap::new();
        let a = map.add_file("a.lua", "a");
        let b = map.add_file("b.lua", "b");
        assert_eq!(map.file_count(), 2);
        assert_eq!(map.get_file(b).unwrap().name(), "b.lua");
        assert_eq!(map.get_file(a).unwrap().id(), a);
        assert_eq!(
            map.get_file(FileId(7)).unwrap_err(),
            SourceMapError::FileNotFound(7)
        );
        let names: Vec<_> = map.iter().map(|f| f.name().to_string()).collect();
        assert_eq!(names, ["a.lua", "b.lua"]);
    }

    #[quickcheck]
    fn prop_line_matches_newline_count(content: String, cut: usize) -> bool {
        let file = SourceFile::new(0, "prop", content.as_str());
        let mut offset = if content.is_empty() { 0 } else { cut % (content.len() + 1) };
        while !content.is_char_boundary(offset) {
            offset -= 1;
        }
        let prefix = &content[..offset];
        let expected_line = prefix.matches('\n').count() + 1;
        let expected_col = prefix.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
        file.offset_to_line_col(offset) == (expected_line, expected_col)
    }
}
