//! Character cursor for traversing source code.
//!
//! The [`Cursor`] owns the read position of the scanner. It walks the source
//! one `char` at a time, stays on UTF-8 boundaries, and keeps the 1-based
//! line/column of the next unconsumed character for error reporting.

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use minilua_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x = 1");
/// assert_eq!(cursor.current_char(), Some('x'));
/// assert_eq!(cursor.advance(), Some('x'));
/// assert_eq!(cursor.current_char(), Some(' '));
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the cursor, or `None` at end of input.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        let b = *self.source.as_bytes().get(self.position)?;
        if b < 128 {
            return Some(b as char);
        }
        self.source[self.position..].chars().next()
    }

    /// Returns the character `offset` characters ahead of the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use minilua_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("a.5");
    /// assert_eq!(cursor.peek_char(0), Some('a'));
    /// assert_eq!(cursor.peek_char(2), Some('5'));
    /// assert_eq!(cursor.peek_char(3), None);
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> Option<char> {
        self.source[self.position..].chars().nth(offset)
    }

    /// Consumes and returns the current character.
    ///
    /// Updates line and column tracking. Returns `None`, without moving, at
    /// end of input.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current_char()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use minilua_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("~=");
    /// assert!(!cursor.match_char('='));
    /// assert!(cursor.match_char('~'));
    /// assert!(cursor.match_char('='));
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while self.current_char().is_some_and(&mut predicate) {
            self.advance();
        }
    }

    /// Skips whitespace other than `\n`.
    ///
    /// Newlines are tokens in MiniLua, so they are left for the scanner.
    ///
    /// # Example
    ///
    /// ```
    /// use minilua_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(" \t\r\nx");
    /// cursor.skip_inline_whitespace();
    /// assert_eq!(cursor.current_char(), Some('\n'));
    /// ```
    pub fn skip_inline_whitespace(&mut self) {
        self.eat_while(crate::chars::is_inline_whitespace);
    }

    /// Skips a byte order mark at the cursor. The mark does not count as a
    /// column.
    pub fn skip_bom(&mut self) -> bool {
        if self.remaining().starts_with('\u{FEFF}') {
            self.position += '\u{FEFF}'.len_utf8();
            true
        } else {
            false
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source between `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}
