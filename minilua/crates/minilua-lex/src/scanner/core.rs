//! Core scanner implementation.

use std::iter::FusedIterator;

use minilua_util::Span;
use tracing::trace;

use crate::chars::is_name_start;
use crate::cursor::Cursor;
use crate::error::{ScanError, ScanResult};
use crate::options::ScanOptions;
use crate::token::Token;

/// A token together with the exact source text it was scanned from.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme<'a> {
    /// The classified token.
    pub token: Token,
    /// Source slice, quotes and escapes included; empty for end of file.
    pub text: &'a str,
    /// Where `text` sits in the source.
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    Scanning,
    Finished,
    Failed(ScanError),
}

/// Scanner for MiniLua source text.
///
/// Produces tokens one at a time until it has produced
/// [`Token::EndOfFile`]. The first malformed token stops the scan for good:
/// every later call reports the same error.
///
/// # Example
///
/// ```
/// use minilua_lex::{Scanner, Symbol, Token};
///
/// let mut scanner = Scanner::new("x = 1");
/// assert_eq!(scanner.next_token(), Ok(Token::Name("x".to_string())));
/// assert_eq!(scanner.next_token(), Ok(Token::Symbol(Symbol::Assign)));
/// assert_eq!(scanner.next_token(), Ok(Token::Number(1.0)));
/// assert_eq!(scanner.next_token(), Ok(Token::EndOfFile));
/// ```
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    pub(super) options: ScanOptions,

    /// Starting byte offset of the current token.
    pub(super) token_start: usize,

    /// Line number where the current token starts (1-based).
    pub(super) token_start_line: u32,

    /// Column number where the current token starts (1-based).
    pub(super) token_start_column: u32,

    /// Whether a token other than end-of-line has been produced on the
    /// current line. A comment alone on its line swallows its newline.
    pub(super) line_has_token: bool,

    /// Whether a leading byte order mark has been checked for.
    pub(super) bom_checked: bool,

    state: State,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner with default options.
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, ScanOptions::default())
    }

    /// Creates a scanner with explicit options.
    pub fn with_options(source: &'a str, options: ScanOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            options,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            line_has_token: false,
            bom_checked: false,
            state: State::Scanning,
        }
    }

    /// Returns the next token.
    pub fn next_token(&mut self) -> ScanResult<Token> {
        self.next_lexeme().map(|lexeme| lexeme.token)
    }

    /// Returns the next token with its source slice and span.
    ///
    /// Once end of file has been returned, every further call returns it
    /// again. Once an error has been returned, every further call returns the
    /// same error.
    pub fn next_lexeme(&mut self) -> ScanResult<Lexeme<'a>> {
        match &self.state {
            State::Failed(error) => return Err(error.clone()),
            State::Finished => {
                self.mark_token_start();
                return Ok(self.lexeme(Token::EndOfFile));
            },
            State::Scanning => {},
        }

        match self.scan_lexeme() {
            Ok(lexeme) => {
                if lexeme.token.is_eof() {
                    self.state = State::Finished;
                }
                trace!(
                    tag = %lexeme.token.tag(),
                    text = lexeme.text,
                    line = lexeme.span.line,
                    column = lexeme.span.column,
                    "token"
                );
                Ok(lexeme)
            },
            Err(error) => {
                self.state = State::Failed(error.clone());
                Err(error)
            },
        }
    }

    fn scan_lexeme(&mut self) -> ScanResult<Lexeme<'a>> {
        self.skip_whitespace_and_comments()?;
        self.mark_token_start();

        let Some(c) = self.cursor.advance() else {
            return Ok(self.lexeme(Token::EndOfFile));
        };

        let token = match c {
            '\n' => Token::EndOfLine,
            '=' | '<' | '>' | '~' => self.lex_comparison(c)?,
            '.' => self.lex_dot()?,
            '"' | '\'' => self.lex_string(c)?,
            c if c.is_ascii_digit() => self.lex_number(c)?,
            c if is_name_start(c) => self.lex_name(),
            c => match Self::single_char_symbol(c) {
                Some(symbol) => Token::Symbol(symbol),
                None => return Err(self.invalid_character(c)),
            },
        };

        self.line_has_token = token != Token::EndOfLine;
        Ok(self.lexeme(token))
    }

    fn mark_token_start(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    fn lexeme(&self, token: Token) -> Lexeme<'a> {
        Lexeme {
            token,
            text: self.cursor.slice_from(self.token_start),
            span: self.token_span(),
        }
    }

    /// Span from the current token start to the cursor.
    pub(super) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Span of the character just consumed, which must be on the current line.
    pub(super) fn last_char_span(&self, c: char) -> Span {
        let end = self.cursor.position();
        Span::new(end - c.len_utf8(), end, self.cursor.line(), self.cursor.column() - 1)
    }

    /// Span of the character at the cursor, empty at end of input.
    pub(super) fn current_char_span(&self) -> Span {
        let start = self.cursor.position();
        let len = self.cursor.current_char().map_or(0, char::len_utf8);
        Span::new(start, start + len, self.cursor.line(), self.cursor.column())
    }

    pub(super) fn invalid_character(&self, c: char) -> ScanError {
        ScanError::InvalidCharacter {
            found: c,
            span: self.last_char_span(c),
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = ScanResult<Token>;

    /// Yields every token including the final [`Token::EndOfFile`], or the
    /// first error, and then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Scanning => Some(self.next_token()),
            State::Finished | State::Failed(_) => None,
        }
    }
}

impl FusedIterator for Scanner<'_> {}
