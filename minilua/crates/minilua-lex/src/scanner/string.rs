//! Quoted string lexing.
//!
//! Strings open with `"` or `'` and run until the same quote recurs
//! unescaped. Raw newlines are kept as part of the value.

use minilua_util::Span;

use crate::error::{LiteralKind, ScanError, ScanResult};
use crate::scanner::Scanner;
use crate::token::Token;

impl<'a> Scanner<'a> {
    /// Lexes a string literal whose opening `quote` has been consumed.
    ///
    /// # Returns
    ///
    /// `Token::String` with escapes resolved
    pub(super) fn lex_string(&mut self, quote: char) -> ScanResult<Token> {
        let mut content = String::new();

        loop {
            match self.cursor.advance() {
                None => return Err(self.unterminated_string()),
                Some(c) if c == quote => break,
                Some('\\') => content.push(self.scan_escape()?),
                Some(c) => content.push(c),
            }
        }

        Ok(Token::String(content))
    }

    /// Resolves the escape after a consumed backslash.
    ///
    /// Handles: `\\`, `\n`, `\'`, `\"`
    fn scan_escape(&mut self) -> ScanResult<char> {
        let start = self.cursor.position() - 1;
        let line = self.cursor.line();
        let column = self.cursor.column() - 1;

        let Some(c) = self.cursor.advance() else {
            return Err(self.unterminated_string());
        };

        match c {
            '\\' => Ok('\\'),
            'n' => Ok('\n'),
            '\'' => Ok('\''),
            '"' => Ok('"'),
            _ => Err(ScanError::InvalidEscape {
                found: c,
                span: Span::new(start, self.cursor.position(), line, column),
            }),
        }
    }

    fn unterminated_string(&self) -> ScanError {
        ScanError::UnterminatedLiteral {
            kind: LiteralKind::String,
            span: self.token_span(),
        }
    }
}
