//! Whitespace and comment skipping.

use minilua_util::Span;

use crate::error::{LiteralKind, ScanError, ScanResult};
use crate::scanner::Scanner;

impl<'a> Scanner<'a> {
    /// Skips inline whitespace and `--` comments before a token.
    ///
    /// Newlines are left in place since they are tokens themselves, except
    /// that a comment standing alone on its line also consumes the newline
    /// that ends it.
    pub(super) fn skip_whitespace_and_comments(&mut self) -> ScanResult<()> {
        if !self.bom_checked {
            self.bom_checked = true;
            self.cursor.skip_bom();
        }

        loop {
            self.cursor.skip_inline_whitespace();
            if self.cursor.current_char() == Some('-') && self.cursor.peek_char(1) == Some('-') {
                self.skip_line_comment()?;
            } else {
                return Ok(());
            }
        }
    }

    fn skip_line_comment(&mut self) -> ScanResult<()> {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();

        self.cursor.eat_while(|c| c != '\n');

        if self.cursor.is_at_end() {
            if self.options.allow_unterminated_comment {
                return Ok(());
            }
            return Err(ScanError::UnterminatedLiteral {
                kind: LiteralKind::Comment,
                span: Span::new(start, self.cursor.position(), line, column),
            });
        }

        if !self.line_has_token {
            self.cursor.advance();
        }
        Ok(())
    }
}
