//! Operator and punctuation lexing.
//!
//! Two-character forms always win over their one-character prefix.

use crate::error::ScanResult;
use crate::scanner::Scanner;
use crate::token::{Symbol, Token};

impl<'a> Scanner<'a> {
    /// Maps punctuation that never needs lookahead.
    ///
    /// Handles: `+ - * / % ^ # ( ) { } [ ] ; : ,`
    pub(super) fn single_char_symbol(c: char) -> Option<Symbol> {
        let symbol = match c {
            '+' => Symbol::Add,
            '-' => Symbol::Minus,
            '*' => Symbol::Multiply,
            '/' => Symbol::Divide,
            '%' => Symbol::Mod,
            '^' => Symbol::Power,
            '#' => Symbol::Length,
            '(' => Symbol::LeftParen,
            ')' => Symbol::RightParen,
            '{' => Symbol::LeftBrace,
            '}' => Symbol::RightBrace,
            '[' => Symbol::LeftBracket,
            ']' => Symbol::RightBracket,
            ';' => Symbol::Semicolon,
            ':' => Symbol::Colon,
            ',' => Symbol::Comma,
            _ => return None,
        };
        Some(symbol)
    }

    /// Lexes an operator that may be followed by `=`.
    ///
    /// Handles: `=`, `==`, `<`, `<=`, `>`, `>=`, `~=`. A `~` on its own is
    /// not a MiniLua token.
    pub(super) fn lex_comparison(&mut self, first: char) -> ScanResult<Token> {
        let with_equals = self.cursor.match_char('=');
        let symbol = match (first, with_equals) {
            ('=', true) => Symbol::Equal,
            ('=', false) => Symbol::Assign,
            ('<', true) => Symbol::LessEqual,
            ('<', false) => Symbol::Less,
            ('>', true) => Symbol::GreaterEqual,
            ('>', false) => Symbol::Greater,
            ('~', true) => Symbol::NotEqual,
            _ => return Err(self.invalid_character(first)),
        };
        Ok(Token::Symbol(symbol))
    }

    /// Lexes dot, concat, ellipsis, or a number with a leading dot.
    ///
    /// Handles: `.`, `..`, `...`, `.5`
    pub(super) fn lex_dot(&mut self) -> ScanResult<Token> {
        if self.cursor.current_char().is_some_and(|c| c.is_ascii_digit()) {
            return self.lex_number('.');
        }
        let symbol = if !self.cursor.match_char('.') {
            Symbol::Dot
        } else if self.cursor.match_char('.') {
            Symbol::Ellipsis
        } else {
            Symbol::Concat
        };
        Ok(Token::Symbol(symbol))
    }
}
