//! Number literal lexing.
//!
//! A single forward pass with no backtracking. Every literal becomes an
//! `f64`, whatever its source form.

use crate::chars::is_hex_digit;
use crate::error::{ScanError, ScanResult};
use crate::scanner::Scanner;
use crate::token::Token;

impl<'a> Scanner<'a> {
    /// Lexes a number literal whose first character has been consumed.
    ///
    /// `first` is either a decimal digit or the `.` of a leading-dot float.
    ///
    /// # Number Formats
    ///
    /// - Decimal integer: `0`, `42`
    /// - Hexadecimal integer: `0x1F`, `0Xff`
    /// - Float: `3.14`, `.5`, `5.`
    /// - Scientific: `1e3`, `2.5E-3`, `1e+10`
    pub(super) fn lex_number(&mut self, first: char) -> ScanResult<Token> {
        let hex = first == '0' && (self.cursor.match_char('x') || self.cursor.match_char('X'));
        let mut floating = first == '.';
        let mut science = false;
        let mut mantissa_digits = !hex;
        let mut exponent_sign = false;
        let mut exponent_digits = false;

        while let Some(c) = self.cursor.current_char() {
            match c {
                '0'..='9' => {
                    if science {
                        exponent_digits = true;
                    } else {
                        mantissa_digits = true;
                    }
                },
                'e' | 'E' if !hex => {
                    if science {
                        return Err(self.invalid_number_here());
                    }
                    floating = true;
                    science = true;
                },
                c if hex && is_hex_digit(c) => mantissa_digits = true,
                '.' => {
                    if hex || floating {
                        return Err(self.invalid_number_here());
                    }
                    floating = true;
                },
                '+' | '-' if science && !exponent_sign && !exponent_digits => {
                    exponent_sign = true;
                },
                'a'..='f' | 'A'..='F' if !hex => return Err(self.invalid_number_here()),
                c if hex && c.is_ascii_alphabetic() => return Err(self.invalid_number_here()),
                // Anything else ends the literal.
                _ => break,
            }
            self.cursor.advance();
        }

        if !mantissa_digits || (science && !exponent_digits) {
            return Err(self.invalid_number_here());
        }

        let text = self.cursor.slice_from(self.token_start);
        let value = if hex {
            u64::from_str_radix(&text[2..], 16).ok().map(|v| v as f64)
        } else if floating {
            text.parse::<f64>().ok()
        } else {
            text.parse::<u64>()
                .map(|v| v as f64)
                .or_else(|_| text.parse::<f64>())
                .ok()
        };

        match value {
            Some(value) if value.is_finite() => Ok(Token::Number(value)),
            _ => Err(ScanError::InvalidNumber {
                text: text.to_string(),
                found: None,
                span: self.token_span(),
            }),
        }
    }

    /// Error for a literal that cannot continue with the character at the
    /// cursor.
    fn invalid_number_here(&self) -> ScanError {
        ScanError::InvalidNumber {
            text: self.cursor.slice_from(self.token_start).to_string(),
            found: self.cursor.current_char(),
            span: self.current_char_span(),
        }
    }
}
