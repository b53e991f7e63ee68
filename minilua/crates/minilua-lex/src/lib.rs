//! minilua-lex - Lexical Scanner for MiniLua
//!
//! This crate turns MiniLua source text into a sequence of classified
//! tokens. Comments and inline whitespace are discarded; newlines are kept
//! as [`Token::EndOfLine`] because the language is line-sensitive.
//!
//! # Example Usage
//!
//! ```
//! use minilua_lex::{scan, ReservedWord, Symbol, Token};
//!
//! let tokens = scan("local x = 0x1F\n").unwrap();
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::Reserved(ReservedWord::Local),
//!         Token::Name("x".to_string()),
//!         Token::Symbol(Symbol::Assign),
//!         Token::Number(31.0),
//!         Token::EndOfLine,
//!         Token::EndOfFile,
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`scanner`] - The scanner state machine
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Scan failures
//! - [`listing`] - `[TAG] text` rendering of a token stream
//!
//! # Token Categories
//!
//! - **Reserved words** (21): `and`, `break`, `do`, `else`, `elseif`, `end`,
//!   `false`, `for`, `function`, `if`, `in`, `local`, `nil`, `not`, `or`,
//!   `repeat`, `return`, `then`, `true`, `until`, `while`
//! - **Numbers**: `42`, `0x1F`, `3.14`, `.5`, `1e-3`, all stored as `f64`
//! - **Strings**: `"..."` or `'...'` with escapes `\\`, `\n`, `\'`, `\"`
//! - **Symbols**: `+ - * / % ^ # == >= <= < > ~= ( ) { } [ ] ; : , . .. ... =`
//! - **Names**: `[A-Za-z_][A-Za-z0-9_]*` that is not a reserved word
//!
//! # Errors
//!
//! The first malformed token aborts the scan with a [`ScanError`]. There is
//! no recovery.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod listing;
pub mod options;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod edge_cases;

use tracing::debug;

pub use cursor::Cursor;
pub use error::{LiteralKind, ScanError, ScanErrorKind, ScanResult};
pub use listing::{render_listing, write_listing};
pub use options::ScanOptions;
pub use scanner::{Lexeme, Scanner};
pub use token::{ReservedWord, Symbol, Token, TokenTag};

/// Scans `source` to completion with default options.
///
/// On success the last token is always [`Token::EndOfFile`].
pub fn scan(source: &str) -> ScanResult<Vec<Token>> {
    scan_with(source, ScanOptions::default())
}

/// Scans `source` to completion with explicit options.
pub fn scan_with(source: &str, options: ScanOptions) -> ScanResult<Vec<Token>> {
    Ok(scan_lexemes_with(source, options)?
        .into_iter()
        .map(|lexeme| lexeme.token)
        .collect())
}

/// Scans `source` keeping each token's source slice and span.
pub fn scan_lexemes(source: &str) -> ScanResult<Vec<Lexeme<'_>>> {
    scan_lexemes_with(source, ScanOptions::default())
}

/// Scans `source` with explicit options, keeping source slices and spans.
pub fn scan_lexemes_with(source: &str, options: ScanOptions) -> ScanResult<Vec<Lexeme<'_>>> {
    let mut scanner = Scanner::with_options(source, options);
    let mut lexemes = Vec::new();

    loop {
        match scanner.next_lexeme() {
            Ok(lexeme) => {
                let done = lexeme.token.is_eof();
                lexemes.push(lexeme);
                if done {
                    break;
                }
            },
            Err(error) => {
                debug!(%error, tokens = lexemes.len(), "scan failed");
                return Err(error);
            },
        }
    }

    debug!(tokens = lexemes.len(), bytes = source.len(), "scan finished");
    Ok(lexemes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Token {
        Token::Name(s.to_string())
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(scan("").unwrap(), vec![Token::EndOfFile]);
        assert_eq!(scan("   \t ").unwrap(), vec![Token::EndOfFile]);
    }

    #[test]
    fn test_simple_assignment() {
        assert_eq!(
            scan("x = 1").unwrap(),
            vec![
                name("x"),
                Token::Symbol(Symbol::Assign),
                Token::Number(1.0),
                Token::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_greedy_operators() {
        assert_eq!(
            scan("a>=b").unwrap(),
            vec![
                name("a"),
                Token::Symbol(Symbol::GreaterEqual),
                name("b"),
                Token::EndOfFile,
            ]
        );
        assert_eq!(
            scan("a...b..c.d").unwrap(),
            vec![
                name("a"),
                Token::Symbol(Symbol::Ellipsis),
                name("b"),
                Token::Symbol(Symbol::Concat),
                name("c"),
                Token::Symbol(Symbol::Dot),
                name("d"),
                Token::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_every_result_ends_with_one_eof() {
        for source in ["", "x", "x\n", "-- c\n", "a = { 1, 2 }\nreturn a\n"] {
            let tokens = scan(source).unwrap();
            assert_eq!(tokens.last(), Some(&Token::EndOfFile), "{:?}", source);
            assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        }
    }

    #[test]
    fn test_one_eol_per_newline_outside_comments() {
        let source = "a\n\nb = 'x\ny'\n\n";
        let eols = scan(source)
            .unwrap()
            .into_iter()
            .filter(|t| *t == Token::EndOfLine)
            .count();
        assert_eq!(eols, 4);
    }

    #[test]
    fn test_lone_tilde() {
        let err = scan("a ~ b").unwrap_err();
        assert_eq!(err.kind(), ScanErrorKind::InvalidCharacter);
        assert!(err.hint().unwrap().contains("~="));
    }

    #[test]
    fn test_scan_with_options() {
        let options = ScanOptions::default().allow_unterminated_comment(true);
        assert_eq!(
            scan_with("x -- trailing", options).unwrap(),
            vec![name("x"), Token::EndOfFile]
        );
        assert!(scan("x -- trailing").is_err());
    }

    #[test]
    fn test_lexemes_match_tokens() {
        let source = "function f(a, ...) return a .. 'z' end\n";
        let tokens = scan(source).unwrap();
        let lexemes = scan_lexemes(source).unwrap();
        assert_eq!(tokens.len(), lexemes.len());
        for (token, lexeme) in tokens.iter().zip(&lexemes) {
            assert_eq!(token, &lexeme.token);
            assert_eq!(&source[lexeme.span.start..lexeme.span.end], lexeme.text);
        }
    }
}
