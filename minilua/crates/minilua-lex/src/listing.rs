//! Reference textual rendering of a token stream.
//!
//! One line per token, `<TAG> <source-slice>`. End of line prints as a bare
//! `[EOL]` and end of file is not printed at all:
//!
//! ```text
//! [RESERVED] local
//! [NAME] x
//! [SYMBOL] =
//! [NUMBER] 0x1F
//! [EOL]
//! ```

use std::io;

use crate::scanner::Lexeme;
use crate::token::Token;

/// Writes the listing for `lexemes` to `out`.
pub fn write_listing<W: io::Write>(out: &mut W, lexemes: &[Lexeme<'_>]) -> io::Result<()> {
    for lexeme in lexemes {
        match lexeme.token {
            Token::EndOfFile => {},
            Token::EndOfLine => writeln!(out, "{}", lexeme.token.tag())?,
            _ => writeln!(out, "{} {}", lexeme.token.tag(), lexeme.text)?,
        }
    }
    Ok(())
}

/// Renders the listing for `lexemes` into a string.
///
/// # Example
///
/// ```
/// use minilua_lex::{render_listing, scan_lexemes};
///
/// let lexemes = scan_lexemes("x = 'hi'\n").unwrap();
/// assert_eq!(render_listing(&lexemes), "[NAME] x\n[SYMBOL] =\n[STRING] 'hi'\n[EOL]\n");
/// ```
pub fn render_listing(lexemes: &[Lexeme<'_>]) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_listing(&mut out, lexemes);
    String::from_utf8_lossy(&out).into_owned()
}
