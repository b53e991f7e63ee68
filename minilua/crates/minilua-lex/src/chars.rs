//! Character classes used by the scanner.
//!
//! MiniLua identifiers are ASCII-only; everything here is deliberately
//! narrower than the Unicode identifier rules.

/// Returns true if `c` can start a name.
///
/// ```
/// use minilua_lex::chars::is_name_start;
///
/// assert!(is_name_start('_'));
/// assert!(is_name_start('Z'));
/// assert!(!is_name_start('1'));
/// assert!(!is_name_start('é'));
/// ```
#[inline]
pub fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` can continue a name.
#[inline]
pub fn is_name_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Whitespace skipped between tokens: everything except `\n`.
#[inline]
pub fn is_inline_whitespace(c: char) -> bool {
    c != '\n' && c.is_whitespace()
}

/// Hexadecimal digit, either case.
#[inline]
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}
