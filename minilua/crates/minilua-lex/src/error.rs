//! Scan errors.
//!
//! Every failure is fatal to the scan: the scanner reports the first problem
//! and stops. Each variant carries the [`Span`] of the offending text so the
//! caller can point at it.

use std::fmt;

use minilua_util::Span;
use thiserror::Error;

/// What kind of literal was left open at end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// A quoted string
    String,
    /// A `--` comment with no closing newline
    Comment,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LiteralKind::String => "string",
            LiteralKind::Comment => "comment",
        })
    }
}

/// Payload-free classification of a [`ScanError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanErrorKind {
    /// See [`ScanError::InvalidCharacter`]
    InvalidCharacter,
    /// See [`ScanError::InvalidNumber`]
    InvalidNumber,
    /// See [`ScanError::InvalidEscape`]
    InvalidEscape,
    /// See [`ScanError::UnterminatedLiteral`]
    UnterminatedLiteral,
}

impl fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScanErrorKind::InvalidCharacter => "invalid character",
            ScanErrorKind::InvalidNumber => "invalid number",
            ScanErrorKind::InvalidEscape => "invalid escape",
            ScanErrorKind::UnterminatedLiteral => "unterminated literal",
        })
    }
}

/// A fatal scan failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A character that begins no token, including a `~` not followed by `=`.
    #[error("invalid character {found:?} at {}:{}", .span.line, .span.column)]
    InvalidCharacter {
        /// The rejected character.
        found: char,
        /// Location of the character.
        span: Span,
    },

    /// A malformed numeric literal. `text` is the literal up to the failure
    /// point; `found` is the offending character, `None` at end of input or
    /// when the literal is well-formed but unrepresentable.
    #[error("malformed number {text:?}{} at {}:{}", describe_found(.found), .span.line, .span.column)]
    InvalidNumber {
        /// Literal text consumed before the failure.
        text: String,
        /// Offending character, if any.
        found: Option<char>,
        /// Location of the offending character, or of the whole literal.
        span: Span,
    },

    /// An escape sequence outside the supported set.
    #[error("unsupported escape sequence '\\{found}' at {}:{}", .span.line, .span.column)]
    InvalidEscape {
        /// Character after the backslash.
        found: char,
        /// Location of the escape sequence.
        span: Span,
    },

    /// End of input reached inside a string or comment.
    #[error("unterminated {kind} starting at {}:{}", .span.line, .span.column)]
    UnterminatedLiteral {
        /// Which construct was left open.
        kind: LiteralKind,
        /// From the opening delimiter to end of input.
        span: Span,
    },
}

fn describe_found(found: &Option<char>) -> String {
    match found {
        Some(c) => format!(" near {:?}", c),
        None => String::new(),
    }
}

impl ScanError {
    /// Location of the offending text.
    pub fn span(&self) -> Span {
        match self {
            ScanError::InvalidCharacter { span, .. }
            | ScanError::InvalidNumber { span, .. }
            | ScanError::InvalidEscape { span, .. }
            | ScanError::UnterminatedLiteral { span, .. } => *span,
        }
    }

    /// Failure class, without payload.
    pub fn kind(&self) -> ScanErrorKind {
        match self {
            ScanError::InvalidCharacter { .. } => ScanErrorKind::InvalidCharacter,
            ScanError::InvalidNumber { .. } => ScanErrorKind::InvalidNumber,
            ScanError::InvalidEscape { .. } => ScanErrorKind::InvalidEscape,
            ScanError::UnterminatedLiteral { .. } => ScanErrorKind::UnterminatedLiteral,
        }
    }

    /// Short hint for the user, suitable as a diagnostic note.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ScanError::InvalidCharacter { found: '~', .. } => {
                Some("'~' is only valid as part of '~='")
            },
            ScanError::InvalidCharacter { .. } => None,
            ScanError::InvalidNumber { .. } => Some(
                "numbers are decimal (1, 1.5, .5, 1e-3) or hexadecimal integers (0x1F)",
            ),
            ScanError::InvalidEscape { .. } => {
                Some("supported escapes are \\\\, \\n, \\' and \\\"")
            },
            ScanError::UnterminatedLiteral {
                kind: LiteralKind::String,
                ..
            } => Some("add the closing quote"),
            ScanError::UnterminatedLiteral {
                kind: LiteralKind::Comment,
                ..
            } => Some("end the comment with a newline"),
        }
    }
}

/// Result type alias for scanning.
pub type ScanResult<T> = std::result::Result<T, ScanError>;
