//! Scanner configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Knobs that change how strictly the scanner treats its input.
///
/// The defaults are the strict behavior.
///
/// # Example
///
/// ```
/// use minilua_lex::{scan_with, ScanOptions};
///
/// let lenient = ScanOptions::default().allow_unterminated_comment(true);
/// assert!(scan_with("x = 1 -- no newline", lenient).is_ok());
/// assert!(scan_with("x = 1 -- no newline", ScanOptions::default()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScanOptions {
    /// Let end of input close a `--` comment that has no trailing newline.
    /// When false such a comment is an unterminated literal.
    pub allow_unterminated_comment: bool,
}

impl ScanOptions {
    /// Sets [`ScanOptions::allow_unterminated_comment`].
    pub fn allow_unterminated_comment(mut self, allow: bool) -> Self {
        self.allow_unterminated_comment = allow;
        self
    }
}
