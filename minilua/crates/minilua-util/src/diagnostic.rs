//! User-facing diagnostics.
//!
//! A [`Diagnostic`] is a message plus an optional primary [`Span`] and any
//! number of attached notes. Rendering it against the [`SourceFile`] it
//! refers to produces the familiar compiler layout:
//!
//! ```text
//! error: invalid character '~'
//!    --> demo.lua:1:7
//!     |
//!   1 | x = 1 ~ 2
//!     |       ^
//!     = note: did you mean '~='?
//! ```

use std::fmt;

use crate::source_map::SourceFile;
use crate::span::Span;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use minilua_util::Level;
///
/// assert_eq!(Level::Error.to_string(), "error");
/// assert!(Level::Error.is_error());
/// assert!(!Level::Note.is_error());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// A problem that stops the current phase
    Error,
    /// Additional information, attached to or standing beside an error
    Note,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// The lowercase label printed before the message
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Note => "note",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single diagnostic message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity
    pub level: Level,
    /// Main message, without the level prefix
    pub message: String,
    /// Primary location, if the diagnostic points at source text
    pub span: Option<Span>,
    /// Notes printed after the snippet
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a diagnostic with no span and no notes
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: None,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Attach the primary span
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Render the diagnostic with a source snippet taken from `file`.
    ///
    /// The caret underline covers the span's characters on its first line,
    /// and is never shorter than one caret so empty spans (end of input) stay
    /// visible.
    pub fn render(&self, file: &SourceFile) -> String {
        let mut out = format!("{}: {}\n", self.level, self.message);

        let gutter = match self.span {
            Some(span) => {
                // The span's own position wins: it does not count a leading BOM.
                let (line, column) = if span.line > 0 && span.column > 0 {
                    (span.line as usize, span.column as usize)
                } else {
                    file.offset_to_line_col(span.start)
                };
                let width = line.to_string().len().max(3);
                let text = file.line_at(line).unwrap_or("");
                let text = if line == 1 {
                    text.strip_prefix('\u{FEFF}').unwrap_or(text)
                } else {
                    text
                };

                out.push_str(&format!(
                    "{:>width$}--> {}:{}:{}\n",
                    "",
                    file.name(),
                    line,
                    column,
                    width = width
                ));
                out.push_str(&format!("{:>width$} |\n", "", width = width));
                out.push_str(&format!("{:>width$} | {}\n", line, text, width = width));

                let available = text.chars().count().saturating_sub(column - 1);
                let spanned = file
                    .extract_range(span.start, span.end)
                    .map_or(0, |s| s.chars().take_while(|&c| c != '\n').count());
                let carets = spanned.min(available).max(1);
                out.push_str(&format!(
                    "{:>width$} | {}{}\n",
                    "",
                    " ".repeat(column - 1),
                    "^".repeat(carets),
                    width = width
                ));
                width
            },
            None => 3,
        };

        for note in &self.notes {
            out.push_str(&format!(
                "{:>width$} = {}: {}\n",
                "",
                Level::Note,
                note,
                width = gutter
            ));
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)?;
        if let Some(span) = self.span {
            write!(f, " at {}:{}", span.line, span.column)?;
        }
        Ok(())
    }
}
