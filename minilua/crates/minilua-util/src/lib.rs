//! minilua-util - Shared foundation types for the MiniLua front end
//!
//! This crate holds the pieces every MiniLua tool needs regardless of which
//! compilation phase it sits in:
//!
//! - [`span`] - byte ranges with line/column information
//! - [`source_map`] - source files with precomputed line tables
//! - [`diagnostic`] - user-facing error rendering with source snippets
//! - [`error`] - error types for this crate
//!
//! # Example
//!
//! ```
//! use minilua_util::{Diagnostic, SourceFile, Span};
//!
//! let file = SourceFile::new(0, "demo.lua", "x = 1 ~ 2\n");
//! let diag = Diagnostic::error("invalid character '~'")
//!     .with_span(Span::new(6, 7, 1, 7))
//!     .with_note("did you mean '~='?");
//!
//! let rendered = diag.render(&file);
//! assert!(rendered.contains("demo.lua:1:7"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod error;
pub mod source_map;
pub mod span;

pub use diagnostic::{Diagnostic, Level};
pub use error::{SourceMapError, SourceMapResult};
pub use source_map::{SourceFile, SourceMap};
pub use span::{FileId, Span};
