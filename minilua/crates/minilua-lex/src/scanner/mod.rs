//! Scanner module.
//!
//! The scanner is one state machine over one cursor; its parts live in
//! separate files but all extend the same [`Scanner`] type:
//! - `core` - Scanner struct, token loop and dispatch
//! - `comment` - whitespace and comment skipping
//! - `operator` - operator and punctuation lexing
//! - `number` - numeric literal lexing
//! - `string` - quoted string lexing and escapes
//! - `name` - name and reserved word lexing

mod comment;
mod core;
mod name;
mod number;
mod operator;
mod string;

pub use self::core::{Lexeme, Scanner};
