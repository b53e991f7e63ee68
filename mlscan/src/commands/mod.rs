//! Command modules for the mlscan CLI.
//!
//! Each subcommand lives in its own file; shared input handling is in
//! `common`.

pub mod common;

pub mod check;
pub mod tokens;

pub use check::{run_check, CheckArgs};
pub use tokens::{run_tokens, TokensArgs};
