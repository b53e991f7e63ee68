//! Tokens command implementation.
//!
//! Scans each input and prints its token stream as a listing, JSON, or
//! debug dump.

use std::io::Write;
use std::path::PathBuf;

use minilua_lex::{write_listing, Lexeme, ScanOptions, Token, TokenTag};
use minilua_util::SourceFile;
use serde::Serialize;
use tracing::debug;

use crate::commands::common::{collect_inputs, scan_file};
use crate::config::OutputFormat;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Files to scan; empty or `-` reads stdin.
    pub files: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Scanner options.
    pub options: ScanOptions,
}

/// One token in the JSON output.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    tag: TokenTag,
    text: &'a str,
    value: serde_json::Value,
    line: u32,
    column: u32,
}

impl<'a> From<&Lexeme<'a>> for TokenRecord<'a> {
    fn from(lexeme: &Lexeme<'a>) -> Self {
        let value = match &lexeme.token {
            Token::Reserved(word) => serde_json::Value::from(word.as_str()),
            Token::Number(n) => serde_json::Value::from(*n),
            Token::String(s) | Token::Name(s) => serde_json::Value::from(s.as_str()),
            Token::Symbol(symbol) => serde_json::Value::from(symbol.as_str()),
            Token::EndOfLine | Token::EndOfFile => serde_json::Value::Null,
        };
        Self {
            tag: lexeme.token.tag(),
            text: lexeme.text,
            value,
            line: lexeme.span.line,
            column: lexeme.span.column,
        }
    }
}

/// Runs the tokens command, writing to `out`.
///
/// Stops at the first input that fails to read or scan.
pub fn run_tokens(args: &TokensArgs, out: &mut impl Write) -> Result<()> {
    let inputs = collect_inputs(&args.files);
    let with_headers = inputs.len() > 1;

    for (index, input) in inputs.iter().enumerate() {
        let file = SourceFile::new(index, input.name(), input.read()?);
        let lexemes = scan_file(&file, args.options)?;
        debug!(file = file.name(), tokens = lexemes.len(), "scanned");

        if with_headers {
            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "==> {} <==", file.name())?;
        }
        write_tokens(out, &lexemes, args.format)?;
    }

    out.flush()?;
    Ok(())
}

fn write_tokens(out: &mut impl Write, lexemes: &[Lexeme<'_>], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Listing => write_listing(out, lexemes)?,
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = lexemes.iter().map(TokenRecord::from).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        },
        OutputFormat::Debug => {
            for lexeme in lexemes {
                writeln!(out, "{:?}", lexeme.token)?;
            }
        },
    }
    Ok(())
}
