//! Common types and utilities for mlscan commands.
//!
//! Input resolution (files or stdin), source loading, and rendering of scan
//! failures as source diagnostics.

use std::io::Read;
use std::path::{Path, PathBuf};

use minilua_lex::{scan_lexemes_with, Lexeme, ScanError, ScanOptions};
use minilua_util::{Diagnostic, SourceFile};

use crate::error::{MlscanError, Result};

/// Display name used for standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Where one input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input, selected by no arguments or by `-`
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Name shown in headers, summaries and diagnostics.
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => STDIN_NAME.to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Reads the whole input as UTF-8 text.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Stdin => {
                let mut content = String::new();
                std::io::stdin().read_to_string(&mut content)?;
                Ok(content)
            },
            Self::File(path) => read_file(path),
        }
    }
}

/// Maps command line file arguments to inputs. No arguments means stdin.
pub fn collect_inputs(files: &[PathBuf]) -> Vec<InputSource> {
    if files.is_empty() {
        return vec![InputSource::Stdin];
    }
    files
        .iter()
        .map(|path| {
            if path.as_os_str() == "-" {
                InputSource::Stdin
            } else {
                InputSource::File(path.clone())
            }
        })
        .collect()
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(MlscanError::Validation(format!(
            "Input path does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(MlscanError::Validation(format!(
            "Input path is not a file: {}",
            path.display()
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Scans a loaded file, turning a failure into a rendered diagnostic.
pub fn scan_file<'a>(file: &'a SourceFile, options: ScanOptions) -> Result<Vec<Lexeme<'a>>> {
    scan_lexemes_with(file.content(), options).map_err(|err| MlscanError::Scan {
        name: file.name().to_string(),
        rendered: render_scan_error(file, &err),
    })
}

/// Renders `err` against the file it came from.
pub fn render_scan_error(file: &SourceFile, err: &ScanError) -> String {
    let mut diagnostic = Diagnostic::error(err.to_string())
        .with_span(err.span())
        .with_note(err.kind().to_string());
    if let Some(hint) = err.hint() {
        diagnostic = diagnostic.with_note(hint);
    }
    diagnostic.render(file)
}
