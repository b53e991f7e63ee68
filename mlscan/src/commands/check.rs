//! Check command implementation.
//!
//! Scans many inputs in parallel and reports one summary per input. Inputs
//! are read up front (stdin at most once), then scanned on a rayon pool.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use minilua_lex::ScanOptions;
use minilua_util::{FileId, SourceFile, SourceMap};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::commands::common::{collect_inputs, scan_file};
use crate::error::{MlscanError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Files to check; empty or `-` reads stdin.
    pub files: Vec<PathBuf>,
    /// Number of worker threads.
    pub jobs: usize,
    /// Scanner options.
    pub options: ScanOptions,
}

/// Result of checking one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The input scanned cleanly.
    Ok {
        /// Display name of the input.
        name: String,
        /// Tokens before end of file.
        tokens: usize,
        /// Lines of source text.
        lines: usize,
    },
    /// The input could not be read or scanned.
    Failed {
        /// Display name of the input.
        name: String,
        /// Text to show the user.
        message: String,
    },
}

/// Runs the check command.
///
/// Summaries of clean inputs go to `out`, diagnostics to `err`. Returns an
/// error when any input failed.
pub fn run_check(args: &CheckArgs, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    let start_time = Instant::now();
    let outcomes = check_all(args)?;

    let mut failed = 0;
    for outcome in &outcomes {
        match outcome {
            CheckOutcome::Ok {
                name,
                tokens,
                lines,
            } => writeln!(out, "{}: ok ({} tokens, {} lines)", name, tokens, lines)?,
            CheckOutcome::Failed { name, message } => {
                failed += 1;
                writeln!(err, "{}: failed", name)?;
                write!(err, "{}", message)?;
            },
        }
    }
    out.flush()?;

    info!(
        files = outcomes.len(),
        failed,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "check finished"
    );

    if failed > 0 {
        return Err(MlscanError::Validation(format!(
            "{} of {} file(s) failed to scan",
            failed,
            outcomes.len()
        )));
    }
    Ok(())
}

enum Loaded {
    File(FileId),
    Unreadable(CheckOutcome),
}

/// Reads and scans every input, returning outcomes in input order.
pub fn check_all(args: &CheckArgs) -> Result<Vec<CheckOutcome>> {
    let mut source_map = SourceMap::new();
    let loaded: Vec<Loaded> = collect_inputs(&args.files)
        .iter()
        .map(|input| match input.read() {
            Ok(content) => Loaded::File(source_map.add_file(input.name(), content)),
            Err(e) => Loaded::Unreadable(CheckOutcome::Failed {
                name: input.name(),
                message: format!("error: {}\n", e),
            }),
        })
        .collect();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.jobs.max(1))
        .build()
        .map_err(|e| MlscanError::Config(format!("Failed to start worker pool: {}", e)))?;
    debug!(jobs = pool.current_num_threads(), files = source_map.file_count(), "checking");

    pool.install(|| {
        loaded
            .into_par_iter()
            .map(|entry| -> Result<CheckOutcome> {
                match entry {
                    Loaded::File(id) => Ok(check_file(&*source_map.get_file(id)?, args.options)),
                    Loaded::Unreadable(outcome) => Ok(outcome),
                }
            })
            .collect()
    })
}

fn check_file(file: &SourceFile, options: ScanOptions) -> CheckOutcome {
    match scan_file(file, options) {
        Ok(lexemes) => CheckOutcome::Ok {
            name: file.name().to_string(),
            tokens: lexemes.len().saturating_sub(1),
            lines: file.content().lines().count(),
        },
        Err(MlscanError::Scan { name, rendered }) => CheckOutcome::Failed {
            name,
            message: rendered,
        },
        Err(e) => CheckOutcome::Failed {
            name: file.name().to_string(),
            message: format!("error: {}\n", e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_files(dir: &TempDir, files: &[(&str, &str)]) -> Vec<PathBuf> {
        files
            .iter()
            .map(|(name, content)| {
                let path = dir.path().join(name);
                std::fs::write(&path, content).unwrap();
                path
            })
            .collect()
    }

    fn args(files: Vec<PathBuf>, jobs: usize) -> CheckArgs {
        CheckArgs {
            files,
            jobs,
            options: ScanOptions::default(),
        }
    }

    #[test]
    fn test_check_all_keeps_input_order() {
        let dir = TempDir::new().unwrap();
        let mut files = write_files(
            &dir,
            &[("a.lua", "x = 1\ny = 2\n"), ("b.lua", "x = $\n"), ("c.lua", "")],
        );
        files.insert(1, dir.path().join("missing.lua"));

        let outcomes = check_all(&args(files.clone(), 4)).unwrap();
        assert_eq!(outcomes.len(), 4);
        assert_eq!(
            outcomes[0],
            CheckOutcome::Ok {
                name: files[0].display().to_string(),
                tokens: 8,
                lines: 2,
            }
        );
        assert!(matches!(&outcomes[1], CheckOutcome::Failed { message, .. } if message.contains("does not exist")));
        assert!(matches!(&outcomes[2], CheckOutcome::Failed { message, .. } if message.contains("invalid character")));
        assert_eq!(
            outcomes[3],
            CheckOutcome::Ok {
                name: files[3].display().to_string(),
                tokens: 0,
                lines: 0,
            }
        );
    }

    #[test]
    fn test_run_check_success() {
        let dir = TempDir::new().unwrap();
        let files = write_files(&dir, &[("ok.lua", "return 1\n")]);

        let mut out = Vec::new();
        let mut err = Vec::new();
        run_check(&args(files.clone(), 1), &mut out, &mut err).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}: ok (3 tokens, 1 lines)\n", files[0].display())
        );
        assert!(err.is_empty());
    }

    #[test]
    fn test_run_check_failure() {
        let dir = TempDir::new().unwrap();
        let files = write_files(&dir, &[("ok.lua", "x\n"), ("bad.lua", "s = 'open\n")]);

        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = run_check(&args(files, 2), &mut out, &mut err);

        assert!(matches!(result, Err(MlscanError::Validation(ref m)) if m == "1 of 2 file(s) failed to scan"));
        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("bad.lua: failed"));
        assert!(err.contains("error: unterminated string starting at 1:5"));
    }

    #[test]
    fn test_check_all_reports_bom_position() {
        let dir = TempDir::new().unwrap();
        let files = write_files(&dir, &[("bom.lua", "\u{FEFF}x = $\n")]);

        let outcomes = check_all(&args(files, 1)).unwrap();
        match &outcomes[0] {
            CheckOutcome::Failed { message, .. } => {
                assert!(message.contains("at 1:5"));
                assert!(message.contains("bom.lua:1:5"));
            },
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
