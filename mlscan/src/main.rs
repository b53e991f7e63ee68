//! mlscan CLI - token dump and check tool for MiniLua sources.
//!
//! This is the main entry point for the mlscan CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_tokens, CheckArgs, TokensArgs};
use config::{Config, OutputFormat};
use error::MlscanError;

/// mlscan - scan MiniLua sources into tokens
///
/// Prints token streams for inspection and checks whole source trees for
/// lexical errors.
#[derive(Parser, Debug)]
#[command(name = "mlscan")]
#[command(author = "MiniLua Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Token dump and check tool for MiniLua sources", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "MLSCAN_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MLSCAN_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "MLSCAN_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the mlscan CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of each input
    ///
    /// Reads standard input when no files are given or a file is `-`.
    Tokens(TokensCommand),

    /// Scan inputs in parallel and report which ones fail
    ///
    /// Prints one summary line per clean file and a diagnostic for each
    /// failing one. Exits non-zero if any input failed.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Input files
    files: Vec<PathBuf>,

    /// Output format (listing, json, debug)
    #[arg(short = 'F', long)]
    format: Option<OutputFormat>,

    /// Accept a final comment with no trailing newline
    #[arg(long)]
    allow_unterminated_comment: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Input files
    files: Vec<PathBuf>,

    /// Number of parallel jobs
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    jobs: Option<u16>,

    /// Accept a final comment with no trailing newline
    #[arg(long)]
    allow_unterminated_comment: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<MlscanError>() {
                Some(MlscanError::Scan { rendered, .. }) => eprint!("{}", rendered),
                _ => eprintln!("error: {:#}", err),
            }
            ExitCode::FAILURE
        },
    }
}

/// Initializes logging, loads configuration, and runs the selected command.
fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token output.
fn init_logging(verbose: bool, no_color: bool) -> error::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| MlscanError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    let config = match config_path {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("while loading --config {}", path.display()))?,
        None => Config::load()?,
    };
    Ok(config)
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> anyhow::Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Check(args) => execute_check(args, config),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, config: Config) -> anyhow::Result<()> {
    let mut options = config.scan;
    if args.allow_unterminated_comment {
        options = options.allow_unterminated_comment(true);
    }

    let tokens_args = TokensArgs {
        files: args.files,
        format: args.format.unwrap_or(config.format),
        options,
    };
    let stdout = io::stdout();
    run_tokens(&tokens_args, &mut stdout.lock())?;
    Ok(())
}

/// Execute the check command.
fn execute_check(args: CheckCommand, config: Config) -> anyhow::Result<()> {
    let mut options = config.scan;
    if args.allow_unterminated_comment {
        options = options.allow_unterminated_comment(true);
    }

    let check_args = CheckArgs {
        files: args.files,
        jobs: args.jobs.map_or(config.jobs, usize::from),
        options,
    };
    run_check(&check_args, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(())
}
