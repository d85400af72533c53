//! `minidesk` command line entry point.
//!
//! # Responsibility
//! - Parse flags, optionally start file logging, and run one shell.
//! - Map shell failures to exit code 1.
//!
//! # Invariants
//! - Buffered log events are flushed on every exit path after logging starts.
//! - Error events carry `ShellError::kind`, never the offending input.

use clap::{Parser, Subcommand};
use log::{error, info};
use minidesk_core::{
    default_log_level, flush_logging, init_logging, parse_log_level, Library, LibraryShell,
    ShellResult, TaskManager, TaskShell,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_LIBRARY_NAME: &str = "Community Library";

/// Console library lending and task tracking.
#[derive(Parser, Debug)]
#[command(name = "minidesk", version)]
struct Cli {
    /// Absolute directory for rolling log files; logging stays off when omitted
    #[arg(long, global = true, value_name = "PATH")]
    log_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error (needs --log-dir)
    #[arg(long, global = true, value_name = "LEVEL", value_parser = parse_log_level)]
    log_level: Option<&'static str>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the library lending menu
    Library {
        /// Display name of the library
        #[arg(long, default_value = DEFAULT_LIBRARY_NAME)]
        name: String,
    },
    /// Run the task tracker menu
    Tasks,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(cli, stdin.lock(), stdout.lock())
}

fn execute<R: BufRead, W: Write>(cli: Cli, input: R, output: W) -> ExitCode {
    match (cli.log_dir.as_deref(), cli.log_level) {
        (Some(log_dir), level) => {
            if let Err(message) = init_logging(level.unwrap_or(default_log_level()), log_dir) {
                eprintln!("minidesk: {message}");
                return ExitCode::FAILURE;
            }
        }
        (None, Some(_)) => {
            eprintln!("minidesk: --log-level has no effect without --log-dir");
            return ExitCode::FAILURE;
        }
        (None, None) => {}
    }

    let code = match run(cli.command, input, output) {
        Ok(()) => {
            info!("event=shell_exit module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(
                "event=shell_exit module=cli status=error error_kind={}",
                err.kind()
            );
            eprintln!("minidesk: {err}");
            ExitCode::FAILURE
        }
    };
    flush_logging();
    code
}

fn run<R: BufRead, W: Write>(command: Command, input: R, output: W) -> ShellResult<()> {
    match command {
        Command::Library { name } => LibraryShell::new(Library::new(name), input, output).run(),
        Command::Tasks => TaskShell::new(TaskManager::new(), input, output).run(),
    }
}
