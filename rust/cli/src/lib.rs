//! # Showdown CLI Library
//!
//! Command-line front end for the `showdown-engine` hand ranking core: evaluate
//! a seven-card pool, settle a fixed showdown, deal seeded games and generate
//! labelled simulation data.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["showdown", "sim", "--games", "1000", "--output", "data/games.csv"];
//! let code = showdown_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `sim`: Simulate games and write one labelled row per game
//! - `eval`: Best five-card hand of seven cards
//! - `showdown`: Outcome of a fixed deal for the acting player
//! - `deal`: Deal and evaluate a single seeded game
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod ui;

use cli::{Commands, ShowdownCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_showdown_command,
    handle_sim_command, SimOptions,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["sim", "eval", "showdown", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// # Example
///
/// ```
/// let args = vec!["showdown", "eval", "--cards", "Ac Kc Qc Jc Tc 2d 3h"];
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = showdown_cli::run(args, &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Royal Flush"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ShowdownCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Sim {
            games,
            opponents,
            seed,
            output,
            format,
            header,
            with_outcome,
        } => {
            let opts = SimOptions {
                games,
                opponents,
                seed,
                output,
                format,
                header,
                with_outcome,
            };
            handle_sim_command(&opts, out, err)
        }
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Showdown {
            hero,
            board,
            villains,
        } => handle_showdown_command(&hero, &board, &villains, out),
        Commands::Deal { seed, opponents } => handle_deal_command(seed, opponents, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            let _ = writeln!(err, "Interrupted: {}", msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        if write!(out, "{}", e).is_err() {
            return exit_code::ERROR;
        }
        return exit_code::SUCCESS;
    }

    if writeln!(err, "{}", e).is_err()
        || writeln!(err).is_err()
        || writeln!(err, "Showdown Hand Ranking CLI").is_err()
        || writeln!(err, "Usage: showdown <command> [options]\n").is_err()
        || writeln!(err, "Commands:").is_err()
    {
        return exit_code::ERROR;
    }
    for c in COMMANDS {
        if writeln!(err, "  {}", c).is_err() {
            return exit_code::ERROR;
        }
    }
    let _ = writeln!(err, "\nFor full help, run: showdown --help");
    exit_code::ERROR
}
