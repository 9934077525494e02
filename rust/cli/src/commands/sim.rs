//! Simulation command handler for labelled training data.
//!
//! Each game seats the acting player against a fixed number of opponents, deals
//! from a deck seeded with `base_seed + index`, and writes one row describing the
//! acting player's cards, best hand and (optionally) outcome.
//!
//! # Environment Variables
//!
//! - `SHOWDOWN_SIM_BREAK_AFTER`: stop after N games as if interrupted (for testing)
//!
//! # Examples
//!
//! ```ignore
//! // Internal command handler - not part of public API
//! let opts = SimOptions { games: Some(100), seed: Some(42), ..SimOptions::default() };
//! handle_sim_command(&opts, &mut std::io::stdout(), &mut std::io::stderr()).unwrap();
//! ```

use std::io::Write;
use std::path::PathBuf;

use showdown_engine::game::Game;
use showdown_engine::outcome::Outcome;
use showdown_engine::record::{GameRecord, RecordFormat, RecordWriter};
use tracing::{debug, info};

use crate::config;
use crate::error::CliError;
use crate::io_utils::create_output;
use crate::ui;

const PROGRESS_EVERY: u64 = 10_000;

/// Command-line overrides for a simulation run; `None` falls back to configuration.
#[derive(Debug, Clone, Default)]
pub struct SimOptions {
    pub games: Option<u64>,
    pub opponents: Option<usize>,
    pub seed: Option<u64>,
    pub output: Option<String>,
    pub format: Option<String>,
    pub header: bool,
    pub with_outcome: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    won: u64,
    lost: u64,
    tied: u64,
}

impl Tally {
    fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won => self.won += 1,
            Outcome::Lost => self.lost += 1,
            Outcome::Tied => self.tied += 1,
        }
    }

    fn total(&self) -> u64 {
        self.won + self.lost + self.tied
    }
}

/// Handle the sim command.
///
/// Rows go to `--output` when given, otherwise to `out`. The closing summary is
/// written to `out` for file output and to `err` when `out` carries the rows.
///
/// # Errors
///
/// - `CliError::InvalidInput` for zero games, an out-of-range opponent count or
///   an unknown format
/// - `CliError::Config` if the configuration cannot be loaded
/// - `CliError::Interrupted` when stopped early by `SHOWDOWN_SIM_BREAK_AFTER`
pub fn handle_sim_command(
    opts: &SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;

    let games = opts.games.unwrap_or(cfg.games);
    if games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let opponents = opts.opponents.unwrap_or(cfg.opponents);
    config::validate_opponents(opponents).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let format = match opts.format.as_deref() {
        Some(s) => RecordFormat::parse(s)
            .ok_or_else(|| CliError::InvalidInput(format!("unknown format: {}", s)))?,
        None => cfg.format,
    };
    if opts.header && format == RecordFormat::Jsonl {
        ui::display_warning(err, "--header only applies to csv output")?;
    }

    let base_seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let break_after = std::env::var("SHOWDOWN_SIM_BREAK_AFTER")
        .ok()
        .and_then(|v| v.parse::<u64>().ok());

    let run = SimRun {
        games,
        opponents,
        base_seed,
        header: opts.header,
        break_after,
    };
    info!(games, opponents, base_seed, format = format.as_str(), "starting simulation");

    match opts.output.as_ref().map(PathBuf::from) {
        Some(path) => {
            let file = create_output(&path).map_err(|e| CliError::Io(std::io::Error::other(e)))?;
            let mut writer = RecordWriter::new(file, format, opts.with_outcome);
            let result = run.execute(&mut writer);
            writer.flush()?;
            write_summary(result?, out)
        }
        None => {
            let mut writer = RecordWriter::new(&mut *out, format, opts.with_outcome);
            let result = run.execute(&mut writer);
            writer.flush()?;
            write_summary(result?, err)
        }
    }
}

struct SimRun {
    games: u64,
    opponents: usize,
    base_seed: u64,
    header: bool,
    break_after: Option<u64>,
}

impl SimRun {
    fn execute<W: Write>(&self, writer: &mut RecordWriter<W>) -> Result<Tally, CliError> {
        let mut tally = Tally::default();
        if self.header {
            writer.write_header()?;
        }
        for i in 0..self.games {
            if self.break_after == Some(i) {
                return Err(CliError::Interrupted(format!(
                    "saved {}/{}",
                    tally.total(),
                    self.games
                )));
            }
            let seed = self.base_seed.wrapping_add(i);
            let mut game = Game::new(seed, self.opponents);
            let outcome = game.play()?;
            writer.write(&GameRecord::from_game(&game)?)?;
            tally.add(outcome);
            debug!(seed, %outcome, "game written");
            if (i + 1) % PROGRESS_EVERY == 0 {
                info!(done = i + 1, total = self.games, "simulation progress");
            }
        }
        Ok(tally)
    }
}

fn write_summary(tally: Tally, summary: &mut dyn Write) -> Result<(), CliError> {
    writeln!(summary, "Simulated: {} games", tally.total())?;
    writeln!(
        summary,
        "Won: {}  Lost: {}  Tied: {}",
        tally.won, tally.lost, tally.tied
    )?;
    Ok(())
}
