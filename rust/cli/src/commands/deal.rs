//! Deal command handler for a single seeded game.
//!
//! Deals one game from a seeded deck and shows every holding, the board, the
//! acting player's best hand and its outcome. The same seed always deals the
//! same game.

use std::io::Write;

use showdown_engine::game::Game;

use crate::config;
use crate::error::CliError;
use crate::ui;

/// Handle the deal command.
///
/// The seed falls back to configuration, then to a random value; the seed in
/// use is printed first so the game can be replayed.
///
/// # Examples
///
/// ```ignore
/// // Internal command handler - not part of public API
/// let mut out = Vec::new();
/// handle_deal_command(Some(42), None, &mut out).unwrap();
/// ```
pub fn handle_deal_command(
    seed: Option<u64>,
    opponents: Option<usize>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let opponents = opponents.unwrap_or(cfg.opponents);
    config::validate_opponents(opponents).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut game = Game::new(seed, opponents);
    let outcome = game.play()?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Hero: {}", ui::format_cards(&game.self_hole_cards()?))?;
    for (i, p) in game.opponents().iter().enumerate() {
        writeln!(out, "Villain {}: {}", i + 1, ui::format_cards(&p.hole_cards()?))?;
    }
    writeln!(out, "Board: {}", ui::format_cards(game.community_cards()))?;
    writeln!(out, "Hand: {}", game.self_hand()?)?;
    writeln!(out, "Outcome: {}", outcome)?;
    Ok(())
}
