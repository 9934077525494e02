//! Showdown command handler: outcome of a fixed deal for the acting player.

use std::collections::HashSet;
use std::io::Write;

use showdown_engine::cards::{parse_cards, Card};
use showdown_engine::errors::GameError;
use showdown_engine::game::COMMUNITY_SIZE;
use showdown_engine::outcome::{evaluate_outcome, participant_hand};
use showdown_engine::player::Participant;

use crate::error::CliError;
use crate::ui;

/// Handle the showdown command.
///
/// Prints the acting player's best hand, each opponent's best hand and the
/// acting player's outcome. No opponents means the acting player wins.
///
/// # Errors
///
/// `CliError::InvalidInput` if any holding is not two cards, the board is not
/// five cards, or a card appears twice across the table.
pub fn handle_showdown_command(
    hero: &str,
    board: &str,
    villains: &[String],
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hero = Participant::from_str_pair(hero)?;
    let community = parse_cards(board)?;
    if community.len() != COMMUNITY_SIZE {
        return Err(GameError::InvalidCardCount {
            expected: COMMUNITY_SIZE,
            actual: community.len(),
        }
        .into());
    }
    let opponents = villains
        .iter()
        .map(|v| Participant::from_str_pair(v))
        .collect::<Result<Vec<_>, _>>()?;
    if let Some(dup) = first_duplicate(&hero, &opponents, &community)? {
        return Err(GameError::DuplicateCard(dup).into());
    }

    let hero_hand = participant_hand(&hero, &community)?;
    writeln!(out, "Board: {}", ui::format_cards(&community))?;
    writeln!(out, "Hero: {} -> {}", ui::format_cards(&hero.hole_cards()?), hero_hand)?;
    for (i, v) in opponents.iter().enumerate() {
        let hand = participant_hand(v, &community)?;
        writeln!(
            out,
            "Villain {}: {} -> {}",
            i + 1,
            ui::format_cards(&v.hole_cards()?),
            hand
        )?;
    }
    let outcome = evaluate_outcome(&hero, &opponents, &community)?;
    writeln!(out, "Outcome: {}", outcome)?;
    Ok(())
}

fn first_duplicate(
    hero: &Participant,
    opponents: &[Participant],
    community: &[Card],
) -> Result<Option<Card>, GameError> {
    let mut seen = HashSet::new();
    let mut all: Vec<Card> = community.to_vec();
    all.extend(hero.hole_cards()?);
    for p in opponents {
        all.extend(p.hole_cards()?);
    }
    Ok(all.into_iter().find(|c| !seen.insert(*c)))
}
