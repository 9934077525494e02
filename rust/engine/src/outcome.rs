use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::errors::{expect_count, GameError};
use crate::hand::{build_best_hand, compare_hands, HandResult};
use crate::player::Participant;

/// Result of a showdown from the acting player's point of view.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Won,
    Lost,
    Tied,
}

impl Outcome {
    /// The same comparison seen from the other side.
    pub fn inverse(self) -> Outcome {
        match self {
            Outcome::Won => Outcome::Lost,
            Outcome::Lost => Outcome::Won,
            Outcome::Tied => Outcome::Tied,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Won => "won",
            Outcome::Lost => "lost",
            Outcome::Tied => "tied",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reduces per-opponent outcomes to one label: any loss loses, otherwise any
/// tie ties, otherwise the acting player won. No outcomes at all count as a win.
pub fn reduce_outcomes<I>(outcomes: I) -> Outcome
where
    I: IntoIterator<Item = Outcome>,
{
    let mut tied = false;
    for o in outcomes {
        match o {
            Outcome::Lost => return Outcome::Lost,
            Outcome::Tied => tied = true,
            Outcome::Won => {}
        }
    }
    if tied {
        Outcome::Tied
    } else {
        Outcome::Won
    }
}

/// Builds the seven-card hand of a participant from its hole cards and the board.
pub fn participant_hand(p: &Participant, community: &[Card]) -> Result<HandResult, GameError> {
    expect_count(community, 5)?;
    let [a, b] = p.hole_cards()?;
    let mut pool = Vec::with_capacity(7);
    pool.push(a);
    pool.push(b);
    pool.extend_from_slice(community);
    build_best_hand(&pool)
}

/// Decides whether `hero` beats every opponent on the shared `community` cards.
///
/// Each opponent's best hand is compared against the hero's. The result is
/// [`Outcome::Lost`] if any opponent is stronger, [`Outcome::Tied`] if none is
/// stronger but at least one matches, and [`Outcome::Won`] otherwise. This is a
/// label for the acting player, not a pot settlement.
///
/// # Errors
///
/// - [`GameError::InvalidCardCount`] unless `community` holds five cards
/// - [`GameError::UninitializedState`] when a participant has not been dealt
/// - any error from [`build_best_hand`], e.g. a card shared by two hands
///
/// # Examples
///
/// ```
/// use showdown_engine::cards::parse_cards;
/// use showdown_engine::outcome::{evaluate_outcome, Outcome};
/// use showdown_engine::player::Participant;
///
/// let board = parse_cards("2c 7d 9h Js Kd").unwrap();
/// let hero = Participant::from_str_pair("Ah Ad").unwrap();
/// let villain = Participant::from_str_pair("3c 4c").unwrap();
/// assert_eq!(evaluate_outcome(&hero, &[villain], &board).unwrap(), Outcome::Won);
/// ```
pub fn evaluate_outcome(
    hero: &Participant,
    opponents: &[Participant],
    community: &[Card],
) -> Result<Outcome, GameError> {
    let hero_hand = participant_hand(hero, community)?;
    let mut outcomes = Vec::with_capacity(opponents.len());
    for opp in opponents {
        let opp_hand = participant_hand(opp, community)?;
        outcomes.push(compare_hands(&hero_hand, &opp_hand));
    }
    let outcome = reduce_outcomes(outcomes.iter().copied());
    debug!(hand = %hero_hand, opponents = opponents.len(), %outcome, "evaluated outcome");
    Ok(outcome)
}
