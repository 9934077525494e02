use tracing::debug;

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::HandResult;
use crate::outcome::{evaluate_outcome, participant_hand, Outcome};
use crate::player::{Participant, HOLE_SIZE};

/// Opponents seated against the acting player when none are configured.
pub const DEFAULT_OPPONENTS: usize = 4;
/// Cards in the flop.
pub const FLOP_SIZE: usize = 3;
/// Cards dealt after the flop (turn and river).
pub const RIVER_SIZE: usize = 2;
/// Total shared cards on a finished board.
pub const COMMUNITY_SIZE: usize = FLOP_SIZE + RIVER_SIZE;

/// One simulated round: deals the acting player ("hero") and its opponents
/// from a seeded deck, then labels the hero's result.
///
/// # Examples
///
/// ```
/// use showdown_engine::game::Game;
///
/// let mut game = Game::new(42, 4);
/// assert!(game.self_hand().is_err());
/// let outcome = game.play().unwrap();
/// assert_eq!(game.outcome().unwrap(), outcome);
/// assert_eq!(game.community_cards().len(), 5);
/// ```
#[derive(Debug)]
pub struct Game {
    seed: u64,
    deck: Deck,
    hero: Participant,
    opponents: Vec<Participant>,
    community: Vec<Card>,
    hero_hand: Option<HandResult>,
    outcome: Option<Outcome>,
}

impl Game {
    pub fn new(seed: u64, opponents: usize) -> Self {
        Self {
            seed,
            deck: Deck::shuffled(seed),
            hero: Participant::new(),
            opponents: vec![Participant::new(); opponents],
            community: Vec::with_capacity(COMMUNITY_SIZE),
            hero_hand: None,
            outcome: None,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Deals every card and evaluates the hero against all opponents.
    ///
    /// # Errors
    ///
    /// [`GameError::AlreadyPlayed`] on a second call and
    /// [`GameError::DeckExhausted`] if the table needs more than 52 cards.
    pub fn play(&mut self) -> Result<Outcome, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::AlreadyPlayed);
        }
        self.deal_hole_cards()?;
        self.deal_community()?;

        let hand = participant_hand(&self.hero, &self.community)?;
        let outcome = evaluate_outcome(&self.hero, &self.opponents, &self.community)?;
        debug!(seed = self.seed, %hand, %outcome, "round complete");
        self.hero_hand = Some(hand);
        self.outcome = Some(outcome);
        Ok(outcome)
    }

    // Opponents first, hero last, one card per pass.
    fn deal_hole_cards(&mut self) -> Result<(), GameError> {
        for _ in 0..HOLE_SIZE {
            for p in self.opponents.iter_mut() {
                p.give_card(self.deck.draw()?)?;
            }
            self.hero.give_card(self.deck.draw()?)?;
        }
        Ok(())
    }

    fn deal_community(&mut self) -> Result<(), GameError> {
        self.community = self.deck.draw_n(COMMUNITY_SIZE)?;
        Ok(())
    }

    pub fn self_hole_cards(&self) -> Result<[Card; HOLE_SIZE], GameError> {
        self.hero.hole_cards()
    }

    pub fn opponents(&self) -> &[Participant] {
        &self.opponents
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }

    /// The hero's best hand; [`GameError::UninitializedState`] before [`Game::play`].
    pub fn self_hand(&self) -> Result<&HandResult, GameError> {
        self.hero_hand
            .as_ref()
            .ok_or(GameError::UninitializedState("self hand"))
    }

    pub fn outcome(&self) -> Result<Outcome, GameError> {
        self.outcome
            .ok_or(GameError::UninitializedState("game outcome"))
    }
}
