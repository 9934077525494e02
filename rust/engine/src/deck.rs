use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A 52-card deck in ChaCha20 order. Cards are drawn from the top, which is
/// the end of the shuffled vector.
///
/// # Examples
///
/// ```
/// use showdown_engine::deck::Deck;
///
/// let mut deck = Deck::shuffled(7);
/// let hole = deck.draw_n(2).unwrap();
/// assert_eq!(hole.len(), 2);
/// assert_eq!(deck.remaining(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Shuffles a full deck with a stream seeded from `seed`; equal seeds give
    /// equal deals.
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut cards = full_deck();
        cards.shuffle(&mut rng);
        Self { cards }
    }

    /// Takes the top card, or [`GameError::DeckExhausted`] once all 52 are out.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::DeckExhausted)
    }

    /// Takes the next `n` cards in draw order. The deck is left untouched when
    /// fewer than `n` remain.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::DeckExhausted);
        }
        let split = self.cards.len() - n;
        let mut taken = self.cards.split_off(split);
        taken.reverse();
        Ok(taken)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
