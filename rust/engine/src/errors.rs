use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid card count: expected {expected}, got {actual}")]
    InvalidCardCount { expected: usize, actual: usize },
    #[error("Duplicate card in pool: {0}")]
    DuplicateCard(Card),
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
    /// The pool does not hold the structure its category promised.
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
    #[error("Not yet evaluated: {0}")]
    UninitializedState(&'static str),
    #[error("Hole cards already full")]
    HoleCardsFull,
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("Game already played")]
    AlreadyPlayed,
}

pub(crate) fn expect_count(cards: &[Card], expected: usize) -> Result<(), GameError> {
    if cards.len() != expected {
        return Err(GameError::InvalidCardCount {
            expected,
            actual: cards.len(),
        });
    }
    Ok(())
}
