use crate::cards::{parse_cards, Card};
use crate::errors::GameError;

/// Number of private cards each participant receives.
pub const HOLE_SIZE: usize = 2;

/// A participant in one round, holding up to two hole cards.
/// Cards are handed out one at a time by the dealer and never change afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Participant {
    hole: [Option<Card>; HOLE_SIZE],
}

impl Participant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hole_cards(a: Card, b: Card) -> Self {
        Self {
            hole: [Some(a), Some(b)],
        }
    }

    /// Builds a dealt participant from text such as `"Ah Kd"`.
    pub fn from_str_pair(s: &str) -> Result<Self, GameError> {
        match parse_cards(s)?.as_slice() {
            &[a, b] => Ok(Self::with_hole_cards(a, b)),
            other => Err(GameError::InvalidCardCount {
                expected: HOLE_SIZE,
                actual: other.len(),
            }),
        }
    }

    pub fn give_card(&mut self, c: Card) -> Result<(), GameError> {
        let slot = self
            .hole
            .iter_mut()
            .find(|s| s.is_none())
            .ok_or(GameError::HoleCardsFull)?;
        *slot = Some(c);
        Ok(())
    }

    pub fn is_dealt(&self) -> bool {
        self.hole.iter().all(Option::is_some)
    }

    /// Both hole cards, or [`GameError::UninitializedState`] before dealing finished.
    pub fn hole_cards(&self) -> Result<[Card; HOLE_SIZE], GameError> {
        match self.hole {
            [Some(a), Some(b)] => Ok([a, b]),
            _ => Err(GameError::UninitializedState("participant hole cards")),
        }
    }
}
