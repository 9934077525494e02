use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cards::{Card, Rank, Suit};
use crate::classify::{best_category, WHEEL};
use crate::errors::{expect_count, GameError};
use crate::outcome::Outcome;

/// Hand categories ordered from weakest to strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical, comparable form of a player's best five-card hand.
///
/// `ranks[0]` is the high rank and `ranks[1..]` are kicker1 through kicker4, in
/// the significance order of the category. A slot is `None` when the category
/// leaves it unused; every hand built by [`build_best_hand`] fills all five.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HandResult {
    pub category: Category,
    pub ranks: [Option<Rank>; 5],
}

impl HandResult {
    pub fn new(category: Category, ranks: [Rank; 5]) -> Self {
        Self {
            category,
            ranks: ranks.map(Some),
        }
    }

    pub fn high_rank(&self) -> Option<Rank> {
        self.ranks[0]
    }

    /// Kicker `n`, counted from 1 to 4.
    pub fn kicker(&self, n: usize) -> Option<Rank> {
        match n {
            1..=4 => self.ranks[n],
            _ => None,
        }
    }

    pub fn kickers(&self) -> [Option<Rank>; 4] {
        [self.ranks[1], self.ranks[2], self.ranks[3], self.ranks[4]]
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        if let Some(high) = self.high_rank() {
            write!(f, ", {:?} high", high)?;
        }
        let kickers: Vec<String> = self
            .kickers()
            .iter()
            .flatten()
            .map(|r| r.symbol().to_string())
            .collect();
        if !kickers.is_empty() {
            write!(f, " [{}]", kickers.join(" "))?;
        }
        Ok(())
    }
}

/// Builds the best [`HandResult`] from a seven-card pool.
///
/// The category comes from [`best_category`]; the high rank and kicker ladder are
/// then rebuilt from all seven cards with the rules of that category. The wheel
/// (A-2-3-4-5) always reads `Five, Four, Three, Two, Ace`.
///
/// # Errors
///
/// - [`GameError::InvalidCardCount`] when `cards` does not hold seven cards
/// - [`GameError::DuplicateCard`] when a card appears twice
/// - [`GameError::InvariantViolation`] when the pool lacks the structure its
///   category requires, which means the classifier and builder disagree
///
/// # Examples
///
/// ```
/// use showdown_engine::cards::{parse_cards, Rank};
/// use showdown_engine::hand::{build_best_hand, Category};
///
/// let pool = parse_cards("9d 8d 7d 6d 5d 6s 8h").unwrap();
/// let hand = build_best_hand(&pool).unwrap();
/// assert_eq!(hand.category, Category::StraightFlush);
/// assert_eq!(hand.high_rank(), Some(Rank::Nine));
/// ```
pub fn build_best_hand(cards: &[Card]) -> Result<HandResult, GameError> {
    expect_count(cards, 7)?;
    let mut seen = HashSet::with_capacity(7);
    for &c in cards {
        if !seen.insert(c) {
            return Err(GameError::DuplicateCard(c));
        }
    }

    let category = best_category(cards)?;
    let pool = Pool::new(cards);
    let hand = match category {
        Category::RoyalFlush => HandResult::new(
            Category::RoyalFlush,
            [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten],
        ),
        Category::StraightFlush => {
            let suit = pool.flush_suit().ok_or_else(|| missing(category, "flush suit"))?;
            let suited: Vec<Rank> = pool.suited(suit).collect();
            let run = straight_run(&suited).ok_or_else(|| missing(category, "suited run"))?;
            HandResult::new(category, run)
        }
        Category::FourOfAKind => {
            let quad = pool.ranks_with(|n| n == 4).next().ok_or_else(|| missing(category, "quad"))?;
            let [kicker] = pool.highest_excluding::<1>(&[quad])?;
            HandResult::new(category, [quad, quad, quad, quad, kicker])
        }
        Category::FullHouse => {
            let trips = pool.ranks_with(|n| n >= 3).next().ok_or_else(|| missing(category, "triple"))?;
            let pair = pool
                .ranks_with(|n| n >= 2)
                .find(|&r| r != trips)
                .ok_or_else(|| missing(category, "pair"))?;
            let (high, low) = if trips > pair { (trips, pair) } else { (pair, trips) };
            HandResult::new(category, [high, high, high, low, low])
        }
        Category::Flush => {
            let suit = pool.flush_suit().ok_or_else(|| missing(category, "flush suit"))?;
            let top: Vec<Rank> = pool.suited(suit).take(5).collect();
            let top: [Rank; 5] = top.try_into().map_err(|_| missing(category, "five suited cards"))?;
            HandResult::new(category, top)
        }
        Category::Straight => {
            let run = straight_run(&pool.ranks_desc).ok_or_else(|| missing(category, "run"))?;
            HandResult::new(category, run)
        }
        Category::ThreeOfAKind => {
            let trips = pool.ranks_with(|n| n == 3).next().ok_or_else(|| missing(category, "triple"))?;
            let [k1, k2] = pool.highest_excluding::<2>(&[trips])?;
            HandResult::new(category, [trips, trips, trips, k1, k2])
        }
        Category::TwoPair => {
            // With three pairs the lowest one fills the second pair slots.
            let pairs: Vec<Rank> = pool.ranks_with(|n| n == 2).collect();
            let (&high, &low) = match pairs.as_slice() {
                [high, .., low] => (high, low),
                _ => return Err(missing(category, "second pair")),
            };
            let [kicker] = pool.highest_excluding::<1>(&[high, low])?;
            HandResult::new(category, [high, high, low, low, kicker])
        }
        Category::OnePair => {
            let pair = pool.ranks_with(|n| n == 2).next().ok_or_else(|| missing(category, "pair"))?;
            let [k1, k2, k3] = pool.highest_excluding::<3>(&[pair])?;
            HandResult::new(category, [pair, pair, k1, k2, k3])
        }
        Category::HighCard => {
            let top = pool.highest_excluding::<5>(&[])?;
            HandResult::new(category, top)
        }
    };

    debug!(%hand, "built best hand");
    Ok(hand)
}

/// Compares two hands and returns the outcome for `a`.
///
/// Categories are compared first. On equal categories the high rank and then
/// kicker1 through kicker4 decide, first difference wins. A slot missing on
/// either side ends the comparison as a tie.
pub fn compare_hands(a: &HandResult, b: &HandResult) -> Outcome {
    let outcome = match a.category.cmp(&b.category) {
        Ordering::Greater => Outcome::Won,
        Ordering::Less => Outcome::Lost,
        Ordering::Equal => compare_slots(&a.ranks, &b.ranks),
    };
    trace!(%a, %b, ?outcome, "compared hands");
    outcome
}

fn compare_slots(a: &[Option<Rank>; 5], b: &[Option<Rank>; 5]) -> Outcome {
    for (x, y) in a.iter().zip(b.iter()) {
        let (Some(x), Some(y)) = (x, y) else {
            return Outcome::Tied;
        };
        match x.cmp(y) {
            Ordering::Greater => return Outcome::Won,
            Ordering::Less => return Outcome::Lost,
            Ordering::Equal => {}
        }
    }
    Outcome::Tied
}

fn missing(category: Category, what: &str) -> GameError {
    GameError::InvariantViolation(format!("{} pool has no {}", category, what))
}

/// Returns the highest five-rank run in `ranks`, descending, or the wheel ladder.
fn straight_run(ranks: &[Rank]) -> Option<[Rank; 5]> {
    let mut distinct = ranks.to_vec();
    distinct.sort_unstable_by(|a, b| b.cmp(a));
    distinct.dedup();

    for w in distinct.windows(5) {
        if w.windows(2).all(|p| p[0].ordinal() == p[1].ordinal() + 1) {
            return Some([w[0], w[1], w[2], w[3], w[4]]);
        }
    }
    if WHEEL.iter().all(|r| distinct.contains(r)) {
        return Some([Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace]);
    }
    None
}

/// Seven-card pool indexed for reconstruction.
struct Pool {
    cards: Vec<Card>,
    rank_counts: [u8; 13],
    // Every card's rank, highest first, duplicates kept.
    ranks_desc: Vec<Rank>,
}

impl Pool {
    fn new(cards: &[Card]) -> Self {
        let mut cards = cards.to_vec();
        cards.sort_unstable_by(|a, b| b.rank.cmp(&a.rank));
        let mut rank_counts = [0u8; 13];
        for c in &cards {
            rank_counts[c.rank.ordinal() as usize] += 1;
        }
        let ranks_desc = cards.iter().map(|c| c.rank).collect();
        Self {
            cards,
            rank_counts,
            ranks_desc,
        }
    }

    fn count(&self, rank: Rank) -> u8 {
        self.rank_counts[rank.ordinal() as usize]
    }

    /// Distinct ranks whose count satisfies `pred`, highest first.
    fn ranks_with<'a>(&'a self, pred: impl Fn(u8) -> bool + 'a) -> impl Iterator<Item = Rank> + 'a {
        Rank::ALL
            .iter()
            .rev()
            .copied()
            .filter(move |&r| pred(self.count(r)))
    }

    fn flush_suit(&self) -> Option<Suit> {
        Suit::ALL
            .into_iter()
            .find(|&s| self.cards.iter().filter(|c| c.suit == s).count() >= 5)
    }

    /// Ranks of the cards in `suit`, highest first.
    fn suited(&self, suit: Suit) -> impl Iterator<Item = Rank> + '_ {
        self.cards
            .iter()
            .filter(move |c| c.suit == suit)
            .map(|c| c.rank)
    }

    /// The `N` highest card ranks left once every card of `exclude` is removed.
    fn highest_excluding<const N: usize>(&self, exclude: &[Rank]) -> Result<[Rank; N], GameError> {
        let rest: Vec<Rank> = self
            .ranks_desc
            .iter()
            .copied()
            .filter(|r| !exclude.contains(r))
            .take(N)
            .collect();
        rest.try_into().map_err(|_| {
            GameError::InvariantViolation(format!("pool has fewer than {} remaining cards", N))
        })
    }
}
