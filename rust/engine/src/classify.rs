//! Hand category classification.
//!
//! [`classify_five`] scores exactly five cards; [`best_category`] runs it over
//! all 21 five-card subsets of a seven-card pool and keeps the strongest. Only
//! the category is decided here. Kickers and tie-breaks are rebuilt from the
//! whole pool by [`crate::hand::build_best_hand`].

use crate::cards::{Card, Rank};
use crate::combinations::combinations;
use crate::errors::{expect_count, GameError};
use crate::hand::Category;

/// Ascending ranks of the wheel, where the ace plays low.
pub(crate) const WHEEL: [Rank; 5] = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace];

const BROADWAY: [Rank; 5] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

/// Classifies exactly five cards into a [`Category`].
///
/// # Errors
///
/// [`GameError::InvalidCardCount`] when `cards` does not hold five cards.
pub fn classify_five(cards: &[Card]) -> Result<Category, GameError> {
    expect_count(cards, 5)?;

    let mut rank_counts = [0u8; 13];
    for c in cards {
        rank_counts[c.rank.ordinal() as usize] += 1;
    }
    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);

    let mut distinct: Vec<Rank> = cards.iter().map(|c| c.rank).collect();
    distinct.sort_unstable();
    distinct.dedup();
    let is_straight = is_straight(&distinct);
    let is_royal = is_flush && distinct == BROADWAY;

    let has_count = |n: u8| rank_counts.contains(&n);
    let pairs = rank_counts.iter().filter(|&&n| n == 2).count();

    let category = if is_royal {
        Category::RoyalFlush
    } else if is_flush && is_straight {
        Category::StraightFlush
    } else if has_count(4) {
        Category::FourOfAKind
    } else if has_count(3) && has_count(2) {
        Category::FullHouse
    } else if is_flush {
        Category::Flush
    } else if is_straight {
        Category::Straight
    } else if has_count(3) {
        Category::ThreeOfAKind
    } else if pairs == 2 {
        Category::TwoPair
    } else if pairs == 1 {
        Category::OnePair
    } else {
        Category::HighCard
    };
    Ok(category)
}

/// Returns the strongest category over every five-card subset of a seven-card pool.
///
/// # Errors
///
/// [`GameError::InvalidCardCount`] when `cards` does not hold seven cards.
pub fn best_category(cards: &[Card]) -> Result<Category, GameError> {
    expect_count(cards, 7)?;
    let mut best = Category::HighCard;
    for subset in combinations(cards, 5) {
        best = best.max(classify_five(&subset)?);
    }
    Ok(best)
}

// `distinct` must be sorted ascending without duplicates.
fn is_straight(distinct: &[Rank]) -> bool {
    if distinct.len() != 5 {
        return false;
    }
    let consecutive = distinct
        .windows(2)
        .all(|w| w[1].ordinal() == w[0].ordinal() + 1);
    consecutive || distinct == WHEEL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn classify(s: &str) -> Category {
        classify_five(&parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn classifies_every_category() {
        assert_eq!(classify("Ah Kh Qh Jh Th"), Category::RoyalFlush);
        assert_eq!(classify("9d 8d 7d 6d 5d"), Category::StraightFlush);
        assert_eq!(classify("4c 4d 4h 4s Kc"), Category::FourOfAKind);
        assert_eq!(classify("8c 8d 8h 4s 4c"), Category::FullHouse);
        assert_eq!(classify("2s 7s 9s Js Ks"), Category::Flush);
        assert_eq!(classify("6c 7d 8h 9s Tc"), Category::Straight);
        assert_eq!(classify("Qc Qd Qh 2s 5c"), Category::ThreeOfAKind);
        assert_eq!(classify("2h 2d 6h 6d Qs"), Category::TwoPair);
        assert_eq!(classify("Ac Ad 3h 7s 9c"), Category::OnePair);
        assert_eq!(classify("Ac Kd 9h 7s 3c"), Category::HighCard);
    }

    #[test]
    fn wheel_is_a_straight_and_wraparound_is_not() {
        assert_eq!(classify("Ac 2d 3h 4s 5c"), Category::Straight);
        assert_eq!(classify("As 2s 3s 4s 5s"), Category::StraightFlush);
        assert_eq!(classify("Qc Kd Ah 2s 3c"), Category::HighCard);
    }

    #[test]
    fn broadway_off_suit_is_a_plain_straight() {
        assert_eq!(classify("Ac Kd Qh Js Tc"), Category::Straight);
    }

    #[test]
    fn classification_ignores_card_order() {
        assert_eq!(classify("Th Jh Ah Qh Kh"), Category::RoyalFlush);
        assert_eq!(classify("4s 8c 4c 8h 8d"), Category::FullHouse);
    }

    #[test]
    fn rejects_wrong_counts() {
        let six = parse_cards("Ah Kh Qh Jh Th 9h").unwrap();
        assert_eq!(
            classify_five(&six),
            Err(GameError::InvalidCardCount { expected: 5, actual: 6 })
        );
        assert_eq!(
            best_category(&six),
            Err(GameError::InvalidCardCount { expected: 7, actual: 6 })
        );
    }

    #[test]
    fn best_category_picks_the_strongest_subset() {
        let pool = parse_cards("Ac Kc Qc Jc Tc 9c 8c").unwrap();
        assert_eq!(best_category(&pool).unwrap(), Category::RoyalFlush);
        let pool = parse_cards("4c 4d 4h 8h 8c 8s 3c").unwrap();
        assert_eq!(best_category(&pool).unwrap(), Category::FullHouse);
    }
}
