use std::collections::HashSet;

use showdown_engine::cards::Card;
use showdown_engine::deck::Deck;
use showdown_engine::errors::GameError;
use showdown_engine::game::Game;

#[test]
fn seeded_deck_holds_52_distinct_cards() {
    let mut deck = Deck::shuffled(42);
    let mut seen = HashSet::new();
    while let Ok(c) = deck.draw() {
        assert!(seen.insert(c), "{} drawn twice", c);
    }
    assert_eq!(seen.len(), 52);
    assert_eq!(deck.remaining(), 0);
    assert_eq!(deck.draw(), Err(GameError::DeckExhausted));
}

#[test]
fn equal_seeds_deal_equal_orders() {
    let a = Deck::shuffled(12345).draw_n(52).unwrap();
    let b = Deck::shuffled(12345).draw_n(52).unwrap();
    assert_eq!(a, b);
    let c = Deck::shuffled(12346).draw_n(52).unwrap();
    assert_ne!(a, c);
}

#[test]
fn draw_n_matches_single_draws() {
    let mut one_by_one = Deck::shuffled(9);
    let singles: Vec<Card> = (0..7).map(|_| one_by_one.draw().unwrap()).collect();
    let mut batch = Deck::shuffled(9);
    assert_eq!(batch.draw_n(7).unwrap(), singles);
    assert_eq!(batch.remaining(), 45);
}

#[test]
fn short_deck_refuses_a_batch_without_losing_cards() {
    let mut deck = Deck::shuffled(3);
    deck.draw_n(50).unwrap();
    assert_eq!(deck.draw_n(3), Err(GameError::DeckExhausted));
    assert_eq!(deck.remaining(), 2);
}

#[test]
fn game_deals_in_seat_order_from_the_same_deck() {
    let opponents = 3;
    let mut game = Game::new(77, opponents);
    game.play().unwrap();

    let order = Deck::shuffled(77).draw_n(2 * (opponents + 1) + 5).unwrap();
    // First pass: one card to each opponent, then the hero; second pass repeats.
    for (i, p) in game.opponents().iter().enumerate() {
        let hole = p.hole_cards().unwrap();
        assert_eq!(hole[0], order[i]);
        assert_eq!(hole[1], order[opponents + 1 + i]);
    }
    let hero = game.self_hole_cards().unwrap();
    assert_eq!(hero[0], order[opponents]);
    assert_eq!(hero[1], order[2 * opponents + 1]);
    assert_eq!(game.community_cards(), &order[2 * (opponents + 1)..]);
}
