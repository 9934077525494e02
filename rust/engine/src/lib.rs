//! # showdown-engine: Texas Hold'em Hand Ranking Core
//!
//! Finds the best five-card hand in a seven-card pool (two hole cards plus five
//! community cards), turns it into a comparable [`hand::HandResult`], and labels
//! the acting player's result against any number of opponents. Seeded dealing
//! and flat-file records support generating labelled simulation data.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), parsing and deck construction
//! - [`combinations`] - k-subset enumeration
//! - [`classify`] - Hand category of five cards and of the best subset of seven
//! - [`hand`] - Best-hand reconstruction and hand-to-hand comparison
//! - [`outcome`] - Win/loss/tie label for the acting player against opponents
//! - [`player`] - Participants and their hole cards
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`game`] - One dealt and evaluated round
//! - [`record`] - CSV / JSONL rows for simulated games
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use showdown_engine::cards::{parse_cards, Rank};
//! use showdown_engine::hand::{build_best_hand, compare_hands, Category};
//! use showdown_engine::outcome::Outcome;
//!
//! let royal = build_best_hand(&parse_cards("Ac Kc Qc Jc Tc 9c 8c").unwrap()).unwrap();
//! assert_eq!(royal.category, Category::RoyalFlush);
//! assert_eq!(royal.high_rank(), Some(Rank::Ace));
//!
//! let two_pair = build_best_hand(&parse_cards("2h 2d 6h 6d 7h Ts Qs").unwrap()).unwrap();
//! assert_eq!(compare_hands(&two_pair, &royal), Outcome::Lost);
//! ```
//!
//! ## Deterministic Simulation
//!
//! ```rust
//! use showdown_engine::game::Game;
//! use showdown_engine::record::GameRecord;
//!
//! let mut a = Game::new(42, 4);
//! let mut b = Game::new(42, 4);
//! assert_eq!(a.play().unwrap(), b.play().unwrap());
//! let row = GameRecord::from_game(&a).unwrap().to_csv_row(false);
//! assert_eq!(row.split(',').count(), 13);
//! ```

pub mod cards;
pub mod classify;
pub mod combinations;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod outcome;
pub mod player;
pub mod record;
