//! Helpers for consistent terminal output across commands.

use std::io::Write;

use showdown_engine::cards::Card;
use showdown_engine::hand::HandResult;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Space-separated card list, e.g. `Ah Kd 7c`.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writes the category and the five rank slots of a hand, one field per line.
pub fn write_hand(out: &mut dyn Write, hand: &HandResult) -> std::io::Result<()> {
    writeln!(out, "Category: {}", hand.category)?;
    let slot = |r: Option<showdown_engine::cards::Rank>| {
        r.map(|r| r.symbol().to_string())
            .unwrap_or_else(|| "-".to_string())
    };
    writeln!(out, "High: {}", slot(hand.high_rank()))?;
    let kickers: Vec<String> = (1..=4).map(|n| slot(hand.kicker(n))).collect();
    writeln!(out, "Kickers: {}", kickers.join(" "))
}
