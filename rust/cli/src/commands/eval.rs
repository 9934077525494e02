//! Eval command handler: best five-card hand of a seven-card pool.

use std::io::Write;

use showdown_engine::cards::parse_cards;
use showdown_engine::hand::build_best_hand;

use crate::error::CliError;
use crate::ui;

/// Handle the eval command.
///
/// Parses seven cards, builds the best hand and prints the pool, the hand
/// category, the high rank and the four kickers.
///
/// # Errors
///
/// `CliError::InvalidInput` for unparseable cards, a pool that is not seven
/// cards, or a card listed twice.
pub fn handle_eval_command(cards: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let pool = parse_cards(cards)?;
    let hand = build_best_hand(&pool)?;
    writeln!(out, "Cards: {}", ui::format_cards(&pool))?;
    ui::write_hand(out, &hand)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(cards: &str) -> Result<String, CliError> {
        let mut out = Vec::new();
        handle_eval_command(cards, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn royal_flush_is_reported() {
        let text = eval("Ac Kc Qc Jc Tc 9c 8c").unwrap();
        assert!(text.contains("Category: Royal Flush"));
        assert!(text.contains("High: A"));
        assert!(text.contains("Kickers: K Q J T"));
    }

    #[test]
    fn wheel_reports_ace_as_last_kicker() {
        let text = eval("Ac 2d 3h 4s 5c 9d Kh").unwrap();
        assert!(text.contains("Category: Straight\n"));
        assert!(text.contains("High: 5"));
        assert!(text.contains("Kickers: 4 3 2 A"));
    }

    #[test]
    fn six_cards_are_rejected() {
        assert!(matches!(
            eval("Ac 2d 3h 4s 5c 9d"),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn duplicate_card_is_rejected() {
        assert!(matches!(
            eval("Ac Ac 3h 4s 5c 9d Kh"),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(eval("Zz 2d"), Err(CliError::InvalidInput(_))));
    }
}
