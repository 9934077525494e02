//! Flat-file rows for simulated games.
//!
//! A row holds the acting player's hole cards and the board (each sorted by rank
//! ordinal and written as ordinals) followed by the hand: category ordinal, high
//! rank ordinal and four kicker ordinals. Rows are written either as plain
//! comma-separated text or as JSON lines.

use std::io::Write;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::game::{Game, COMMUNITY_SIZE};
use crate::hand::HandResult;
use crate::outcome::Outcome;
use crate::player::HOLE_SIZE;

/// Everything recorded about one finished game.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Seed of the deck the game was dealt from
    pub seed: u64,
    /// Acting player's hole cards
    pub hole: [Card; HOLE_SIZE],
    /// Flop, turn and river
    pub community: [Card; COMMUNITY_SIZE],
    /// Acting player's best hand
    pub hand: HandResult,
    /// Acting player's result against every opponent
    pub outcome: Outcome,
    /// Write time (RFC3339), filled by [`RecordWriter`] for JSON lines
    #[serde(default)]
    pub ts: Option<String>,
}

impl GameRecord {
    /// Snapshot of a played game.
    ///
    /// # Errors
    ///
    /// [`GameError::UninitializedState`] if the game has not been played.
    pub fn from_game(game: &Game) -> Result<Self, GameError> {
        let hand = *game.self_hand()?;
        let board = game.community_cards();
        let community: [Card; COMMUNITY_SIZE] =
            board.try_into().map_err(|_| GameError::InvalidCardCount {
                expected: COMMUNITY_SIZE,
                actual: board.len(),
            })?;
        Ok(Self {
            seed: game.seed(),
            hole: game.self_hole_cards()?,
            community,
            hand,
            outcome: game.outcome()?,
            ts: None,
        })
    }

    /// Column values in export order; an unused hand slot is an empty string.
    pub fn csv_fields(&self, with_outcome: bool) -> Vec<String> {
        let mut row = Vec::with_capacity(17);
        push_sorted_ordinals(&mut row, &self.hole);
        push_sorted_ordinals(&mut row, &self.community);
        row.push(self.hand.category.ordinal().to_string());
        for slot in &self.hand.ranks {
            row.push(slot.map(|r| r.ordinal().to_string()).unwrap_or_default());
        }
        if with_outcome {
            row.push(self.outcome.as_str().to_string());
        }
        row
    }

    pub fn to_csv_row(&self, with_outcome: bool) -> String {
        self.csv_fields(with_outcome).join(",")
    }
}

fn push_sorted_ordinals(row: &mut Vec<String>, cards: &[Card]) {
    let mut ordinals: Vec<u8> = cards.iter().map(|c| c.rank.ordinal()).collect();
    ordinals.sort_unstable();
    row.extend(ordinals.iter().map(u8::to_string));
}

pub fn csv_header(with_outcome: bool) -> String {
    let mut cols = vec![
        "hole1", "hole2", "board1", "board2", "board3", "board4", "board5", "category", "high",
        "kicker1", "kicker2", "kicker3", "kicker4",
    ];
    if with_outcome {
        cols.push("outcome");
    }
    cols.join(",")
}

/// Output layout of a [`RecordWriter`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    Csv,
    Jsonl,
}

impl RecordFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(RecordFormat::Csv),
            "jsonl" | "json" => Some(RecordFormat::Jsonl),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordFormat::Csv => "csv",
            RecordFormat::Jsonl => "jsonl",
        }
    }
}

/// Writes [`GameRecord`]s one per line.
pub struct RecordWriter<W: Write> {
    inner: W,
    format: RecordFormat,
    with_outcome: bool,
    written: u64,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W, format: RecordFormat, with_outcome: bool) -> Self {
        Self {
            inner,
            format,
            with_outcome,
            written: 0,
        }
    }

    /// Writes the CSV column header; a no-op for JSON lines.
    pub fn write_header(&mut self) -> std::io::Result<()> {
        if self.format == RecordFormat::Csv {
            writeln!(self.inner, "{}", csv_header(self.with_outcome))?;
        }
        Ok(())
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        match self.format {
            RecordFormat::Csv => {
                writeln!(self.inner, "{}", record.to_csv_row(self.with_outcome))?;
            }
            RecordFormat::Jsonl => {
                let mut rec = record.clone();
                if rec.ts.is_none() {
                    rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
                }
                let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
                self.inner.write_all(line.as_bytes())?;
                self.inner.write_all(b"\n")?;
            }
        }
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::hand::{build_best_hand, Category};

    fn sample() -> GameRecord {
        let hole = parse_cards("6h 2h").unwrap();
        let community = parse_cards("Qs 2d 7h 6d Ts").unwrap();
        let mut pool = hole.clone();
        pool.extend(&community);
        GameRecord {
            seed: 5,
            hole: hole.try_into().unwrap(),
            community: community.try_into().unwrap(),
            hand: build_best_hand(&pool).unwrap(),
            outcome: Outcome::Tied,
            ts: None,
        }
    }

    #[test]
    fn csv_row_sorts_cards_and_lists_hand_ordinals() {
        let rec = sample();
        assert_eq!(rec.hand.category, Category::TwoPair);
        assert_eq!(rec.to_csv_row(false), "0,4,0,4,5,8,10,2,4,4,0,0,10");
        assert_eq!(rec.to_csv_row(true), "0,4,0,4,5,8,10,2,4,4,0,0,10,tied");
    }

    #[test]
    fn header_matches_row_width() {
        let rec = sample();
        for with_outcome in [false, true] {
            let header_cols = csv_header(with_outcome).split(',').count();
            assert_eq!(header_cols, rec.csv_fields(with_outcome).len());
        }
    }

    #[test]
    fn absent_slots_become_empty_fields() {
        let mut rec = sample();
        rec.hand.ranks[4] = None;
        assert!(rec.to_csv_row(false).ends_with(",0,0,"));
    }

    #[test]
    fn jsonl_lines_carry_a_timestamp() {
        let mut w = RecordWriter::new(Vec::new(), RecordFormat::Jsonl, false);
        w.write_header().unwrap();
        w.write(&sample()).unwrap();
        assert_eq!(w.written(), 1);
        let text = String::from_utf8(w.into_inner()).unwrap();
        let back: GameRecord = serde_json::from_str(text.trim()).unwrap();
        assert!(back.ts.is_some());
        assert_eq!(back.hand, sample().hand);
    }

    #[test]
    fn format_names_parse() {
        assert_eq!(RecordFormat::parse("CSV"), Some(RecordFormat::Csv));
        assert_eq!(RecordFormat::parse("json"), Some(RecordFormat::Jsonl));
        assert_eq!(RecordFormat::parse("xml"), None);
    }
}
