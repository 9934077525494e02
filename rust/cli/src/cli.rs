//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "showdown",
    version,
    about = "Texas Hold'em hand ranking and showdown simulation"
)]
pub struct ShowdownCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Simulate games and write one labelled row per game
    Sim {
        /// Number of games (falls back to configuration)
        #[arg(long)]
        games: Option<u64>,
        /// Opponents seated against the acting player
        #[arg(long)]
        opponents: Option<usize>,
        /// Base seed; game i is dealt from seed + i
        #[arg(long)]
        seed: Option<u64>,
        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<String>,
        /// Row format: csv or jsonl
        #[arg(long)]
        format: Option<String>,
        /// Write a CSV header line first
        #[arg(long)]
        header: bool,
        /// Append the outcome label to each CSV row
        #[arg(long)]
        with_outcome: bool,
    },
    /// Best five-card hand of a seven-card pool
    Eval {
        /// Seven cards, e.g. "Ah Kh Qh Jh Th 2c 3d"
        #[arg(long)]
        cards: String,
    },
    /// Outcome of a fixed showdown for the acting player
    Showdown {
        /// Acting player's two hole cards
        #[arg(long)]
        hero: String,
        /// Five community cards
        #[arg(long)]
        board: String,
        /// An opponent's two hole cards (repeatable)
        #[arg(long = "villain")]
        villains: Vec<String>,
    },
    /// Deal and evaluate a single game
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        opponents: Option<usize>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subcommand_parses() {
        let commands = vec![
            vec!["showdown", "cfg"],
            vec!["showdown", "deal"],
            vec!["showdown", "sim", "--games", "3"],
            vec!["showdown", "eval", "--cards", "Ah Kh Qh Jh Th 2c 3d"],
            vec![
                "showdown", "showdown", "--hero", "Ah Ad", "--board", "2c 3d 4h 9s Td",
                "--villain", "Kc Kd", "--villain", "Qc Qd",
            ],
        ];
        for args in commands {
            let result = ShowdownCli::try_parse_from(&args);
            assert!(result.is_ok(), "Failed to parse: {:?}", args);
        }
    }

    #[test]
    fn villain_flag_collects_repeats() {
        let cli = ShowdownCli::try_parse_from([
            "showdown", "showdown", "--hero", "Ah Ad", "--board", "2c 3d 4h 9s Td",
            "--villain", "Kc Kd", "--villain", "Qc Qd",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Showdown { villains, .. } => assert_eq!(villains.len(), 2),
            _ => panic!("Expected Commands::Showdown variant"),
        }
    }

    #[test]
    fn sim_flags_default_off() {
        let cli = ShowdownCli::try_parse_from(["showdown", "sim"]).unwrap();
        match cli.cmd {
            Commands::Sim {
                header,
                with_outcome,
                games,
                ..
            } => {
                assert!(!header);
                assert!(!with_outcome);
                assert_eq!(games, None);
            }
            _ => panic!("Expected Commands::Sim variant"),
        }
    }

    #[test]
    fn eval_requires_cards() {
        assert!(ShowdownCli::try_parse_from(["showdown", "eval"]).is_err());
    }
}
