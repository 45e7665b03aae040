//! Command-line interface for the tic-tac-toe engine.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe engine with HTTP and terminal front ends
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Optimal-play tic-tac-toe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP move API
    Serve {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Seed for the fallback move generator
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play against the engine in the terminal (you are X)
    Play {
        /// Let the engine move first
        #[arg(long)]
        ai_first: bool,

        /// Play against the rule-based picker instead of the full search
        #[arg(long)]
        easy: bool,

        /// Seed for the engine's fallback move generator
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the engine's move for a board
    Suggest {
        /// Nine cells, e.g. "XX.OO....": `.`, `_`, `-` or space are empty
        board: String,

        /// Symbol the engine plays
        #[arg(long, default_value = "O")]
        ai: String,

        /// Symbol the opponent plays
        #[arg(long, default_value = "X")]
        human: String,

        /// Use the rule-based picker instead of the full search
        #[arg(long)]
        heuristic: bool,

        /// Seed for the fallback move generator
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_heuristic_flag() {
        let cli = Cli::try_parse_from(["tictactoe", "suggest", "XX.OO....", "--heuristic"]).unwrap();
        match cli.command {
            Command::Suggest {
                board,
                ai,
                heuristic,
                ..
            } => {
                assert_eq!(board, "XX.OO....");
                assert_eq!(ai, "O");
                assert!(heuristic);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_play_easy_flag() {
        let cli = Cli::try_parse_from(["tictactoe", "play", "--easy", "--seed", "4"]).unwrap();
        match cli.command {
            Command::Play {
                ai_first,
                easy,
                seed,
            } => {
                assert!(!ai_first);
                assert!(easy);
                assert_eq!(seed, Some(4));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
