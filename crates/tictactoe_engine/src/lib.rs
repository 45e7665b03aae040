//! Optimal-play tic-tac-toe engine.
//!
//! The engine answers two questions for its hosts:
//!
//! - [`winner`]: does this board already contain three in a row?
//! - [`best_move`]: which square should the engine's side take?
//!
//! # Architecture
//!
//! - **Rules**: win and draw detection over a [`Board`]
//! - **Eval**: terminal outcome and search depth to a signed score
//! - **Search**: minimax with alpha-beta pruning over empty squares
//! - **Select**: center-first shortcut, search, then a random fallback
//!
//! The engine performs no I/O and keeps no state between calls. Boards are
//! mutated in place during search and always restored before returning.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tictactoe_engine::{Board, Player, Position, best_move};
//!
//! let mut board = Board::new();
//! let mut rng = StdRng::seed_from_u64(0);
//! let pos = best_move(&mut board, Player::O, Player::X, &mut rng);
//! assert_eq!(pos, Some(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod eval;
mod game;
mod heuristic;
mod position;
mod search;
mod select;
mod types;

pub mod rules;

// Crate-level exports - Domain types
pub use position::Position;
pub use types::{Board, Outcome, Player, Square};

// Crate-level exports - Rules
pub use rules::{is_full, outcome, winner};

// Crate-level exports - Scoring and search
pub use eval::{WIN_SCORE, score};
pub use search::{Evaluation, NEG_INFINITY, POS_INFINITY, Searcher, Sides, exhaustive, search};

// Crate-level exports - Move selection
pub use heuristic::{completing_square, heuristic_move};
pub use select::best_move;

// Crate-level exports - Game tracking
pub use game::{Game, MoveError};
