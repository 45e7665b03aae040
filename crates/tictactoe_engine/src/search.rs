//! Minimax search with alpha-beta pruning.
//!
//! The search walks the game tree by placing a mark, recursing and taking it
//! back again on a single board. Each placement is held by a [`Placement`]
//! guard whose `Drop` empties the square, so the board is restored on every
//! exit path, including pruning cut-offs.

use crate::eval::score;
use crate::rules::outcome;
use crate::{Board, Player, Position, Square};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Lower search bound (stands in for negative infinity).
pub const NEG_INFINITY: i32 = i32::MIN;

/// Upper search bound (stands in for positive infinity).
pub const POS_INFINITY: i32 = i32::MAX;

/// Score of a searched position and the move that achieves it.
///
/// `position` is `None` exactly when the searched board was terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Minimax score from the engine's point of view.
    pub score: i32,
    /// Best move found at the searched node.
    pub position: Option<Position>,
}

/// The engine's mark and its opponent's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sides {
    /// Mark placed on maximizing plies.
    pub ai: Player,
    /// Mark placed on minimizing plies.
    pub human: Player,
}

/// A mark placed on the board for as long as the guard lives.
struct Placement<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> Placement<'a> {
    fn new(board: &'a mut Board, position: Position, player: Player) -> Self {
        board.set(position, Square::Occupied(player));
        Self { board, position }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.set(self.position, Square::Empty);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pruning {
    AlphaBeta,
    Off,
}

/// Search state for one root call: the sides and a visited-node counter.
#[derive(Debug)]
pub struct Searcher {
    sides: Sides,
    pruning: Pruning,
    nodes: u64,
}

impl Searcher {
    /// Creates a searcher that prunes with alpha-beta bounds.
    pub fn alpha_beta(sides: Sides) -> Self {
        Self {
            sides,
            pruning: Pruning::AlphaBeta,
            nodes: 0,
        }
    }

    /// Creates a searcher that visits the full game tree.
    pub fn exhaustive(sides: Sides) -> Self {
        Self {
            sides,
            pruning: Pruning::Off,
            nodes: 0,
        }
    }

    /// Number of nodes visited so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches `board` and returns its score and best move.
    ///
    /// Candidates are tried in ascending index order and only a strictly
    /// better score replaces the current best, so ties go to the lowest
    /// index. The board is identical before and after the call.
    pub fn run(
        &mut self,
        board: &mut Board,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> Evaluation {
        self.nodes += 1;

        let current = outcome(board);
        if current.is_terminal() {
            return Evaluation {
                score: score(current, self.sides.ai, depth),
                position: None,
            };
        }

        let (player, initial) = if maximizing {
            (self.sides.ai, NEG_INFINITY)
        } else {
            (self.sides.human, POS_INFINITY)
        };
        let mut best = Evaluation {
            score: initial,
            position: None,
        };

        for position in Position::ALL {
            if !board.is_empty(position) {
                continue;
            }

            let child = {
                let mut placed = Placement::new(board, position, player);
                self.run(&mut placed, depth + 1, !maximizing, alpha, beta)
                    .score
            };

            if maximizing {
                if child > best.score {
                    best = Evaluation {
                        score: child,
                        position: Some(position),
                    };
                }
                alpha = alpha.max(child);
            } else {
                if child < best.score {
                    best = Evaluation {
                        score: child,
                        position: Some(position),
                    };
                }
                beta = beta.min(child);
            }

            if self.pruning == Pruning::AlphaBeta && beta <= alpha {
                break;
            }
        }

        best
    }
}

/// Alpha-beta minimax search.
///
/// Call with `depth = 0`, `alpha = NEG_INFINITY` and `beta = POS_INFINITY`
/// at the root; the result then matches [`exhaustive`] exactly.
#[instrument(skip(board), fields(board = %board))]
pub fn search(
    board: &mut Board,
    depth: u32,
    maximizing: bool,
    ai: Player,
    human: Player,
    alpha: i32,
    beta: i32,
) -> Evaluation {
    let mut searcher = Searcher::alpha_beta(Sides { ai, human });
    let evaluation = searcher.run(board, depth, maximizing, alpha, beta);
    debug!(
        score = evaluation.score,
        position = ?evaluation.position,
        nodes = searcher.nodes(),
        "Search complete"
    );
    evaluation
}

/// Unpruned minimax over the full game tree, with the same tie-breaking as
/// [`search`].
#[instrument(skip(board), fields(board = %board))]
pub fn exhaustive(
    board: &mut Board,
    depth: u32,
    maximizing: bool,
    ai: Player,
    human: Player,
) -> Evaluation {
    let mut searcher = Searcher::exhaustive(Sides { ai, human });
    let evaluation = searcher.run(board, depth, maximizing, NEG_INFINITY, POS_INFINITY);
    debug!(
        score = evaluation.score,
        position = ?evaluation.position,
        nodes = searcher.nodes(),
        "Exhaustive search complete"
    );
    evaluation
}
