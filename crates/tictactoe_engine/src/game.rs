//! Move-validated game record for hosts that run a full match.

use crate::rules::outcome;
use crate::{Board, Outcome, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The index does not name a square.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// A tic-tac-toe game: board, side to move, status and history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: Outcome,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self::starting_with(Player::X)
    }

    /// Creates a new game with `first` to move.
    #[instrument]
    pub fn starting_with(first: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            status: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> Outcome {
        self.status
    }

    /// Returns the positions played, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Places the current player's mark at `pos`.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(pos);
        self.status = outcome(&self.board);
        if !self.is_over() {
            self.to_move = self.to_move.opponent();
        }

        debug!(status = ?self.status, "Move applied");
        Ok(self.status)
    }

    /// Places the current player's mark at a raw board index.
    pub fn make_move_at(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.make_move(pos)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
