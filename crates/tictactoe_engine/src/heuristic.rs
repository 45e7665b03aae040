//! Rule-based move picker.
//!
//! A cheap stand-in for the search, for hosts that need an instant answer:
//! win, else block, else center, else a random corner, else a random side.
//! It never looks more than one ply ahead, so it is not optimal.

use crate::rules::LINES;
use crate::{Board, Player, Position, Square};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Finds the empty square that would complete a line for `player`.
///
/// Lines are scanned in rows, columns, diagonals order; the first match wins.
pub fn completing_square(board: &Board, player: Player) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|&&pos| board.get(pos) == Square::Occupied(player))
            .count();
        let mut empty = line.iter().copied().filter(|&pos| board.is_empty(pos));
        match (owned, empty.next(), empty.next()) {
            (2, Some(pos), None) => Some(pos),
            _ => None,
        }
    })
}

fn random_empty<R: Rng + ?Sized>(board: &Board, candidates: &[Position], rng: &mut R) -> Option<Position> {
    let open: Vec<Position> = candidates
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .collect();
    open.choose(rng).copied()
}

/// Picks a move by fixed priorities rather than search.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn heuristic_move<R: Rng + ?Sized>(
    board: &Board,
    ai: Player,
    human: Player,
    rng: &mut R,
) -> Option<Position> {
    if let Some(pos) = completing_square(board, ai) {
        debug!(%pos, "Completing own line");
        return Some(pos);
    }
    if let Some(pos) = completing_square(board, human) {
        debug!(%pos, "Blocking opponent line");
        return Some(pos);
    }
    if board.is_empty(Position::Center) {
        return Some(Position::Center);
    }
    random_empty(board, &Position::CORNERS, rng).or_else(|| random_empty(board, &Position::SIDES, rng))
}
