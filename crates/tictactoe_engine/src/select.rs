//! Move selection: the engine's public decision entry point.

use crate::search::{NEG_INFINITY, POS_INFINITY, search};
use crate::{Board, Player, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument, warn};

/// Chooses the engine's move.
///
/// 1. If the center is empty, take it without searching.
/// 2. Otherwise run a full alpha-beta search from this position.
/// 3. If the search yields no move (the board is already won or full),
///    pick a uniformly random empty square from `rng`.
///
/// Returns `None` when no empty square remains. The board is left exactly
/// as it was passed in.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn best_move<R: Rng + ?Sized>(
    board: &mut Board,
    ai: Player,
    human: Player,
    rng: &mut R,
) -> Option<Position> {
    if board.is_empty(Position::Center) {
        debug!("Center is open, taking it");
        return Some(Position::Center);
    }

    let evaluation = search(board, 0, true, ai, human, NEG_INFINITY, POS_INFINITY);
    if let Some(position) = evaluation.position {
        debug!(%position, score = evaluation.score, "Engine chose position");
        return Some(position);
    }

    let fallback = Position::valid_moves(board).choose(rng).copied();
    warn!(?fallback, "Search returned no move on a terminal board, falling back to random square");
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_empty_board_takes_center() {
        let mut board = Board::new();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(best_move(&mut board, Player::O, Player::X, &mut rng), Some(Position::Center));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::from_squares([
            Square::Occupied(Player::X),
            Square::Occupied(Player::O),
            Square::Occupied(Player::X),
            Square::Occupied(Player::O),
            Square::Occupied(Player::X),
            Square::Occupied(Player::X),
            Square::Occupied(Player::O),
            Square::Occupied(Player::X),
            Square::Occupied(Player::O),
        ]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(best_move(&mut board, Player::O, Player::X, &mut rng), None);
    }

    #[test]
    fn test_won_board_falls_back_to_empty_square() {
        // X X X / O O . / . . .
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.set(pos, Square::Occupied(Player::X));
        }
        board.set(Position::MiddleLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));

        let empty = Position::valid_moves(&board);
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let chosen = best_move(&mut board, Player::O, Player::X, &mut rng);
            assert!(chosen.is_some_and(|pos| empty.contains(&pos)));
        }
    }

    #[test]
    fn test_fallback_is_reproducible_under_seed() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            board.set(pos, Square::Occupied(Player::O));
        }

        let first = best_move(&mut board, Player::X, Player::O, &mut ChaCha8Rng::seed_from_u64(7));
        let second = best_move(&mut board, Player::X, Player::O, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(first, second);
    }
}
