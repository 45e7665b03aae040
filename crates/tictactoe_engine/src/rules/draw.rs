//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::{Board, Outcome, Square};

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Derives the outcome of a board. A win takes precedence over a full board.
pub fn outcome(board: &Board) -> Outcome {
    if let Some(player) = winner(board) {
        Outcome::Win(player)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn board_from(marks: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.into_iter().zip(marks.chars()) {
            match c {
                'X' => board.set(pos, Square::Occupied(Player::X)),
                'O' => board.set(pos, Square::Occupied(Player::O)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert_eq!(outcome(&board), Outcome::InProgress);
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = board_from("XOXOXXOXO");
        assert!(is_full(&board));
        assert_eq!(outcome(&board), Outcome::Draw);
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = board_from("XXXOO....");
        assert_eq!(outcome(&board), Outcome::Win(Player::X));
    }

    #[test]
    fn test_full_board_with_winner_is_win() {
        // X X X / O O X / X O O
        let board = board_from("XXXOOXXOO");
        assert!(is_full(&board));
        assert_eq!(outcome(&board), Outcome::Win(Player::X));
    }
}
