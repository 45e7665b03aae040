//! Tests for the move-validated game record.

use tictactoe_engine::{Game, MoveError, Outcome, Player, Position};

fn replay(moves: &[Position]) -> Game {
    let mut game = Game::new();
    for &pos in moves {
        game.make_move(pos).expect("Valid move");
    }
    game
}

#[test]
fn test_game_lifecycle() {
    let mut game = Game::new();
    assert_eq!(game.to_move(), Player::X);

    let status = game.make_move(Position::Center).expect("Valid move");
    assert_eq!(status, Outcome::InProgress);
    assert_eq!(game.to_move(), Player::O);
    assert_eq!(game.history(), &[Position::Center]);
}

#[test]
fn test_occupied_square_rejected() {
    let mut game = replay(&[Position::Center]);
    let result = game.make_move(Position::Center);
    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut game = Game::new();
    assert_eq!(game.make_move_at(9), Err(MoveError::OutOfBounds(9)));
    assert_eq!(game.make_move_at(4), Ok(Outcome::InProgress));
}

#[test]
fn test_win_detection() {
    let game = replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
        Position::TopRight, // X wins top row
    ]);

    assert_eq!(game.status(), Outcome::Win(Player::X));
    assert!(game.is_over());
    assert_eq!(game.to_move(), Player::X);
}

#[test]
fn test_draw_detection() {
    let game = replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopRight,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight, // Draw
    ]);

    assert_eq!(game.status(), Outcome::Draw);
}

#[test]
fn test_moves_rejected_after_game_over() {
    let mut game = replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
        Position::TopRight,
    ]);

    assert_eq!(game.make_move(Position::BottomRight), Err(MoveError::GameOver));
    assert_eq!(game.history().len(), 5);
}

#[test]
fn test_starting_with_o() {
    let mut game = Game::starting_with(Player::O);
    game.make_move(Position::TopLeft).expect("Valid move");
    assert_eq!(game.board().get(Position::TopLeft), tictactoe_engine::Square::Occupied(Player::O));
    assert_eq!(game.to_move(), Player::X);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        MoveError::SquareOccupied(Position::Center).to_string(),
        "Square Center is already occupied"
    );
    assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
}
