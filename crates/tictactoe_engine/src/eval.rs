//! Terminal-position scoring.

use crate::{Outcome, Player};

/// Score of an immediate win for the engine's side.
pub const WIN_SCORE: i32 = 10;

/// Scores an outcome from the engine's point of view.
///
/// `depth` counts plies played since the root of the search. Wins lose one
/// point per ply and losses gain one, so the search prefers quick wins and
/// slow losses. Draws and undecided positions score 0.
pub fn score(outcome: Outcome, ai: Player, depth: u32) -> i32 {
    let depth = depth as i32;
    match outcome {
        Outcome::Win(player) if player == ai => WIN_SCORE - depth,
        Outcome::Win(_) => depth - WIN_SCORE,
        Outcome::Draw | Outcome::InProgress => 0,
    }
}
