//! Terminal play: a human against the engine.

use anyhow::{Context, Result, bail};
use rand::Rng;
use std::io::{BufRead, Write};
use tictactoe_engine::{Game, Outcome, Player as Mark, Position, best_move, heuristic_move};
use tracing::{debug, info, instrument};

/// Trait for players that can make moves.
pub trait Player {
    /// Chooses the next position for the player to move in `game`.
    fn choose(&mut self, game: &Game) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Human player reading moves (1-9 or a label such as "center") from a reader.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

/// Parses a human move: 1-9 counts squares from the top-left.
pub fn parse_human_move(line: &str) -> Option<Position> {
    match line.trim().parse::<usize>() {
        Ok(n) if (1..=9).contains(&n) => Position::from_index(n - 1),
        Ok(_) => None,
        Err(_) => Position::from_label(line),
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn choose(&mut self, game: &Game) -> Result<Position> {
        loop {
            write!(self.output, "Move 1-9: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed");
            }

            match parse_human_move(&line) {
                Some(pos) if game.board().is_empty(pos) => return Ok(pos),
                Some(pos) => writeln!(self.output, "{} is taken, try again.", pos)?,
                None => writeln!(self.output, "Enter a number from 1 to 9.")?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Engine-backed player.
pub struct EnginePlayer<G> {
    name: String,
    mark: Mark,
    rng: G,
}

impl<G: Rng> EnginePlayer<G> {
    /// Creates an engine player for `mark`.
    pub fn new(name: impl Into<String>, mark: Mark, rng: G) -> Self {
        Self {
            name: name.into(),
            mark,
            rng,
        }
    }
}

impl<G: Rng> Player for EnginePlayer<G> {
    fn choose(&mut self, game: &Game) -> Result<Position> {
        let mut board = *game.board();
        let pos = best_move(&mut board, self.mark, self.mark.opponent(), &mut self.rng)
            .context("No legal move available")?;
        debug!(player = %self.name, %pos, "Engine chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Rule-based player: wins, blocks, then prefers center, corners and sides.
///
/// It never searches, so it can be beaten.
pub struct HeuristicPlayer<G> {
    name: String,
    mark: Mark,
    rng: G,
}

impl<G: Rng> HeuristicPlayer<G> {
    /// Creates a heuristic player for `mark`.
    pub fn new(name: impl Into<String>, mark: Mark, rng: G) -> Self {
        Self {
            name: name.into(),
            mark,
            rng,
        }
    }
}

impl<G: Rng> Player for HeuristicPlayer<G> {
    fn choose(&mut self, game: &Game) -> Result<Position> {
        let pos = heuristic_move(game.board(), self.mark, self.mark.opponent(), &mut self.rng)
            .context("No legal move available")?;
        debug!(player = %self.name, %pos, "Heuristic chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Runs a game between two players, printing the board to `out`.
pub struct Match<W> {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    out: W,
}

impl<W: Write> Match<W> {
    /// Creates a match; `first` moves first.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>, first: Mark, out: W) -> Self {
        Self {
            game: Game::starting_with(first),
            player_x,
            player_o,
            out,
        }
    }

    /// Returns the game so far.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays until the game ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome> {
        info!("Starting match");

        while !self.game.is_over() {
            writeln!(self.out, "\n{}\n", self.game.board())?;

            let player = match self.game.to_move() {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let pos = player.choose(&self.game)?;
            writeln!(self.out, "{} plays {}", player.name(), pos)?;

            self.game.make_move(pos)?;
        }

        let result = self.game.status();
        writeln!(self.out, "\n{}\n", self.game.board())?;
        match result.winner() {
            Some(Mark::X) => writeln!(self.out, "{} wins!", self.player_x.name())?,
            Some(Mark::O) => writeln!(self.out, "{} wins!", self.player_o.name())?,
            None => writeln!(self.out, "It's a draw.")?,
        }

        info!(outcome = ?result, moves = self.game.history().len(), "Match over");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_human_move() {
        assert_eq!(parse_human_move("1\n"), Some(Position::TopLeft));
        assert_eq!(parse_human_move(" 9 "), Some(Position::BottomRight));
        assert_eq!(parse_human_move("center"), Some(Position::Center));
        assert_eq!(parse_human_move("0"), None);
        assert_eq!(parse_human_move("10"), None);
        assert_eq!(parse_human_move("nope"), None);
    }
}
