//! Symbol boards at the host boundary.
//!
//! Clients send boards as nine symbol strings (`" "`, `"X"`, `"O"`, or any
//! two symbols they like). This module validates them and maps them onto
//! engine types; malformed input never reaches the engine.

use derive_more::{Display, Error};
use tictactoe_engine::{Board, Player as Mark, Position, Square};
use tracing::{debug, instrument};

/// Symbol for an empty cell. An empty string is accepted as well.
pub const EMPTY_SYMBOL: &str = " ";

/// Why a board was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardErrorKind {
    /// The board does not have exactly nine cells.
    #[display("board must have 9 cells, got {}", _0)]
    WrongLength(usize),

    /// A cell holds neither mark nor the empty symbol.
    #[display("unknown symbol {:?} at cell {}", symbol, index)]
    UnknownSymbol {
        /// Cell index.
        index: usize,
        /// Offending symbol.
        symbol: String,
    },

    /// The ai and human marks are the same symbol.
    #[display("ai and human marks must differ (both {:?})", _0)]
    SameMarks(String),

    /// A mark is the empty symbol.
    #[display("marks must not be blank")]
    BlankMark,

    /// The request body is not a board request at all (bad JSON, a board
    /// that is not a list of strings, a missing field).
    #[display("malformed request: {}", _0)]
    Malformed(String),
}

/// Invalid board error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid board: {} at {}:{}", kind, file, line)]
pub struct BoardError {
    /// What was wrong with the input.
    pub kind: BoardErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: BoardErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// The two client symbols and the engine marks they stand for.
///
/// The engine's side is always played as `O` internally and the opponent
/// as `X`; clients never see the internal marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolMap {
    ai: String,
    human: String,
}

impl SymbolMap {
    /// Validates a pair of client symbols.
    #[instrument]
    pub fn new(ai: &str, human: &str) -> Result<Self, BoardError> {
        if is_blank(ai) || is_blank(human) {
            return Err(BoardError::new(BoardErrorKind::BlankMark));
        }
        if ai == human {
            return Err(BoardError::new(BoardErrorKind::SameMarks(ai.to_string())));
        }
        Ok(Self {
            ai: ai.to_string(),
            human: human.to_string(),
        })
    }

    /// Engine mark for the ai symbol.
    pub fn ai_mark(&self) -> Mark {
        Mark::O
    }

    /// Engine mark for the human symbol.
    pub fn human_mark(&self) -> Mark {
        Mark::X
    }

    /// Client symbol for an engine mark.
    pub fn symbol(&self, mark: Mark) -> &str {
        if mark == self.ai_mark() {
            &self.ai
        } else {
            &self.human
        }
    }

    /// Renders a board with client symbols, numbering empty squares 1-9.
    pub fn render(&self, board: &Board) -> String {
        let cells: Vec<String> = Position::ALL
            .into_iter()
            .map(|pos| match board.get(pos) {
                Square::Empty => (pos.to_index() + 1).to_string(),
                Square::Occupied(mark) => self.symbol(mark).to_string(),
            })
            .collect();
        cells
            .chunks(3)
            .map(|row| row.join("|"))
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }

    fn square(&self, symbol: &str) -> Option<Square> {
        if is_blank(symbol) {
            Some(Square::Empty)
        } else if symbol == self.ai {
            Some(Square::Occupied(self.ai_mark()))
        } else if symbol == self.human {
            Some(Square::Occupied(self.human_mark()))
        } else {
            None
        }
    }
}

fn is_blank(symbol: &str) -> bool {
    symbol.is_empty() || symbol == EMPTY_SYMBOL
}

/// Parses nine client symbols into an engine board.
#[instrument(skip(cells), fields(cells = cells.len()))]
pub fn parse_board<S: AsRef<str>>(cells: &[S], symbols: &SymbolMap) -> Result<Board, BoardError> {
    if cells.len() != Position::ALL.len() {
        return Err(BoardError::new(BoardErrorKind::WrongLength(cells.len())));
    }

    let mut board = Board::new();
    for (pos, cell) in Position::ALL.into_iter().zip(cells) {
        let cell = cell.as_ref();
        let square = symbols.square(cell).ok_or_else(|| {
            BoardError::new(BoardErrorKind::UnknownSymbol {
                index: pos.to_index(),
                symbol: cell.to_string(),
            })
        })?;
        board.set(pos, square);
    }

    debug!(occupied = board.occupied(), "Board parsed");
    Ok(board)
}

/// Splits a compact board such as `"XX.OO...."` into cell symbols.
///
/// `.`, `_`, `-` and space mark empty cells; every other character is taken
/// as a symbol on its own.
pub fn split_compact(compact: &str) -> Vec<String> {
    compact
        .chars()
        .map(|c| match c {
            '.' | '_' | '-' | ' ' => EMPTY_SYMBOL.to_string(),
            other => other.to_string(),
        })
        .collect()
}
