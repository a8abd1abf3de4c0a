//! Game status evaluation.

use std::fmt;

use crate::attacks::is_in_check;
use crate::board::Board;
use crate::color::Color;
use crate::movegen::piece_has_legal_move;

/// State of the game from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Return `true` once no further moves are accepted.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }

    /// Return the lowercase status name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Return `true` if `side` has at least one move that does not leave its
/// own king attacked.
///
/// This always applies the strict filter, whatever legality mode
/// destinations are generated with, so that mate and stalemate are real.
pub fn has_any_legal_move(board: &Board, side: Color) -> bool {
    board.live_of(side).any(|p| piece_has_legal_move(board, p))
}

/// Classify the position for `side`, the side about to move.
pub fn evaluate_status(board: &Board, side: Color) -> GameStatus {
    match (is_in_check(board, side), has_any_legal_move(board, side)) {
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Checkmate,
        (false, true) => GameStatus::Playing,
        (false, false) => GameStatus::Stalemate,
    }
}
