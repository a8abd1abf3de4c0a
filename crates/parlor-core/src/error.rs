//! Error types for board construction and move application.

use crate::color::Color;
use crate::piece::PieceId;
use crate::square::Square;

/// Errors from structural validation of a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one live king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of live kings found.
        count: usize,
    },
    /// Two live pieces claim the same square.
    #[error("two pieces occupy {square}")]
    OverlappingPieces {
        /// The contested square.
        square: Square,
    },
    /// A side has more than the 16 pieces a game starts with.
    #[error("{color} has {count} pieces, at most 16 allowed")]
    TooManyPieces {
        /// Which side has too many pieces.
        color: Color,
        /// Number of pieces found.
        count: usize,
    },
}

/// Errors that occur when parsing board placement text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The text is empty or carries more than a placement and a castling field.
    #[error("expected 1 or 2 fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The placement does not have exactly 8 rows.
    #[error("expected 8 rows in piece placement, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 squares.
    #[error("row {row} describes {length} squares, expected 8")]
    BadRowLength {
        /// Zero-based row (0 = rank 8).
        row: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// An unrecognized character appeared in the castling field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Reasons a requested move is rejected. The board is untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// No piece with this id exists on the board.
    #[error("no piece with id {id}")]
    NoSuchPiece {
        /// The unknown id.
        id: PieceId,
    },
    /// The piece has already been captured.
    #[error("{id} has been captured")]
    PieceCaptured {
        /// The captured piece.
        id: PieceId,
    },
    /// The piece does not belong to the side to move.
    #[error("{id} cannot move while it is {side_to_move}'s turn")]
    WrongSide {
        /// The piece that was asked to move.
        id: PieceId,
        /// The side whose turn it is.
        side_to_move: Color,
    },
    /// The destination is not among the piece's legal destinations.
    #[error("{id} cannot move from {from} to {to}")]
    InvalidMove {
        /// The piece that was asked to move.
        id: PieceId,
        /// Its current square.
        from: Square,
        /// The rejected destination.
        to: Square,
    },
}

/// A legality mode name that is neither `pseudo` nor `strict`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown legality mode: \"{found}\"")]
pub struct ParseLegalityError {
    /// The unrecognized text.
    pub found: String,
}
