//! Castling geometry.

use std::fmt;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, king side first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Column of the king before castling.
    pub const KING_HOME_COL: u8 = 4;

    /// Column the participating rook starts on.
    #[inline]
    pub const fn rook_home_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column the rook lands on.
    #[inline]
    pub const fn rook_castled_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Column the king lands on.
    #[inline]
    pub const fn king_castled_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// Columns strictly between king and rook; all must be empty.
    #[inline]
    pub const fn between_cols(self) -> &'static [u8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        }
    }

    /// Columns the king crosses or lands on.
    #[inline]
    pub const fn transit_cols(self) -> &'static [u8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[3, 2],
        }
    }

    /// Classify a king move by its columns. Any two-column king move is a castle.
    #[inline]
    pub const fn from_king_move(from_col: u8, to_col: u8) -> Option<CastleSide> {
        if to_col == from_col + 2 {
            Some(CastleSide::KingSide)
        } else if to_col + 2 == from_col {
            Some(CastleSide::QueenSide)
        } else {
            None
        }
    }

    /// Return the notation for this castle.
    #[inline]
    pub const fn notation(self) -> &'static str {
        match self {
            CastleSide::KingSide => "O-O",
            CastleSide::QueenSide => "O-O-O",
        }
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}
