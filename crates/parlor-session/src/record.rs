//! Move records and their notation.

use std::fmt;

use parlor_core::{CastleSide, Color, MoveOutcome, PieceId, PieceKind, Square};

/// One applied move, as reported to observers and kept in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// Half-move number, starting at 1.
    pub ply: u32,
    /// The piece that moved.
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
    /// The piece taken, if any.
    pub captured: Option<PieceId>,
    pub castle: Option<CastleSide>,
}

impl MoveRecord {
    /// Build the record for the `ply`-th move from an applied outcome.
    pub fn from_outcome(ply: u32, outcome: &MoveOutcome) -> MoveRecord {
        MoveRecord {
            ply,
            piece: outcome.piece,
            from: outcome.from,
            to: outcome.to,
            captured: outcome.captured.map(|p| p.id()),
            castle: outcome.castle,
        }
    }

    /// Return the color that made the move.
    #[inline]
    pub const fn color(&self) -> Color {
        self.piece.color()
    }

    /// Return the kind of the moving piece.
    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.piece.kind()
    }

    /// Return `true` if a piece was taken.
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Render the move in short algebraic form.
    ///
    /// Castles print as `O-O` / `O-O-O`. Pawn captures carry the origin file
    /// (`exd5`), quiet pawn moves only the destination (`e4`). Other pieces
    /// print their letter, an `x` on capture, then the destination (`Nxf3`).
    /// Check and mate suffixes are not added.
    pub fn notation(&self) -> String {
        if let Some(side) = self.castle {
            return side.notation().to_string();
        }
        let capture = if self.is_capture() { "x" } else { "" };
        match self.kind().notation_letter() {
            None if self.is_capture() => format!("{}x{}", self.from.file_char(), self.to),
            None => self.to.to_string(),
            Some(letter) => format!("{letter}{capture}{}", self.to),
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: PieceKind, from: Square, to: Square, capture: bool) -> MoveRecord {
        MoveRecord {
            ply: 1,
            piece: PieceId::new(Color::White, kind, 1),
            from,
            to,
            captured: capture.then(|| PieceId::new(Color::Black, PieceKind::Pawn, 4)),
            castle: None,
        }
    }

    #[test]
    fn pawn_moves() {
        assert_eq!(record(PieceKind::Pawn, Square::E2, Square::E4, false).notation(), "e4");
        assert_eq!(record(PieceKind::Pawn, Square::E4, Square::D5, true).notation(), "exd5");
    }

    #[test]
    fn piece_moves() {
        assert_eq!(record(PieceKind::Knight, Square::G1, Square::F3, false).notation(), "Nf3");
        assert_eq!(record(PieceKind::Queen, Square::D1, Square::H5, true).notation(), "Qxh5");
        assert_eq!(record(PieceKind::King, Square::E1, Square::E2, false).notation(), "Ke2");
    }

    #[test]
    fn castles() {
        let mut rec = record(PieceKind::King, Square::E1, Square::G1, false);
        rec.castle = Some(CastleSide::KingSide);
        assert_eq!(rec.to_string(), "O-O");
        rec.castle = Some(CastleSide::QueenSide);
        assert_eq!(rec.to_string(), "O-O-O");
    }
}
