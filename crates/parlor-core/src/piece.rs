//! Individual pieces: identity, placement, and lifecycle flags.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Stable identity of one piece for the lifetime of a game.
///
/// Displays as color letter, kind letter, and ordinal: `wp1`, `br2`, `bn1`.
/// Kings and the first queen of a side carry no ordinal (`wk`, `bq`).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId {
    color: Color,
    kind: PieceKind,
    ordinal: u8,
}

impl PieceId {
    /// Create an id. Ordinals start at 1 within each (color, kind) group.
    #[inline]
    pub const fn new(color: Color, kind: PieceKind, ordinal: u8) -> PieceId {
        PieceId {
            color,
            kind,
            ordinal,
        }
    }

    /// Return the color this id belongs to.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return the piece kind this id belongs to.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the ordinal within the (color, kind) group.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self.ordinal
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.letter(), self.kind.letter())?;
        let unnumbered = matches!(self.kind, PieceKind::King | PieceKind::Queen) && self.ordinal <= 1;
        if !unnumbered {
            write!(f, "{}", self.ordinal)?;
        }
        Ok(())
    }
}

impl fmt::Debug for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// One chess piece and its current state.
///
/// Pieces are never removed from a [`Board`](crate::Board); a captured piece
/// keeps its last square and has `captured` set.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    id: PieceId,
    square: Square,
    has_moved: bool,
    captured: bool,
}

impl Piece {
    /// Create an unmoved, live piece.
    #[inline]
    pub const fn new(id: PieceId, square: Square) -> Piece {
        Piece {
            id,
            square,
            has_moved: false,
            captured: false,
        }
    }

    /// Return the piece id.
    #[inline]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.id.kind()
    }

    /// Return the piece color.
    #[inline]
    pub const fn color(&self) -> Color {
        self.id.color()
    }

    /// Return the square the piece occupies (or last occupied, if captured).
    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    /// Return the row of the piece's square.
    #[inline]
    pub const fn row(&self) -> u8 {
        self.square.row()
    }

    /// Return the column of the piece's square.
    #[inline]
    pub const fn col(&self) -> u8 {
        self.square.col()
    }

    /// Return `true` once the piece has made at least one move.
    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Return `true` if the piece has been captured.
    #[inline]
    pub const fn is_captured(&self) -> bool {
        self.captured
    }

    /// Return the Unicode glyph for this piece.
    pub const fn symbol(&self) -> char {
        match (self.color(), self.kind()) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }

    /// Return the FEN letter: uppercase for White, lowercase for Black.
    pub fn fen_char(&self) -> char {
        let c = self.kind().letter();
        match self.color() {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    #[inline]
    pub(crate) fn with_moved(mut self, has_moved: bool) -> Piece {
        self.has_moved = has_moved;
        self
    }

    #[inline]
    pub(crate) fn relocate(&mut self, to: Square) {
        self.square = to;
        self.has_moved = true;
    }

    #[inline]
    pub(crate) fn mark_captured(&mut self) {
        self.captured = true;
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.id, self.square)?;
        if self.has_moved {
            write!(f, "*")?;
        }
        if self.captured {
            write!(f, "x")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Piece, PieceId};
    use crate::color::Color;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn id_display_matches_tags() {
        assert_eq!(PieceId::new(Color::White, PieceKind::King, 1).to_string(), "wk");
        assert_eq!(PieceId::new(Color::Black, PieceKind::Queen, 1).to_string(), "bq");
        assert_eq!(PieceId::new(Color::White, PieceKind::Queen, 2).to_string(), "wq2");
        assert_eq!(PieceId::new(Color::Black, PieceKind::Pawn, 3).to_string(), "bp3");
        assert_eq!(PieceId::new(Color::White, PieceKind::Rook, 2).to_string(), "wr2");
    }

    #[test]
    fn ids_are_distinct_set_keys() {
        let ids: HashSet<PieceId> = crate::board::initial_pieces().iter().map(|p| p.id()).collect();
        assert_eq!(ids.len(), 32);
        assert!(ids.contains(&PieceId::new(Color::Black, PieceKind::Knight, 2)));
        assert_ne!(
            PieceId::new(Color::White, PieceKind::Rook, 1),
            PieceId::new(Color::Black, PieceKind::Rook, 1)
        );
    }

    #[test]
    fn symbols() {
        let wk = Piece::new(PieceId::new(Color::White, PieceKind::King, 1), Square::E1);
        let bp = Piece::new(PieceId::new(Color::Black, PieceKind::Pawn, 1), Square::A7);
        assert_eq!(wk.symbol(), '♔');
        assert_eq!(bp.symbol(), '♟');
        assert_eq!(wk.fen_char(), 'K');
        assert_eq!(bp.fen_char(), 'p');
    }

    #[test]
    fn relocate_sets_has_moved() {
        let mut p = Piece::new(PieceId::new(Color::White, PieceKind::Pawn, 5), Square::E2);
        assert!(!p.has_moved());
        p.relocate(Square::E4);
        assert_eq!(p.square(), Square::E4);
        assert!(p.has_moved());
        assert!(!p.is_captured());
        p.mark_captured();
        assert!(p.is_captured());
        assert_eq!(p.square(), Square::E4);
    }

    #[test]
    fn debug_format() {
        let mut p = Piece::new(PieceId::new(Color::Black, PieceKind::Knight, 2), Square::G8);
        assert_eq!(format!("{p:?}"), "bn2@g8");
        p.relocate(Square::F6);
        assert_eq!(format!("{p:?}"), "bn2@f6*");
    }
}
