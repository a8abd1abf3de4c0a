//! The board: the full piece set plus occupancy queries derived from it.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::{Piece, PieceId};
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Kinds along the back rank, a-file to h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Every piece of a game, live or captured.
///
/// There is no separate grid: occupancy is answered by scanning the live
/// pieces, so squares and pieces can never disagree.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    pieces: Vec<Piece>,
}

impl Board {
    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        Board {
            pieces: initial_pieces(),
        }
    }

    /// Build a board from pieces, checking the occupancy and king invariants.
    pub(crate) fn from_pieces(pieces: Vec<Piece>) -> Result<Board, BoardError> {
        let board = Board { pieces };
        board.validate()?;
        Ok(board)
    }

    /// Return the live piece on `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.live().find(|p| p.square() == sq)
    }

    /// Return `true` if a live piece stands on `sq`.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.piece_at(sq).is_some()
    }

    /// Look a piece up by id, live or captured.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id() == id)
    }

    /// Return every piece, live and captured, in creation order.
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Iterate over the live pieces.
    pub fn live(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(|p| !p.is_captured())
    }

    /// Iterate over the live pieces of one color.
    pub fn live_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.live().filter(move |p| p.color() == color)
    }

    /// Iterate over the captured pieces of one color.
    pub fn captured(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces
            .iter()
            .filter(move |p| p.is_captured() && p.color() == color)
    }

    /// Return the set of squares holding a live piece.
    pub fn occupancy(&self) -> SquareSet {
        self.live().map(Piece::square).collect()
    }

    /// Return the square of the live king of `color`, if there is one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.live_of(color)
            .find(|p| p.kind() == PieceKind::King)
            .map(Piece::square)
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|p| p.id() == id)
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self.pieces.iter().filter(|p| p.color() == color).count();
            if count > 16 {
                return Err(BoardError::TooManyPieces { color, count });
            }

            let kings = self
                .live_of(color)
                .filter(|p| p.kind() == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(BoardError::InvalidKingCount {
                    color,
                    count: kings,
                });
            }
        }

        let mut seen = SquareSet::EMPTY;
        for piece in self.live() {
            if seen.contains(piece.square()) {
                return Err(BoardError::OverlappingPieces {
                    square: piece.square(),
                });
            }
            seen.insert(piece.square());
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

/// Produce the 32 pieces of a new game.
///
/// Order and ids follow the board top to bottom: Black's back rank
/// (`br1 bn1 bb1 bq bk bb2 bn2 br2`), Black's pawns `bp1..bp8`, White's pawns
/// `wp1..wp8`, then White's back rank.
pub fn initial_pieces() -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(32);
    push_back_rank(&mut pieces, Color::Black);
    push_pawns(&mut pieces, Color::Black);
    push_pawns(&mut pieces, Color::White);
    push_back_rank(&mut pieces, Color::White);
    pieces
}

fn push_back_rank(pieces: &mut Vec<Piece>, color: Color) {
    let mut ordinals = [0u8; PieceKind::COUNT];
    for (col, kind) in BACK_RANK.into_iter().enumerate() {
        ordinals[kind.index()] += 1;
        let id = PieceId::new(color, kind, ordinals[kind.index()]);
        if let Some(sq) = Square::new(color.back_row(), col as u8) {
            pieces.push(Piece::new(id, sq));
        }
    }
}

fn push_pawns(pieces: &mut Vec<Piece>, color: Color) {
    for col in 0u8..8 {
        let id = PieceId::new(color, PieceKind::Pawn, col + 1);
        if let Some(sq) = Square::new(color.pawn_row(), col) {
            pieces.push(Piece::new(id, sq));
        }
    }
}

/// Return `true` if `piece` stands where a piece of its kind starts the game.
pub(crate) fn on_home_square(piece: &Piece) -> bool {
    let color = piece.color();
    match piece.kind() {
        PieceKind::Pawn => piece.row() == color.pawn_row(),
        kind => piece.row() == color.back_row() && BACK_RANK[piece.col() as usize] == kind,
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 glyph grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0u8..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0u8..8 {
                let c = Square::new(row, col)
                    .and_then(|sq| board.piece_at(sq))
                    .map_or('·', Piece::symbol);
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::piece::{Piece, PieceId};
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn starting_position_validates() {
        let board = Board::starting_position();
        board.validate().unwrap();
        assert_eq!(board.pieces().len(), 32);
        assert_eq!(board.occupancy().len(), 32);
    }

    #[test]
    fn starting_layout() {
        let board = Board::starting_position();
        let at = |sq| board.piece_at(sq).map(|p| (p.color(), p.kind()));
        assert_eq!(at(Square::E1), Some((Color::White, PieceKind::King)));
        assert_eq!(at(Square::D1), Some((Color::White, PieceKind::Queen)));
        assert_eq!(at(Square::E8), Some((Color::Black, PieceKind::King)));
        assert_eq!(at(Square::A8), Some((Color::Black, PieceKind::Rook)));
        assert_eq!(at(Square::G8), Some((Color::Black, PieceKind::Knight)));
        assert_eq!(at(Square::C2), Some((Color::White, PieceKind::Pawn)));
        assert_eq!(at(Square::E4), None);
    }

    #[test]
    fn starting_ids() {
        let board = Board::starting_position();
        let id_at = |sq| board.piece_at(sq).map(|p| p.id().to_string());
        assert_eq!(id_at(Square::A8).as_deref(), Some("br1"));
        assert_eq!(id_at(Square::H8).as_deref(), Some("br2"));
        assert_eq!(id_at(Square::D8).as_deref(), Some("bq"));
        assert_eq!(id_at(Square::E1).as_deref(), Some("wk"));
        assert_eq!(id_at(Square::A2).as_deref(), Some("wp1"));
        assert_eq!(id_at(Square::H7).as_deref(), Some("bp8"));
        assert_eq!(id_at(Square::G1).as_deref(), Some("wn2"));
    }

    #[test]
    fn nothing_has_moved_at_start() {
        let board = Board::starting_position();
        assert!(board.pieces().iter().all(|p| !p.has_moved() && !p.is_captured()));
    }

    #[test]
    fn king_square() {
        let board = Board::starting_position();
        assert_eq!(board.king_square(Color::White), Some(Square::E1));
        assert_eq!(board.king_square(Color::Black), Some(Square::E8));
    }

    #[test]
    fn captured_piece_leaves_occupancy() {
        let mut board = Board::starting_position();
        let id = PieceId::new(Color::Black, PieceKind::Pawn, 4);
        board.piece_mut(id).unwrap().mark_captured();
        assert!(board.piece_at(Square::D7).is_none());
        assert_eq!(board.captured(Color::Black).count(), 1);
        assert_eq!(board.live().count(), 31);
        assert!(board.piece(id).unwrap().is_captured());
    }

    #[test]
    fn from_pieces_rejects_overlap() {
        let wk = Piece::new(PieceId::new(Color::White, PieceKind::King, 1), Square::E1);
        let bk = Piece::new(PieceId::new(Color::Black, PieceKind::King, 1), Square::E8);
        let wq = Piece::new(PieceId::new(Color::White, PieceKind::Queen, 1), Square::E8);
        let err = Board::from_pieces(vec![wk, bk, wq]).unwrap_err();
        assert_eq!(err, BoardError::OverlappingPieces { square: Square::E8 });
    }

    #[test]
    fn from_pieces_rejects_missing_king() {
        let wk = Piece::new(PieceId::new(Color::White, PieceKind::King, 1), Square::E1);
        let err = Board::from_pieces(vec![wk]).unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidKingCount {
                color: Color::Black,
                count: 0
            }
        );
    }

    #[test]
    fn pretty_print() {
        let board = Board::starting_position();
        let output = format!("{}", board.pretty());
        assert!(output.starts_with("8  ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜"));
        assert!(output.contains("1  ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖"));
        assert!(output.contains("4  · · · · · · · ·"));
        assert!(output.ends_with("a b c d e f g h"));
    }
}
