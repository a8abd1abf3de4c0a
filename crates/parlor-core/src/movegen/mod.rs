//! Destination generation for a single piece.
//!
//! [`pseudo_destinations`] applies movement patterns and occupancy only.
//! [`legal_destinations`] adds the self-check filter when the rules ask for it.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::attacks::is_in_check;
use crate::board::Board;
use crate::color::Color;
use crate::config::{Legality, RulesConfig};
use crate::make_move::play_unchecked;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

/// What a moving piece finds on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    Empty,
    Enemy,
    /// Own piece, or the enemy king, which is never captured.
    Blocked,
}

pub(crate) fn classify(board: &Board, mover: Color, sq: Square) -> Target {
    match board.piece_at(sq) {
        None => Target::Empty,
        Some(p) if p.color() == mover || p.kind() == PieceKind::King => Target::Blocked,
        Some(_) => Target::Enemy,
    }
}

fn generate(board: &Board, piece: &Piece, guard_transit: bool) -> SquareSet {
    if piece.is_captured() {
        return SquareSet::EMPTY;
    }
    match piece.kind() {
        PieceKind::Pawn => pawns::destinations(board, piece),
        PieceKind::Knight => knights::destinations(board, piece),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => sliders::destinations(board, piece),
        PieceKind::King => king::destinations(board, piece, guard_transit),
    }
}

/// Every square `piece` could reach by its movement pattern.
///
/// The mover's own king may be left attacked. A captured piece has none.
pub fn pseudo_destinations(board: &Board, piece: &Piece) -> SquareSet {
    generate(board, piece, false)
}

/// Pseudo destinations with self-check removed and castling transit guarded.
pub fn strict_destinations(board: &Board, piece: &Piece) -> SquareSet {
    generate(board, piece, true)
        .iter()
        .filter(|&to| !leaves_king_attacked(board, piece, to))
        .collect()
}

/// Destinations of `piece` under the configured legality mode.
pub fn legal_destinations(board: &Board, piece: &Piece, config: &RulesConfig) -> SquareSet {
    match config.legality {
        Legality::Pseudo => pseudo_destinations(board, piece),
        Legality::Strict => strict_destinations(board, piece),
    }
}

/// Play `piece` to `to` on a scratch copy and report whether its king is attacked afterwards.
pub(crate) fn leaves_king_attacked(board: &Board, piece: &Piece, to: Square) -> bool {
    let mut scratch = board.clone();
    match play_unchecked(&mut scratch, piece.id(), to) {
        Some(_) => is_in_check(&scratch, piece.color()),
        None => true,
    }
}

/// Return `true` if `piece` has at least one strictly legal destination.
pub(crate) fn piece_has_legal_move(board: &Board, piece: &Piece) -> bool {
    generate(board, piece, true)
        .iter()
        .any(|to| !leaves_king_attacked(board, piece, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn twenty_opening_moves() {
        let b = Board::starting_position();
        let total: usize = b
            .live_of(Color::White)
            .map(|p| pseudo_destinations(&b, p).len())
            .sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn pinned_piece_moves_only_in_pseudo_mode() {
        // White bishop d2 pinned against e1 by the black bishop on b4.
        let b = board("4k3/8/8/8/1b6/8/3B4/4K3");
        let bishop = b.piece_at(Square::D2).unwrap();
        let pseudo = legal_destinations(&b, bishop, &RulesConfig::default());
        let strict = legal_destinations(&b, bishop, &RulesConfig::strict());
        assert!(pseudo.contains(Square::E3));
        assert!(!strict.contains(Square::E3));
        assert!(strict.contains(Square::C3));
        assert!(strict.contains(Square::B4));
        assert_eq!(strict.len(), 2);
    }

    #[test]
    fn strict_king_avoids_attacked_squares() {
        let b = board("4k3/8/8/8/8/8/3r4/4K3");
        let king = b.piece_at(Square::E1).unwrap();
        let strict = strict_destinations(&b, king);
        // d1 and e2 stay on the rook's lines; capturing d2 is fine.
        assert!(strict.contains(Square::D2));
        assert!(strict.contains(Square::F1));
        assert!(!strict.contains(Square::D1));
        assert!(!strict.contains(Square::E2));
        assert!(!strict.contains(Square::F2));
    }

    #[test]
    fn captured_piece_has_no_destinations() {
        let mut b = Board::starting_position();
        let id = b.piece_at(Square::B1).unwrap().id();
        b.piece_mut(id).unwrap().mark_captured();
        let knight = *b.piece(id).unwrap();
        assert!(pseudo_destinations(&b, &knight).is_empty());
    }

    #[test]
    fn classify_targets() {
        let b = Board::starting_position();
        assert_eq!(classify(&b, Color::White, Square::E4), Target::Empty);
        assert_eq!(classify(&b, Color::White, Square::E2), Target::Blocked);
        assert_eq!(classify(&b, Color::White, Square::D7), Target::Enemy);
        assert_eq!(classify(&b, Color::White, Square::E8), Target::Blocked);
    }
}
