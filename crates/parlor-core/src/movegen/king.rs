//! King steps and castling.

use crate::attacks::{KING_STEPS, is_in_check, is_square_attacked};
use crate::board::Board;
use crate::castle::CastleSide;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::{Target, classify};

/// One-square steps plus any available castle.
///
/// The king never lands next to the opposing king in either mode. With
/// `guard_transit` set, a castle whose king would cross or land on an
/// attacked square is dropped.
pub(super) fn destinations(board: &Board, king: &Piece, guard_transit: bool) -> SquareSet {
    let color = king.color();
    let rival = board.king_square(color.flip());
    let mut out: SquareSet = KING_STEPS
        .iter()
        .filter_map(|&(d_row, d_col)| king.square().offset(d_row, d_col))
        .filter(|&sq| classify(board, color, sq) != Target::Blocked && !touches(rival, sq))
        .collect();

    if king.has_moved() || king.col() != CastleSide::KING_HOME_COL || is_in_check(board, color) {
        return out;
    }

    for side in CastleSide::ALL {
        if !castle_path_open(board, king, side) {
            continue;
        }
        if guard_transit
            && side
                .transit_cols()
                .iter()
                .filter_map(|&col| king.square().with_col(col))
                .any(|sq| is_square_attacked(board, sq, color.flip()))
        {
            continue;
        }
        if let Some(dest) = king
            .square()
            .with_col(side.king_castled_col())
            .filter(|&dest| !touches(rival, dest))
        {
            out.insert(dest);
        }
    }

    out
}

fn touches(rival: Option<Square>, sq: Square) -> bool {
    rival.is_some_and(|k| k.row().abs_diff(sq.row()) <= 1 && k.col().abs_diff(sq.col()) <= 1)
}

/// An unmoved rook of the king's color on its home corner, with every square
/// between them empty.
fn castle_path_open(board: &Board, king: &Piece, side: CastleSide) -> bool {
    let home = king.square();
    let rook_ready = home
        .with_col(side.rook_home_col())
        .and_then(|sq| board.piece_at(sq))
        .is_some_and(|rook| {
            rook.kind() == PieceKind::Rook && rook.color() == king.color() && !rook.has_moved()
        });
    rook_ready
        && side
            .between_cols()
            .iter()
            .filter_map(|&col| home.with_col(col))
            .all(|sq: Square| !board.is_occupied(sq))
}

#[cfg(test)]
mod tests {
    use super::destinations;
    use crate::attacks::is_in_check;
    use crate::board::Board;
    use crate::color::Color;
    use crate::square::Square;
    use crate::square_set::SquareSet;

    fn king_dests(text: &str, king: Square, guard: bool) -> SquareSet {
        let board: Board = text.parse().unwrap();
        destinations(&board, board.piece_at(king).unwrap(), guard)
    }

    #[test]
    fn starting_king_is_boxed_in() {
        let board = Board::starting_position();
        assert!(destinations(&board, board.piece_at(Square::E1).unwrap(), false).is_empty());
    }

    #[test]
    fn both_castles_available() {
        let d = king_dests("r3k2r/8/8/8/8/8/8/R3K2R KQkq", Square::E1, false);
        assert!(d.contains(Square::G1));
        assert!(d.contains(Square::C1));
        assert_eq!(d.len(), 7);
    }

    #[test]
    fn castle_needs_rights() {
        let d = king_dests("r3k2r/8/8/8/8/8/8/R3K2R Qkq", Square::E1, false);
        assert!(!d.contains(Square::G1));
        assert!(d.contains(Square::C1));
    }

    #[test]
    fn castle_needs_empty_between() {
        // Knight on b1 blocks the long castle even though the king never crosses b1.
        let d = king_dests("r3k2r/8/8/8/8/8/8/RN2K2R KQkq", Square::E1, false);
        assert!(!d.contains(Square::C1));
        assert!(d.contains(Square::G1));
    }

    #[test]
    fn no_castle_out_of_check() {
        let d = king_dests("r3k2r/8/8/8/8/8/4q3/R3K2R KQkq", Square::E1, false);
        assert!(!d.contains(Square::G1));
        assert!(!d.contains(Square::C1));
    }

    #[test]
    fn transit_guard_only_when_asked() {
        // Black rook on f8 covers f1.
        let text = "4kr2/8/8/8/8/8/8/R3K2R KQ";
        assert!(king_dests(text, Square::E1, false).contains(Square::G1));
        let guarded = king_dests(text, Square::E1, true);
        assert!(!guarded.contains(Square::G1));
        assert!(guarded.contains(Square::C1));
    }

    #[test]
    fn king_never_captures_king() {
        let d = king_dests("8/8/8/3kK3/8/8/8/8", Square::E5, false);
        assert!(!d.contains(Square::D5));
        let expected: SquareSet = [Square::F4, Square::F5, Square::F6].into_iter().collect();
        assert_eq!(d, expected);
    }

    #[test]
    fn kings_keep_their_distance() {
        let board: Board = "k7/8/1K6/8/8/8/8/1R6".parse().unwrap();
        for guard in [false, true] {
            let d = destinations(&board, board.piece_at(Square::B6).unwrap(), guard);
            assert!(!d.contains(Square::A7));
            assert!(!d.contains(Square::B7));
            assert!(d.contains(Square::A6));
            assert!(d.contains(Square::C7));
        }
        assert!(!is_in_check(&board, Color::Black));
    }

    #[test]
    fn no_castle_next_to_rival_king() {
        // Black king on h2 touches g1.
        let d = king_dests("8/8/8/8/8/8/7k/R3K2R KQ", Square::E1, false);
        assert!(!d.contains(Square::G1));
        assert!(d.contains(Square::C1));
    }
}
