//! Attack patterns and check detection.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Rook directions as (d_row, d_col).
pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Bishop directions as (d_row, d_col).
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Knight jumps as (d_row, d_col).
pub(crate) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King steps as (d_row, d_col).
pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Return `true` if every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must share a row, column, or diagonal.
fn ray_clear(from: Square, to: Square, occupied: SquareSet) -> bool {
    let step_row = (to.row() as i8 - from.row() as i8).signum();
    let step_col = (to.col() as i8 - from.col() as i8).signum();
    let mut current = from;
    loop {
        match current.offset(step_row, step_col) {
            Some(next) if next == to => return true,
            Some(next) if occupied.contains(next) => return false,
            Some(next) => current = next,
            None => return false,
        }
    }
}

/// Return `true` if `piece` attacks `target` with the given occupancy.
///
/// Pawns attack only diagonally forward. Sliding rays stop at the first
/// occupied square regardless of its color.
pub fn piece_attacks(piece: &Piece, target: Square, occupied: SquareSet) -> bool {
    let from = piece.square();
    let d_row = target.row() as i8 - from.row() as i8;
    let d_col = target.col() as i8 - from.col() as i8;
    if d_row == 0 && d_col == 0 {
        return false;
    }

    let diagonal = d_row.abs() == d_col.abs();
    let orthogonal = d_row == 0 || d_col == 0;

    match piece.kind() {
        PieceKind::Pawn => d_row == piece.color().forward() && d_col.abs() == 1,
        PieceKind::Knight => matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1)),
        PieceKind::King => d_row.abs() <= 1 && d_col.abs() <= 1,
        PieceKind::Bishop => diagonal && ray_clear(from, target, occupied),
        PieceKind::Rook => orthogonal && ray_clear(from, target, occupied),
        PieceKind::Queen => (diagonal || orthogonal) && ray_clear(from, target, occupied),
    }
}

/// Return `true` if any live piece of `by` attacks `sq`.
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    let occupied = board.occupancy();
    board.live_of(by).any(|p| piece_attacks(p, sq, occupied))
}

/// Return the squares of every live piece of `by` that attacks `sq`.
pub fn attackers_of(board: &Board, sq: Square, by: Color) -> SquareSet {
    let occupied = board.occupancy();
    board
        .live_of(by)
        .filter(|p| piece_attacks(p, sq, occupied))
        .map(Piece::square)
        .collect()
}

/// Return `true` if the king of `side` is attacked by the opposing side.
///
/// A board without a live king for `side` is never in check.
pub fn is_in_check(board: &Board, side: Color) -> bool {
    board
        .king_square(side)
        .is_some_and(|king| is_square_attacked(board, king, side.flip()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn starting_position_no_check() {
        let b = Board::starting_position();
        assert!(!is_in_check(&b, Color::White));
        assert!(!is_in_check(&b, Color::Black));
    }

    #[test]
    fn pawn_attacks_diagonally_forward_only() {
        // White pawn e4 attacks d5 and f5, not e5 or d3.
        let b = board("4k3/8/8/8/4P3/8/8/4K3");
        let pawn = b.piece_at(Square::E4).unwrap();
        let occ = b.occupancy();
        assert!(piece_attacks(pawn, Square::D5, occ));
        assert!(piece_attacks(pawn, Square::F5, occ));
        assert!(!piece_attacks(pawn, Square::E5, occ));
        assert!(!piece_attacks(pawn, Square::D3, occ));
    }

    #[test]
    fn black_pawn_gives_check() {
        let b = board("8/8/8/8/8/5k2/4p3/3K4");
        assert!(is_in_check(&b, Color::White));
    }

    #[test]
    fn knight_check() {
        let b = board("4k3/8/3N4/8/8/8/8/4K3");
        assert!(is_in_check(&b, Color::Black));
    }

    #[test]
    fn rook_check_is_blocked_by_any_piece() {
        let open = board("4k3/8/8/8/8/8/8/4RK2");
        assert!(is_in_check(&open, Color::Black));
        let own_block = board("4k3/4p3/8/8/8/8/8/4RK2");
        assert!(!is_in_check(&own_block, Color::Black));
        let their_block = board("4k3/8/8/8/4P3/8/8/4RK2");
        assert!(!is_in_check(&their_block, Color::Black));
    }

    #[test]
    fn bishop_check_along_diagonal() {
        let b = board("4k3/8/8/b7/8/8/8/4K3");
        assert!(is_in_check(&b, Color::White));
        let blocked = board("4k3/8/8/b7/8/2P5/8/4K3");
        assert!(!is_in_check(&blocked, Color::White));
    }

    #[test]
    fn queen_checks_both_ways() {
        let diagonal = board("4k3/8/8/8/7q/8/8/4K3");
        assert!(is_in_check(&diagonal, Color::White));
        let file = board("4k3/8/8/8/4q3/8/8/4K3");
        assert!(is_in_check(&file, Color::White));
        let neither = board("4k3/8/8/8/5q2/8/8/4K3");
        assert!(!is_in_check(&neither, Color::White));
    }

    #[test]
    fn attackers_lists_every_attacker() {
        // e4 attacked by the rook on e8, the knight on f6 and the pawn on d5.
        let b = board("k3r3/8/5n2/3p4/4P3/8/8/K7");
        let attackers = attackers_of(&b, Square::E4, Color::Black);
        assert_eq!(attackers.len(), 3);
        assert!(attackers.contains(Square::F6));
        assert!(attackers.contains(Square::D5));
        assert!(attackers.contains(Square::E8));
    }

    #[test]
    fn ray_clear_stops_at_edge() {
        assert!(!ray_clear(Square::A1, Square::B3, SquareSet::EMPTY));
        assert!(ray_clear(Square::A1, Square::H8, SquareSet::EMPTY));
    }
}
