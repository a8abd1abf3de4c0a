//! Pawn pushes and diagonal captures.

use crate::board::Board;
use crate::piece::Piece;
use crate::square_set::SquareSet;

use super::{Target, classify};

/// Single push, double push from the starting row, and diagonal captures.
///
/// There is no en passant and no promotion: a pawn on the last row simply
/// has no forward move.
pub(super) fn destinations(board: &Board, pawn: &Piece) -> SquareSet {
    let mut out = SquareSet::EMPTY;
    let color = pawn.color();
    let forward = color.forward();
    let from = pawn.square();

    if let Some(one) = from.offset(forward, 0).filter(|&sq| !board.is_occupied(sq)) {
        out.insert(one);
        let two = from.offset(2 * forward, 0).filter(|&sq| !board.is_occupied(sq));
        if let Some(two) = two.filter(|_| pawn.row() == color.pawn_row()) {
            out.insert(two);
        }
    }

    for d_col in [-1, 1] {
        let diag = from.offset(forward, d_col).filter(|&sq| classify(board, color, sq) == Target::Enemy);
        if let Some(diag) = diag {
            out.insert(diag);
        }
    }

    out
}
