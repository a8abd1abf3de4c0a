//! Bishop, rook, and queen rays.

use crate::attacks::{DIAGONAL, ORTHOGONAL};
use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square_set::SquareSet;

use super::{Target, classify};

const QUEEN: [(i8, i8); 8] = [
    ORTHOGONAL[0],
    ORTHOGONAL[1],
    ORTHOGONAL[2],
    ORTHOGONAL[3],
    DIAGONAL[0],
    DIAGONAL[1],
    DIAGONAL[2],
    DIAGONAL[3],
];

/// Cast one ray per direction until the edge, a blocker, or a capture.
pub(super) fn destinations(board: &Board, slider: &Piece) -> SquareSet {
    let mut out = SquareSet::EMPTY;
    let directions: &[(i8, i8)] = match slider.kind() {
        PieceKind::Bishop => &DIAGONAL,
        PieceKind::Rook => &ORTHOGONAL,
        _ => &QUEEN,
    };

    for &(d_row, d_col) in directions {
        let mut current = slider.square();
        while let Some(next) = current.offset(d_row, d_col) {
            match classify(board, slider.color(), next) {
                Target::Empty => out.insert(next),
                Target::Enemy => {
                    out.insert(next);
                    break;
                }
                Target::Blocked => break,
            }
            current = next;
        }
    }

    out
}
