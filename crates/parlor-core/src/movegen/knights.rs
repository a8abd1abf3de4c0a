//! Knight jumps.

use crate::attacks::KNIGHT_JUMPS;
use crate::board::Board;
use crate::piece::Piece;
use crate::square_set::SquareSet;

use super::{Target, classify};

/// The eight L-shaped jumps onto empty or enemy squares.
pub(super) fn destinations(board: &Board, knight: &Piece) -> SquareSet {
    let color = knight.color();
    KNIGHT_JUMPS
        .iter()
        .filter_map(|&(d_row, d_col)| knight.square().offset(d_row, d_col))
        .filter(|&sq| classify(board, color, sq) != Target::Blocked)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::destinations;
    use crate::board::Board;
    use crate::square::Square;
    use crate::square_set::SquareSet;

    #[test]
    fn starting_knight() {
        let board = Board::starting_position();
        let d = destinations(&board, board.piece_at(Square::G1).unwrap());
        assert_eq!(d, SquareSet::EMPTY.with(Square::F3).with(Square::H3));
    }

    #[test]
    fn centre_knight_has_eight() {
        let board: Board = "4k3/8/8/8/3N4/8/8/4K3".parse().unwrap();
        assert_eq!(destinations(&board, board.piece_at(Square::D4).unwrap()).len(), 8);
    }

    #[test]
    fn corner_knight_has_two() {
        let board: Board = "4k3/8/8/8/8/8/8/N3K3".parse().unwrap();
        let d = destinations(&board, board.piece_at(Square::A1).unwrap());
        assert_eq!(d, SquareSet::EMPTY.with(Square::B3).with(Square::C2));
    }
}
