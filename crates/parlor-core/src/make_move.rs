//! Move execution on the piece set.

use tracing::debug;

use crate::board::Board;
use crate::castle::CastleSide;
use crate::color::Color;
use crate::config::RulesConfig;
use crate::error::RuleError;
use crate::movegen::legal_destinations;
use crate::piece::{Piece, PieceId};
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The rook relocation that accompanies a castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RookShift {
    pub id: PieceId,
    pub from: Square,
    pub to: Square,
}

/// Everything that changed when a move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The piece that moved.
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
    /// The piece taken on `to`, already flagged as captured.
    pub captured: Option<Piece>,
    /// Set when the move was a castle.
    pub castle: Option<CastleSide>,
    /// The rook moved as part of a castle.
    pub rook: Option<RookShift>,
}

impl MoveOutcome {
    /// Return `true` if an enemy piece was taken.
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Return `true` if the moving piece was a king.
    #[inline]
    pub fn king_moved(&self) -> bool {
        self.piece.kind() == PieceKind::King
    }
}

/// Validate and apply a move for `side_to_move`.
///
/// The destination must be one of [`legal_destinations`] under `config`.
/// On error the board is unchanged. On success the mover is relocated and
/// marked as moved, an enemy on the destination is marked captured, and a
/// two-column king move also relocates the matching rook.
pub fn apply_move(
    board: &mut Board,
    id: PieceId,
    to: Square,
    side_to_move: Color,
    config: &RulesConfig,
) -> Result<MoveOutcome, RuleError> {
    let piece = *board.piece(id).ok_or(RuleError::NoSuchPiece { id })?;
    if piece.is_captured() {
        return Err(RuleError::PieceCaptured { id });
    }
    if piece.color() != side_to_move {
        return Err(RuleError::WrongSide { id, side_to_move });
    }

    let from = piece.square();
    let invalid = RuleError::InvalidMove { id, from, to };
    if !legal_destinations(board, &piece, config).contains(to) {
        return Err(invalid);
    }

    let outcome = play_unchecked(board, id, to).ok_or(invalid)?;
    debug!(
        piece = %outcome.piece,
        from = %outcome.from,
        to = %outcome.to,
        captured = ?outcome.captured.map(|p| p.id().to_string()),
        castle = ?outcome.castle,
        "move applied"
    );
    Ok(outcome)
}

/// Apply a move without consulting move generation.
///
/// Returns `None`, leaving the board untouched, when `id` is missing or
/// captured, when `to` holds a piece of the mover's color or a king, or when
/// a castle finds no rook to shift.
pub(crate) fn play_unchecked(board: &mut Board, id: PieceId, to: Square) -> Option<MoveOutcome> {
    let mover = *board.piece(id)?;
    if mover.is_captured() {
        return None;
    }
    let from = mover.square();

    let victim = match board.piece_at(to) {
        Some(p) if p.color() == mover.color() || p.kind() == PieceKind::King => return None,
        Some(p) => Some(p.id()),
        None => None,
    };

    let castle = if mover.kind() == PieceKind::King && from.row() == to.row() {
        CastleSide::from_king_move(from.col(), to.col())
    } else {
        None
    };
    let rook = match castle {
        Some(side) => Some(rook_shift(board, &mover, side)?),
        None => None,
    };

    let captured = match victim {
        Some(victim) => {
            let taken = board.piece_mut(victim)?;
            taken.mark_captured();
            Some(*taken)
        }
        None => None,
    };
    board.piece_mut(id)?.relocate(to);
    if let Some(shift) = rook {
        board.piece_mut(shift.id)?.relocate(shift.to);
    }

    Some(MoveOutcome {
        piece: id,
        from,
        to,
        captured,
        castle,
        rook,
    })
}

fn rook_shift(board: &Board, king: &Piece, side: CastleSide) -> Option<RookShift> {
    let from = king.square().with_col(side.rook_home_col())?;
    let rook = board
        .piece_at(from)
        .filter(|p| p.kind() == PieceKind::Rook && p.color() == king.color())?;
    Some(RookShift {
        id: rook.id(),
        from,
        to: king.square().with_col(side.rook_castled_col())?,
    })
}
