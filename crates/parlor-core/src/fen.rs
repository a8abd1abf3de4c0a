//! Placement-text parsing and serialization for [`Board`].
//!
//! The accepted format is the first field of FEN, optionally followed by the
//! FEN castling field: `"r3k2r/8/8/8/8/8/8/R3K2R KQkq"`. Rows are listed from
//! row 0 (rank 8) down to row 7 (rank 1).

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, on_home_square};
use crate::castle::CastleSide;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::{Piece, PieceId};
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Placement text for the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR KQkq";

/// Castling grants parsed from the second field, indexed by color then side.
type Grants = [[bool; 2]; Color::COUNT];

fn side_index(side: CastleSide) -> usize {
    match side {
        CastleSide::KingSide => 0,
        CastleSide::QueenSide => 1,
    }
}

fn parse_grants(field: Option<&str>) -> Result<Grants, FenError> {
    let mut grants = [[false; 2]; Color::COUNT];
    let Some(field) = field else {
        return Ok(grants);
    };
    if field == "-" {
        return Ok(grants);
    }
    for c in field.chars() {
        let (color, side) = match c {
            'K' => (Color::White, CastleSide::KingSide),
            'Q' => (Color::White, CastleSide::QueenSide),
            'k' => (Color::Black, CastleSide::KingSide),
            'q' => (Color::Black, CastleSide::QueenSide),
            _ => return Err(FenError::InvalidCastlingChar { character: c }),
        };
        grants[color.index()][side_index(side)] = true;
    }
    Ok(grants)
}

/// Derive the `has_moved` flag of a freshly parsed piece.
///
/// Anything off its home square has moved. Kings and rooks at home count as
/// unmoved only when the castling field grants the matching right.
fn infer_has_moved(piece: &Piece, grants: &Grants) -> bool {
    if !on_home_square(piece) {
        return true;
    }
    let rights = grants[piece.color().index()];
    match piece.kind() {
        PieceKind::King => !(rights[0] || rights[1]),
        PieceKind::Rook => {
            let side = if piece.col() == CastleSide::KingSide.rook_home_col() {
                CastleSide::KingSide
            } else {
                CastleSide::QueenSide
            };
            !rights[side_index(side)]
        }
        _ => false,
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(text: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.is_empty() || fields.len() > 2 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let rows: Vec<&str> = fields[0].split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::WrongRowCount { found: rows.len() });
        }

        let grants = parse_grants(fields.get(1).copied())?;
        let mut ordinals = [[0u8; PieceKind::COUNT]; Color::COUNT];
        let mut pieces = Vec::new();

        for (row, row_str) in rows.iter().enumerate() {
            let mut col: usize = 0;

            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                    continue;
                }

                let kind = PieceKind::from_letter(c)
                    .ok_or(FenError::InvalidPieceChar { character: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };

                let sq = Square::new(row as u8, col as u8).ok_or(FenError::BadRowLength {
                    row,
                    length: col + 1,
                })?;

                let ordinal = &mut ordinals[color.index()][kind.index()];
                *ordinal = ordinal.saturating_add(1);
                let piece = Piece::new(PieceId::new(color, kind, *ordinal), sq);
                let has_moved = infer_has_moved(&piece, &grants);
                pieces.push(piece.with_moved(has_moved));
                col += 1;
            }

            if col != 8 {
                return Err(FenError::BadRowLength { row, length: col });
            }
        }

        Ok(Board::from_pieces(pieces)?)
    }
}

impl Board {
    /// Render the placement field only.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(64);
        for row in 0u8..8 {
            let mut empty = 0u8;
            for col in 0u8..8 {
                match Square::new(row, col).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        out.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push(char::from(b'0' + empty));
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }

    /// Return `true` if `color` still has an unmoved king and an unmoved rook on `side`.
    pub fn castling_intact(&self, color: Color, side: CastleSide) -> bool {
        let row = color.back_row();
        let piece_is = |col: u8, kind: PieceKind| {
            Square::new(row, col)
                .and_then(|sq| self.piece_at(sq))
                .is_some_and(|p| p.color() == color && p.kind() == kind && !p.has_moved())
        };
        piece_is(CastleSide::KING_HOME_COL, PieceKind::King) && piece_is(side.rook_home_col(), PieceKind::Rook)
    }

    /// Render the castling field derived from the `has_moved` flags.
    pub fn castling_field(&self) -> String {
        let mut out = String::with_capacity(4);
        for color in Color::ALL {
            for side in CastleSide::ALL {
                if self.castling_intact(color, side) {
                    let c = match side {
                        CastleSide::KingSide => 'k',
                        CastleSide::QueenSide => 'q',
                    };
                    out.push(match color {
                        Color::White => c.to_ascii_uppercase(),
                        Color::Black => c,
                    });
                }
            }
        }
        if out.is_empty() {
            out.push('-');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.placement(), self.castling_field())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_PLACEMENT;
    use crate::board::Board;
    use crate::castle::CastleSide;
    use crate::color::Color;
    use crate::error::{BoardError, FenError};
    use crate::square::Square;

    fn roundtrip(text: &str) {
        let board: Board = text.parse().unwrap();
        assert_eq!(board.to_string(), text, "placement roundtrip failed");
    }

    #[test]
    fn starting_position_matches_placement() {
        let from_constructor = Board::starting_position();
        let from_text: Board = STARTING_PLACEMENT.parse().unwrap();
        assert_eq!(from_constructor, from_text);
        assert_eq!(from_constructor.to_string(), STARTING_PLACEMENT);
    }

    #[test]
    fn roundtrip_positions() {
        roundtrip("r3k2r/8/8/8/8/8/8/R3K2R KQkq");
        roundtrip("r3k2r/8/8/8/8/8/8/R3K2R Kq");
        roundtrip("7k/5K2/6Q1/8/8/8/8/8 -");
    }

    #[test]
    fn missing_castling_field_grants_nothing() {
        let board: Board = "r3k2r/8/8/8/8/8/8/R3K2R".parse().unwrap();
        let king = board.piece_at(Square::E1).unwrap();
        assert!(king.has_moved());
        assert!(!board.castling_intact(Color::White, CastleSide::KingSide));
        assert_eq!(board.castling_field(), "-");
    }

    #[test]
    fn off_home_pieces_have_moved() {
        let board: Board = "4k3/8/8/8/4P3/8/3P4/4K3".parse().unwrap();
        assert!(board.piece_at(Square::E4).unwrap().has_moved());
        assert!(!board.piece_at(Square::D2).unwrap().has_moved());
    }

    #[test]
    fn ordinals_assigned_in_reading_order() {
        let board: Board = "4k3/8/8/8/8/8/8/QQ2K3 -".parse().unwrap();
        assert_eq!(board.piece_at(Square::A1).unwrap().id().to_string(), "wq");
        assert_eq!(board.piece_at(Square::B1).unwrap().id().to_string(), "wq2");
    }

    #[test]
    fn error_wrong_row_count() {
        let err = "8/8/8 -".parse::<Board>().unwrap_err();
        assert_eq!(err, FenError::WrongRowCount { found: 3 });
    }

    #[test]
    fn error_wrong_field_count() {
        assert!("".parse::<Board>().is_err());
        assert!("8/8/8/8/8/8/8/8 - w".parse::<Board>().is_err());
    }

    #[test]
    fn error_invalid_piece_char() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR".parse::<Board>();
        assert_eq!(result.unwrap_err(), FenError::InvalidPieceChar { character: 'X' });
    }

    #[test]
    fn error_bad_row_length() {
        let result = "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR".parse::<Board>();
        assert_eq!(result.unwrap_err(), FenError::BadRowLength { row: 1, length: 7 });
        let result = "rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR".parse::<Board>();
        assert!(matches!(result.unwrap_err(), FenError::BadRowLength { row: 1, .. }));
    }

    #[test]
    fn error_invalid_castling() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR XQkq".parse::<Board>();
        assert_eq!(result.unwrap_err(), FenError::InvalidCastlingChar { character: 'X' });
    }

    #[test]
    fn error_missing_king() {
        let result = "8/8/8/8/8/8/8/4K3".parse::<Board>();
        assert_eq!(
            result.unwrap_err(),
            FenError::InvalidBoard {
                source: BoardError::InvalidKingCount {
                    color: Color::Black,
                    count: 0
                }
            }
        );
    }
}
