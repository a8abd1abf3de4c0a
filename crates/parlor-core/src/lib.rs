//! Chess model and rule engine: pieces, board, move generation, and game status.

mod attacks;
mod board;
mod castle;
mod color;
mod config;
mod error;
mod fen;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod square;
mod square_set;
mod status;

pub use attacks::{attackers_of, is_in_check, is_square_attacked, piece_attacks};
pub use board::{Board, PrettyBoard, initial_pieces};
pub use castle::CastleSide;
pub use color::Color;
pub use config::{Legality, RulesConfig};
pub use error::{BoardError, FenError, ParseLegalityError, RuleError};
pub use fen::STARTING_PLACEMENT;
pub use make_move::{MoveOutcome, RookShift, apply_move};
pub use movegen::{legal_destinations, pseudo_destinations, strict_destinations};
pub use perft::perft;
pub use piece::{Piece, PieceId};
pub use piece_kind::PieceKind;
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
pub use status::{GameStatus, evaluate_status, has_any_legal_move};
