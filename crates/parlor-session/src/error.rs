//! Session errors.

use parlor_core::{GameStatus, Square};

/// Reasons the programmatic move API refuses a request.
///
/// The click API never surfaces these; it reports a no-op instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// No piece of the side to move stands on the origin square.
    #[error("no piece of the side to move on {square}")]
    NoPieceSelected {
        /// The requested origin.
        square: Square,
    },

    /// The destination is not legal for the selected piece.
    #[error("illegal move from {from} to {to}")]
    InvalidMove {
        /// Origin square.
        from: Square,
        /// Rejected destination.
        to: Square,
    },

    /// The game has ended and only `reset` is accepted.
    #[error("game is over ({status})")]
    GameOver {
        /// The terminal status.
        status: GameStatus,
    },

    /// Another operation on the shared session is still in progress.
    #[error("session is busy")]
    Busy,
}

#[cfg(test)]
mod tests {
    use super::SessionError;
    use parlor_core::{GameStatus, Square};

    #[test]
    fn messages() {
        let err = SessionError::InvalidMove {
            from: Square::E2,
            to: Square::E5,
        };
        assert_eq!(err.to_string(), "illegal move from e2 to e5");
        let err = SessionError::GameOver {
            status: GameStatus::Checkmate,
        };
        assert_eq!(err.to_string(), "game is over (checkmate)");
    }
}
