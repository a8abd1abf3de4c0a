//! The game session controller.

use std::time::Duration;

use tracing::{debug, info};

use parlor_core::{
    Board, Color, GameStatus, Piece, PieceId, RulesConfig, Square, SquareSet, apply_move,
    attackers_of, evaluate_status, legal_destinations,
};

use crate::clock::Clock;
use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::observer::{GameObserver, NullObserver};
use crate::record::MoveRecord;

/// The current selection and its cached destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub piece: PieceId,
    pub square: Square,
    pub destinations: SquareSet,
}

/// What a square click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// A piece of the side to move is now selected.
    Selected(Selection),
    /// The selected piece moved to the clicked square.
    Moved(MoveRecord),
    /// A previous selection was dropped.
    Cleared,
    /// Nothing changed.
    Ignored,
}

/// One game: the piece set, whose turn it is, and everything the UI shows
/// around the board.
///
/// Each session owns its board exclusively. Events go to the observer `O`.
#[derive(Debug)]
pub struct Session<O = NullObserver> {
    board: Board,
    side_to_move: Color,
    status: GameStatus,
    selection: Option<Selection>,
    history: Vec<MoveRecord>,
    /// Rules in force for the current game.
    rules: RulesConfig,
    /// Applied at the next reset.
    config: SessionConfig,
    clock: Clock,
    observer: O,
}

impl Session<NullObserver> {
    /// Start a default game with no observer.
    pub fn standalone() -> Self {
        Session::new(NullObserver)
    }
}

impl<O: GameObserver> Session<O> {
    /// Start a game from the standard position with the default configuration.
    pub fn new(observer: O) -> Self {
        Session::with_config(SessionConfig::default(), observer)
    }

    /// Start a game from the standard position.
    pub fn with_config(config: SessionConfig, observer: O) -> Self {
        Session::from_board(Board::starting_position(), Color::White, config, observer)
    }

    /// Start a game from an arbitrary valid board with `side_to_move` to play.
    ///
    /// The status is evaluated immediately, so a board that is already mate
    /// or stalemate starts out terminal. Reset always returns to the standard
    /// position.
    pub fn from_board(board: Board, side_to_move: Color, config: SessionConfig, observer: O) -> Self {
        let status = evaluate_status(&board, side_to_move);
        Session {
            board,
            side_to_move,
            status,
            selection: None,
            history: Vec::new(),
            rules: config.rules,
            config,
            clock: Clock::new(config.clock),
            observer,
        }
    }

    /// Handle a click on (`row`, `col`).
    ///
    /// Clicking a piece of the side to move selects it. Clicking one of the
    /// selected piece's destinations plays the move. Any other click drops
    /// the selection. Clicks after the game has ended, or off the board, are
    /// ignored.
    pub fn select_square(&mut self, row: u8, col: u8) -> SelectOutcome {
        match Square::new(row, col) {
            Some(sq) => self.select(sq),
            None => SelectOutcome::Ignored,
        }
    }

    /// [`select_square`](Self::select_square) by square.
    pub fn select(&mut self, sq: Square) -> SelectOutcome {
        if self.status.is_terminal() {
            debug!(square = %sq, status = %self.status, "click ignored, game over");
            return SelectOutcome::Ignored;
        }

        if let Some(sel) = self.selection {
            if sel.destinations.contains(sq) {
                return match self.commit(sel.piece, sq) {
                    Some(record) => SelectOutcome::Moved(record),
                    None => {
                        self.selection = None;
                        SelectOutcome::Cleared
                    }
                };
            }
        }

        if let Some(piece) = self.board.piece_at(sq).filter(|p| p.color() == self.side_to_move) {
            let selection = Selection {
                piece: piece.id(),
                square: sq,
                destinations: legal_destinations(&self.board, piece, &self.rules),
            };
            debug!(piece = %selection.piece, square = %sq, count = selection.destinations.len(), "selected");
            self.selection = Some(selection);
            return SelectOutcome::Selected(selection);
        }

        match self.selection.take() {
            Some(_) => SelectOutcome::Cleared,
            None => SelectOutcome::Ignored,
        }
    }

    /// Play a move directly, without the click protocol.
    ///
    /// Any selection is dropped whether or not the move is accepted.
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveRecord, SessionError> {
        self.selection = None;
        if self.status.is_terminal() {
            return Err(SessionError::GameOver { status: self.status });
        }
        let piece = self
            .board
            .piece_at(from)
            .filter(|p| p.color() == self.side_to_move)
            .ok_or(SessionError::NoPieceSelected { square: from })?;
        let id = piece.id();
        self.commit(id, to)
            .ok_or(SessionError::InvalidMove { from, to })
    }

    /// Apply a move and run the post-move bookkeeping.
    fn commit(&mut self, id: PieceId, to: Square) -> Option<MoveRecord> {
        let outcome = match apply_move(&mut self.board, id, to, self.side_to_move, &self.rules) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(error = %err, "move rejected");
                return None;
            }
        };

        let ply = self.history.len() as u32 + 1;
        let record = MoveRecord::from_outcome(ply, &outcome);
        self.history.push(record);
        self.selection = None;
        self.side_to_move = self.side_to_move.flip();
        self.status = evaluate_status(&self.board, self.side_to_move);

        if let Some(captured) = outcome.captured {
            debug!(piece = %captured.id(), square = %captured.square(), "captured");
            self.observer.on_capture(&captured);
        }
        self.observer.on_move_record(&record);
        self.observer.on_turn_change(self.side_to_move);
        self.observer.on_status_change(self.status);

        if self.status.is_terminal() {
            info!(status = %self.status, side = %self.side_to_move, plies = ply, "game over");
        }
        Some(record)
    }

    /// Discard the game and start again from the standard position.
    ///
    /// Pending configuration takes effect here.
    pub fn reset(&mut self) {
        self.board = Board::starting_position();
        self.side_to_move = Color::White;
        self.status = GameStatus::Playing;
        self.selection = None;
        self.history.clear();
        self.rules = self.config.rules;
        if self.clock.initial() == self.config.clock {
            self.clock.reset();
        } else {
            self.clock = Clock::new(self.config.clock);
        }
        debug!(legality = %self.rules.legality, "session reset");
        self.observer.on_reset();
    }

    /// Replace the configuration used from the next reset on.
    pub fn set_config(&mut self, config: SessionConfig) {
        self.config = config;
    }

    /// Run the side to move's clock for `elapsed`. No-op once the game is over.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.status.is_terminal() || self.clock.is_flagged(self.side_to_move) {
            return;
        }
        self.clock.tick(self.side_to_move, elapsed);
        if self.clock.is_flagged(self.side_to_move) {
            info!(side = %self.side_to_move, "clock ran out, game continues");
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Destinations of the piece on `sq` under the current rules.
    ///
    /// Empty if the square is empty.
    pub fn destinations_from(&self, sq: Square) -> SquareSet {
        self.board
            .piece_at(sq)
            .map_or(SquareSet::EMPTY, |p| legal_destinations(&self.board, p, &self.rules))
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The move list in notation, oldest first.
    pub fn notation(&self) -> Vec<String> {
        self.history.iter().map(MoveRecord::notation).collect()
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Square of the side to move's king while it is in check or mated.
    pub fn check_square(&self) -> Option<Square> {
        match self.status {
            GameStatus::Check | GameStatus::Checkmate => self.board.king_square(self.side_to_move),
            GameStatus::Playing | GameStatus::Stalemate => None,
        }
    }

    /// Squares of the pieces giving check to the side to move. Empty unless
    /// the status is check or checkmate.
    pub fn checkers(&self) -> SquareSet {
        self.check_square().map_or(SquareSet::EMPTY, |king| {
            attackers_of(&self.board, king, self.side_to_move.flip())
        })
    }

    /// Opposing pieces `side` has taken, in piece-set order.
    pub fn captured_by(&self, side: Color) -> Vec<&Piece> {
        self.board.captured(side.flip()).collect()
    }

    /// How many more pieces `side` has taken than its opponent.
    pub fn material_lead(&self, side: Color) -> i32 {
        self.captured_by(side).len() as i32 - self.captured_by(side.flip()).len() as i32
    }

    /// One-line summary such as `Status: check, Turn: black`.
    pub fn status_text(&self) -> String {
        format!("Status: {}, Turn: {}", self.status, self.side_to_move)
    }

    #[inline]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Rules in force for the current game.
    #[inline]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Configuration that the next reset will apply.
    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    #[inline]
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}
