//! Outbound notifications from a session.

use parlor_core::{Color, GameStatus, Piece};

use crate::record::MoveRecord;

/// Receiver for session events.
///
/// After each applied move the callbacks fire in this order:
/// `on_capture` (captures only), `on_move_record`, `on_turn_change`,
/// `on_status_change`. Rejected moves fire nothing.
pub trait GameObserver {
    /// An opposing piece was taken. `piece` is already flagged as captured.
    fn on_capture(&mut self, _piece: &Piece) {}

    /// The side to move changed.
    fn on_turn_change(&mut self, _side: Color) {}

    /// Status was recomputed for the new side to move.
    fn on_status_change(&mut self, _status: GameStatus) {}

    /// A move was applied.
    fn on_move_record(&mut self, _record: &MoveRecord) {}

    /// The session was reset to the starting position.
    fn on_reset(&mut self) {}
}

impl<O: GameObserver + ?Sized> GameObserver for Box<O> {
    fn on_capture(&mut self, piece: &Piece) {
        (**self).on_capture(piece);
    }

    fn on_turn_change(&mut self, side: Color) {
        (**self).on_turn_change(side);
    }

    fn on_status_change(&mut self, status: GameStatus) {
        (**self).on_status_change(status);
    }

    fn on_move_record(&mut self, record: &MoveRecord) {
        (**self).on_move_record(record);
    }

    fn on_reset(&mut self) {
        (**self).on_reset();
    }
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// A recorded session event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Capture(Piece),
    TurnChange(Color),
    StatusChange(GameStatus),
    MoveRecord(MoveRecord),
    Reset,
}

/// Observer that appends every event to a list.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Vec<SessionEvent>,
}

impl RecordingObserver {
    pub fn new() -> RecordingObserver {
        RecordingObserver::default()
    }

    /// Return the events recorded so far.
    #[inline]
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the list empty.
    pub fn drain(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}

impl GameObserver for RecordingObserver {
    fn on_capture(&mut self, piece: &Piece) {
        self.events.push(SessionEvent::Capture(*piece));
    }

    fn on_turn_change(&mut self, side: Color) {
        self.events.push(SessionEvent::TurnChange(side));
    }

    fn on_status_change(&mut self, status: GameStatus) {
        self.events.push(SessionEvent::StatusChange(status));
    }

    fn on_move_record(&mut self, record: &MoveRecord) {
        self.events.push(SessionEvent::MoveRecord(*record));
    }

    fn on_reset(&mut self) {
        self.events.push(SessionEvent::Reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_observer_drains() {
        let mut obs = RecordingObserver::new();
        obs.on_turn_change(Color::Black);
        obs.on_status_change(GameStatus::Check);
        assert_eq!(
            obs.drain(),
            vec![
                SessionEvent::TurnChange(Color::Black),
                SessionEvent::StatusChange(GameStatus::Check)
            ]
        );
        assert!(obs.events().is_empty());
    }

    #[test]
    fn boxed_observer_forwards() {
        let mut boxed: Box<RecordingObserver> = Box::new(RecordingObserver::new());
        boxed.on_reset();
        assert_eq!(boxed.events(), &[SessionEvent::Reset]);
    }
}
