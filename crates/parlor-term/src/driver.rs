//! Line-oriented loop driving a session.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use parlor_core::Color;
use parlor_session::{RecordingObserver, SelectOutcome, Session, SessionEvent};

use crate::command::{Command, TermOption, parse_command};
use crate::error::TermError;

/// Text front-end over one session.
///
/// Observer events are buffered during a command and printed after it, one
/// per line.
pub struct Terminal {
    session: Session<RecordingObserver>,
}

impl Terminal {
    /// Create a front-end with a fresh default session.
    pub fn new() -> Self {
        Self {
            session: Session::new(RecordingObserver::new()),
        }
    }

    /// Borrow the underlying session.
    pub fn session(&self) -> &Session<RecordingObserver> {
        &self.session
    }

    /// Read commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), TermError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");
            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.execute(cmd, &mut output)?,
                Err(e) => warn!(error = %e, "command parse error"),
            }
            output.flush()?;
        }
        info!(plies = self.session.history().len(), "front-end shutting down");
        Ok(())
    }

    /// Execute one command, writing its response and any events to `out`.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), TermError> {
        match cmd {
            Command::NewGame => self.session.reset(),
            Command::Click { row, col } => {
                let outcome = self.session.select_square(row, col);
                write_outcome(out, &outcome)?;
            }
            Command::Select(sq) => {
                let outcome = self.session.select(sq);
                write_outcome(out, &outcome)?;
            }
            Command::Move { from, to } => {
                if let Err(e) = self.session.play(from, to) {
                    debug!(error = %e, "move refused");
                    writeln!(out, "error {e}")?;
                }
            }
            Command::Board => self.write_board(out)?,
            Command::Moves => {
                let squares: Vec<String> = self
                    .session
                    .selection()
                    .map(|sel| sel.destinations.iter().map(|sq| sq.to_string()).collect())
                    .unwrap_or_default();
                if squares.is_empty() {
                    writeln!(out, "moves")?;
                } else {
                    writeln!(out, "moves {}", squares.join(" "))?;
                }
            }
            Command::History => {
                for (i, pair) in self.session.notation().chunks(2).enumerate() {
                    writeln!(out, "{}. {}", i + 1, pair.join(" "))?;
                }
            }
            Command::Status => writeln!(out, "{}", self.session.status_text())?,
            Command::Tick(elapsed) => self.session.tick(elapsed),
            Command::Clock => {
                let clock = self.session.clock();
                writeln!(
                    out,
                    "clock white {} black {}",
                    clock.display(Color::White),
                    clock.display(Color::Black)
                )?;
            }
            Command::SetOption(option) => self.set_option(option),
            Command::Quit | Command::Unknown(_) => {}
        }
        self.flush_events(out)
    }

    fn set_option(&mut self, option: TermOption) {
        let mut config = *self.session.config();
        match option {
            TermOption::Legality(legality) => config.rules.legality = legality,
            TermOption::Clock(clock) => config.clock = clock,
        }
        info!(?option, "option set, applies at next newgame");
        self.session.set_config(config);
    }

    fn write_board<W: Write>(&self, out: &mut W) -> Result<(), TermError> {
        writeln!(out, "{}", self.session.board().pretty())?;
        for side in Color::ALL {
            let taken: String = self
                .session
                .captured_by(side)
                .iter()
                .map(|p| p.symbol())
                .collect();
            let lead = self.session.material_lead(side);
            if lead > 0 {
                writeln!(out, "{side} took {taken} +{lead}")?;
            } else {
                writeln!(out, "{side} took {taken}")?;
            }
        }
        writeln!(out, "{}", self.session.status_text())?;
        let checkers: Vec<String> = self.session.checkers().iter().map(|sq| sq.to_string()).collect();
        if !checkers.is_empty() {
            writeln!(out, "check from {}", checkers.join(" "))?;
        }
        Ok(())
    }

    fn flush_events<W: Write>(&mut self, out: &mut W) -> Result<(), TermError> {
        for event in self.session.observer_mut().drain() {
            match event {
                SessionEvent::Capture(piece) => writeln!(out, "capture {}", piece.id())?,
                SessionEvent::MoveRecord(record) => writeln!(out, "move {record}")?,
                SessionEvent::TurnChange(side) => writeln!(out, "turn {side}")?,
                SessionEvent::StatusChange(status) => writeln!(out, "status {status}")?,
                SessionEvent::Reset => writeln!(out, "newgame")?,
            }
        }
        Ok(())
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

fn write_outcome<W: Write>(out: &mut W, outcome: &SelectOutcome) -> Result<(), TermError> {
    match outcome {
        SelectOutcome::Selected(sel) => {
            let squares: Vec<String> = sel.destinations.iter().map(|sq| sq.to_string()).collect();
            writeln!(out, "selected {} {}", sel.square, squares.join(" "))?;
        }
        SelectOutcome::Cleared => writeln!(out, "cleared")?,
        SelectOutcome::Ignored => writeln!(out, "ignored")?,
        // The move itself is reported through the observer events.
        SelectOutcome::Moved(_) => {}
    }
    Ok(())
}
