//! Game session controller: click-driven move entry, turn and status
//! tracking, move records, and observer notifications on top of
//! `parlor-core`.

mod clock;
mod config;
mod error;
mod observer;
mod record;
mod session;
mod shared;

pub use clock::Clock;
pub use config::{DEFAULT_CLOCK, SessionConfig};
pub use error::SessionError;
pub use observer::{GameObserver, NullObserver, RecordingObserver, SessionEvent};
pub use record::MoveRecord;
pub use session::{SelectOutcome, Selection, Session};
pub use shared::{SharedSession, WeakSession};
