//! Line-protocol front-end for parlor game sessions.

pub mod command;
pub mod driver;
pub mod error;

pub use command::{Command, TermOption};
pub use driver::Terminal;
pub use error::TermError;
