//! Interactive command loop.
//!
//! Follows the same split as the rest of the crate's front end:
//! - [`Command`]: One parsed line of user input
//! - [`execute`]: Applies a command to the [`Session`] and reports an [`Outcome`]
//! - [`App::run`]: Reads input, renders outcomes and errors, handles quitting
//!
//! Input and output are injected so whole sessions can be driven from tests.

mod command;
mod event_loop;
mod update;

pub use command::{Command, ParseError, USAGE};
pub use update::{CommandError, Outcome, Session, execute};

use std::path::Path;

use crate::editor::LineBuffer;
use crate::error::Result;
use crate::persist;

/// Owns the editing session and runs the interactive loop.
pub struct App {
    session: Session,
    color: bool,
}

impl App {
    /// Open `path` for editing. A missing file starts an empty buffer.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_buffer(persist::load(path)?))
    }

    /// Start a session on an already loaded buffer.
    pub fn from_buffer(buffer: LineBuffer) -> Self {
        Self {
            session: Session::new(buffer),
            color: false,
        }
    }

    /// Enable or disable coloured error prefixes.
    pub const fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }
}

#[cfg(test)]
mod tests;
