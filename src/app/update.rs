use tracing::{debug, info};

use crate::app::command::parse_line;
use crate::app::{Command, ParseError};
use crate::clipboard::Clipboard;
use crate::editor::LineBuffer;
use crate::error::EditError;
use crate::{persist, search};

/// Everything a single editing session owns.
#[derive(Debug)]
pub struct Session {
    pub buffer: LineBuffer,
    pub clipboard: Clipboard,
}

impl Session {
    /// Start a session on `buffer` with an empty clipboard.
    pub fn new(buffer: LineBuffer) -> Self {
        Self {
            buffer,
            clipboard: Clipboard::new(),
        }
    }
}

/// What a successfully executed command produced, for the loop to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Show the whole buffer
    Listing,
    /// Buffer changed, nothing to report
    Edited,
    /// Positions of matching lines
    Matches(Vec<usize>),
    /// Number of lines a substitution changed
    Substituted(usize),
    /// Number of lines now on the clipboard
    Copied(usize),
    /// Number of lines pasted
    Pasted(usize),
    Saved,
    Help,
    /// Quit requested; the loop handles the unsaved-changes prompt
    Quit,
}

/// A command that was understood but could not be carried out.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Edit(#[from] EditError),
}

/// Apply one command to the session.
///
/// # Errors
/// Returns the engine's [`EditError`] unchanged, or a [`ParseError`] for a
/// paste target that is not a line number. All of them leave the session
/// usable.
pub fn execute(session: &mut Session, command: Command) -> Result<Outcome, CommandError> {
    debug!(?command, "executing");
    let buffer = &mut session.buffer;

    let outcome = match command {
        Command::Display => Outcome::Listing,
        Command::Insert(pos, text) => {
            buffer.insert(pos, text)?;
            info!(line = pos, "inserted line");
            Outcome::Edited
        }
        Command::Delete(pos) => {
            buffer.delete(pos)?;
            info!(line = pos, "deleted line");
            Outcome::Edited
        }
        Command::Replace(pos, text) => {
            buffer.replace(pos, text)?;
            info!(line = pos, "replaced line");
            Outcome::Edited
        }
        Command::Append(text) => {
            buffer.append(text);
            info!(line = buffer.line_count(), "appended line");
            Outcome::Edited
        }
        Command::Search(pattern) => Outcome::Matches(search::search(buffer, &pattern)?),
        Command::Substitute {
            pattern,
            replacement,
            mode,
        } => {
            let changed = search::substitute(buffer, &pattern, &replacement, mode)?;
            if changed > 0 {
                info!(lines = changed, ?mode, "substituted");
            }
            Outcome::Substituted(changed)
        }
        Command::Copy(start, end) => {
            let count = session.clipboard.copy_from(buffer, start, end)?;
            info!(start, end, "copied lines");
            Outcome::Copied(count)
        }
        Command::Paste(line) => {
            if session.clipboard.is_empty() {
                return Err(EditError::EmptyClipboard.into());
            }
            let pos = parse_line(&line)?;
            let count = session.clipboard.paste_into(buffer, pos)?;
            info!(lines = count, line = pos, "pasted lines");
            Outcome::Pasted(count)
        }
        Command::Save => {
            persist::save(buffer)?;
            Outcome::Saved
        }
        Command::Quit => Outcome::Quit,
        Command::Help => Outcome::Help,
    };
    Ok(outcome)
}
