//! Holding area for copied line ranges.

use crate::editor::LineBuffer;
use crate::error::{EditError, Result};

/// Lines copied out of a buffer, owned independently of it.
///
/// Each successful copy replaces the contents wholesale. Pasting does not
/// consume anything, so the same block can be pasted repeatedly.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Clipboard {
    lines: Vec<String>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Copy lines `start..=end` of `buffer`. Returns the number of lines held.
    ///
    /// On failure the previous contents are kept.
    ///
    /// # Errors
    /// Returns [`EditError::InvalidRange`] if the range is not within the buffer.
    pub fn copy_from(&mut self, buffer: &LineBuffer, start: usize, end: usize) -> Result<usize> {
        self.lines = buffer.copy_range(start, end)?;
        Ok(self.lines.len())
    }

    /// Paste the held lines into `buffer` before `pos`. Returns the number of lines pasted.
    ///
    /// # Errors
    /// Returns [`EditError::EmptyClipboard`] if nothing has been copied, or
    /// [`EditError::InvalidPosition`] if `pos` is not a valid insertion point.
    pub fn paste_into(&self, buffer: &mut LineBuffer, pos: usize) -> Result<usize> {
        if self.lines.is_empty() {
            return Err(EditError::EmptyClipboard);
        }
        buffer.paste(pos, &self.lines)?;
        Ok(self.lines.len())
    }
}
