use std::path::{Path, PathBuf};

use crate::error::{EditError, Result};

/// An in-memory file: an ordered sequence of lines bound to a path.
///
/// Lines are addressed by 1-based position. Reads, replacements and
/// deletions accept `1..=line_count()`; insertions and pastes add *before*
/// the given position and also accept `line_count() + 1` (the end).
/// No stored line contains a line terminator.
pub struct LineBuffer {
    path: PathBuf,
    lines: Vec<String>,
    modified: bool,
}

impl LineBuffer {
    /// Create an empty, unmodified buffer for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::from_lines(path, Vec::new())
    }

    /// Create an unmodified buffer holding `lines`.
    pub fn from_lines(path: impl Into<PathBuf>, lines: Vec<String>) -> Self {
        Self {
            path: path.into(),
            lines,
            modified: false,
        }
    }

    /// The path this buffer loads from and saves to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The line at `pos`, or `None` when out of range.
    pub fn line(&self, pos: usize) -> Option<&str> {
        pos.checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .map(String::as_str)
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.modified = false;
    }

    /// Insert `text` so that it occupies `pos`, shifting later lines down.
    ///
    /// # Errors
    /// Returns [`EditError::InvalidPosition`] unless `pos` is in `1..=line_count() + 1`.
    pub fn insert(&mut self, pos: usize, text: impl Into<String>) -> Result<()> {
        let idx = self.insertion_index(pos)?;
        self.lines.insert(idx, text.into());
        self.modified = true;
        Ok(())
    }

    /// Remove the line at `pos`, shifting later lines up. Returns the removed text.
    ///
    /// # Errors
    /// Returns [`EditError::InvalidPosition`] unless `pos` is in `1..=line_count()`.
    pub fn delete(&mut self, pos: usize) -> Result<String> {
        let idx = self.line_index(pos)?;
        let removed = self.lines.remove(idx);
        self.modified = true;
        Ok(removed)
    }

    /// Overwrite the line at `pos` in place. Returns the previous text.
    ///
    /// # Errors
    /// Returns [`EditError::InvalidPosition`] unless `pos` is in `1..=line_count()`.
    pub fn replace(&mut self, pos: usize, text: impl Into<String>) -> Result<String> {
        let idx = self.line_index(pos)?;
        let previous = std::mem::replace(&mut self.lines[idx], text.into());
        self.modified = true;
        Ok(previous)
    }

    /// Add `text` after the last line.
    pub fn append(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
        self.modified = true;
    }

    /// Snapshot lines `start..=end`. The buffer and its modified flag are untouched.
    ///
    /// # Errors
    /// Returns [`EditError::InvalidRange`] unless `1 <= start <= end <= line_count()`.
    pub fn copy_range(&self, start: usize, end: usize) -> Result<Vec<String>> {
        if start < 1 || start > end || end > self.lines.len() {
            return Err(EditError::InvalidRange { start, end });
        }
        Ok(self.lines[start - 1..end].to_vec())
    }

    /// Insert `block` before `pos`, keeping its order.
    ///
    /// An empty block leaves the buffer (and its modified flag) as it was.
    ///
    /// # Errors
    /// Returns [`EditError::InvalidPosition`] unless `pos` is in `1..=line_count() + 1`.
    pub fn paste(&mut self, pos: usize, block: &[String]) -> Result<()> {
        let idx = self.insertion_index(pos)?;
        if block.is_empty() {
            return Ok(());
        }
        self.lines.splice(idx..idx, block.iter().cloned());
        self.modified = true;
        Ok(())
    }

    // --- Private helpers ---

    /// Convert a position of an existing line to a vector index.
    fn line_index(&self, pos: usize) -> Result<usize> {
        if pos < 1 || pos > self.lines.len() {
            return Err(EditError::InvalidPosition(pos));
        }
        Ok(pos - 1)
    }

    /// Convert an insert-before position (which may be one past the end) to a vector index.
    fn insertion_index(&self, pos: usize) -> Result<usize> {
        if pos < 1 || pos > self.lines.len() + 1 {
            return Err(EditError::InvalidPosition(pos));
        }
        Ok(pos - 1)
    }
}

impl std::fmt::Debug for LineBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineBuffer")
            .field("path", &self.path)
            .field("lines", &format_args!("{} lines", self.lines.len()))
            .field("modified", &self.modified)
            .finish()
    }
}
