//! Regex search and substitution over a [`LineBuffer`].
//!
//! Provides:
//! - Line search returning every matching position
//! - Substitution on the first matching line only, or on every line
//!
//! Matching is partial (a pattern may match anywhere in a line) and
//! replacement uses `regex` replace-all semantics, so `$1` / `${name}`
//! expand capture groups.

use std::borrow::Cow;

use regex::Regex;

use crate::editor::LineBuffer;
use crate::error::Result;

/// Which lines a substitution touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstituteMode {
    /// Stop at the first line that matches. Every match on that line is
    /// replaced, not just the first one.
    First,
    /// Replace every match on every line.
    Global,
}

/// Positions (1-based, ascending) of every line matching `pattern`.
///
/// No matches is an empty result, not an error.
///
/// # Errors
/// Returns [`EditError::InvalidPattern`](crate::error::EditError::InvalidPattern)
/// if `pattern` does not compile.
pub fn search(buffer: &LineBuffer, pattern: &str) -> Result<Vec<usize>> {
    let re = Regex::new(pattern)?;
    Ok(buffer
        .lines()
        .iter()
        .enumerate()
        .filter(|(_, line)| re.is_match(line))
        .map(|(idx, _)| idx + 1)
        .collect())
}

/// Replace matches of `pattern` with `replacement` and return how many
/// lines were rewritten.
///
/// In [`SubstituteMode::Global`] a line whose matches expand to identical
/// text is skipped. In [`SubstituteMode::First`] the first matching line is
/// always rewritten and counted, even when its text comes out the same.
///
/// # Errors
/// Returns [`EditError::InvalidPattern`](crate::error::EditError::InvalidPattern)
/// if `pattern` does not compile. The buffer is left untouched in that case.
pub fn substitute(
    buffer: &mut LineBuffer,
    pattern: &str,
    replacement: &str,
    mode: SubstituteMode,
) -> Result<usize> {
    let re = Regex::new(pattern)?;

    let mut edits = Vec::new();
    for (idx, line) in buffer.lines().iter().enumerate() {
        if !re.is_match(line) {
            continue;
        }
        let updated = re.replace_all(line, replacement);
        match mode {
            SubstituteMode::First => {
                edits.push((idx + 1, updated.into_owned()));
                break;
            }
            SubstituteMode::Global => {
                if let Cow::Owned(updated) = updated
                    && updated != *line
                {
                    edits.push((idx + 1, updated));
                }
            }
        }
    }

    let changed = edits.len();
    for (pos, updated) in edits {
        buffer.replace(pos, updated)?;
    }
    Ok(changed)
}
