// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::LineBuffer)
    clippy::module_name_repetitions
)]

//! # linedit
//!
//! A line-oriented interactive text file editor.
//!
//! A file is held in memory as an ordered sequence of lines addressed by
//! 1-based position and edited one command at a time:
//! - Insert, delete, replace and append whole lines
//! - Regex search, and substitution on the first matching line or globally
//! - Copy a line range to a clipboard and paste it (repeatedly) elsewhere
//! - Explicit save, with unsaved-changes tracking
//!
//! ## Modules
//!
//! - [`editor`]: The line buffer and its index-validated mutations
//! - [`search`]: Regex search and substitution
//! - [`clipboard`]: Holding area for copied lines
//! - [`persist`]: Loading and saving files
//! - [`app`]: Command parsing and the interactive loop
//! - [`config`]: Saved command-line defaults
//! - [`error`]: Error types

pub mod app;
pub mod clipboard;
pub mod config;
pub mod editor;
pub mod error;
pub mod persist;
pub mod search;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Command, Session};
    pub use crate::clipboard::Clipboard;
    pub use crate::editor::LineBuffer;
    pub use crate::error::{EditError, Result};
    pub use crate::search::SubstituteMode;
}
