//! Error types shared by the editing engine.

use std::path::PathBuf;

/// Result type for buffer, search, clipboard and persistence operations.
pub type Result<T> = std::result::Result<T, EditError>;

/// Errors that can occur while editing a buffer.
///
/// Every variant is recoverable from the interactive loop's point of view:
/// the message is shown and the session continues.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("invalid line number: {0}")]
    InvalidPosition(usize),

    #[error("invalid line range: {start}-{end}")]
    InvalidRange { start: usize, end: usize },

    #[error("invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("clipboard is empty")]
    EmptyClipboard,

    #[error("cannot {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EditError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_message_names_the_line() {
        let err = EditError::InvalidPosition(7);
        assert_eq!(err.to_string(), "invalid line number: 7");
    }

    #[test]
    fn test_range_message_shows_both_ends() {
        let err = EditError::InvalidRange { start: 4, end: 2 };
        assert_eq!(err.to_string(), "invalid line range: 4-2");
    }

    #[test]
    fn test_io_message_includes_path_and_cause() {
        let err = EditError::io(
            "open",
            "notes.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("cannot open notes.txt"));
        assert!(msg.ends_with("denied"));
    }
}
