//! Loading and saving buffers as plain text files.
//!
//! One stored line per physical line. Loading strips exactly one `\n` (or
//! `\r\n`) per line; saving writes every line followed by `\n`.
//!
//! Saving truncates the target and writes it in place. A crash part way
//! through can leave a truncated file behind; there is no temp-file rename.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use tracing::info;

use crate::editor::LineBuffer;
use crate::error::{EditError, Result};

/// Load `path` into a clean buffer.
///
/// A missing file is not an error: the buffer starts empty and the file is
/// created on first save.
///
/// # Errors
/// Returns [`EditError::Io`] if the file exists but cannot be opened or read
/// (including content that is not valid UTF-8).
pub fn load(path: impl AsRef<Path>) -> Result<LineBuffer> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "file does not exist, starting empty");
            return Ok(LineBuffer::new(path));
        }
        Err(err) => return Err(EditError::io("open", path, err)),
    };

    let lines = BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|err| EditError::io("read", path, err))?;

    info!(path = %path.display(), lines = lines.len(), "loaded file");
    Ok(LineBuffer::from_lines(path, lines))
}

/// Write `buffer` to its path and mark it clean.
///
/// # Errors
/// Returns [`EditError::Io`] on any create, write or flush failure. The
/// buffer's modified flag is left as it was.
pub fn save(buffer: &mut LineBuffer) -> Result<()> {
    let path = buffer.path().to_path_buf();
    let file = File::create(&path).map_err(|err| EditError::io("create", &path, err))?;

    let mut writer = BufWriter::new(file);
    for line in buffer.lines() {
        writeln!(writer, "{line}").map_err(|err| EditError::io("write", &path, err))?;
    }
    writer
        .flush()
        .map_err(|err| EditError::io("write", &path, err))?;

    buffer.mark_clean();
    info!(path = %path.display(), lines = buffer.line_count(), "saved file");
    Ok(())
}
