//! Reading article text for non-interactive analysis.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Errors that can occur while reading article text.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Failed to read the file from disk.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read from standard input.
    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] io::Error),
}

/// Result type alias for input operations.
pub type InputResult<T> = Result<T, InputError>;

/// Reads article text from a file, or from stdin when `source` is `None`
/// or `-`.
pub fn read_input(source: Option<&Path>) -> InputResult<String> {
    match source {
        Some(path) if !is_stdin(Some(path)) => read_file(path),
        _ => read_reader(io::stdin().lock()).map_err(InputError::Stdin),
    }
}

/// Returns true if `source` names standard input.
pub fn is_stdin(source: Option<&Path>) -> bool {
    source.map_or(true, |path| path == Path::new("-"))
}

/// Reads article text from a file.
pub fn read_file(path: &Path) -> InputResult<String> {
    fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_reader<R: Read>(mut reader: R) -> io::Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}
