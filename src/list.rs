//! Word lists: one word per line.
//!
//! Blank lines and lines starting with `#` are skipped; surrounding whitespace
//! is trimmed.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to read a list from storage.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The underlying read failed. Not retried.
    #[error(
        "list source unavailable: {}; read the text another way and pass it to parse_list",
        .path.display()
    )]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Path the load was attempted from.
    pub fn path(&self) -> &Path {
        match self {
            Self::Unavailable { path, .. } => path,
        }
    }
}

/// Parse one-word-per-line text.
pub fn parse_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty() && !s.starts_with('#'))
        .map(str::to_owned)
        .collect()
}

/// Read and parse a list file.
pub fn load_list(path: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| unavailable(path, e))?;
    Ok(parsed(path, &text))
}

/// Async [`load_list`] on top of `tokio::fs`.
#[cfg(feature = "async")]
pub async fn load_list_async(path: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| unavailable(path, e))?;
    Ok(parsed(path, &text))
}

fn parsed(path: &Path, text: &str) -> Vec<String> {
    let words = parse_list(text);
    tracing::debug!(path = %path.display(), words = words.len(), "loaded list");
    words
}

fn unavailable(path: &Path, source: io::Error) -> LoadError {
    tracing::warn!(path = %path.display(), error = %source, "list source unavailable");
    LoadError::Unavailable {
        path: path.to_path_buf(),
        source,
    }
}
