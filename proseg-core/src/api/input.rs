//! Input abstraction for the segmenter

use crate::error::{Error, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Text source accepted by [`Segmenter::process`](super::Segmenter::process)
pub enum Input {
    /// Direct text input
    Text(String),
    /// File path input
    File(PathBuf),
    /// Raw bytes input; must be UTF-8
    Bytes(Vec<u8>),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl Input {
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the whole input as text
    pub(crate) fn into_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::Bytes(bytes) => Ok(String::from_utf8(bytes)?),
            Input::File(path) => {
                let bytes = std::fs::read(&path).map_err(|e| {
                    Error::Io(format!("Failed to read file {}: {}", path.display(), e))
                })?;
                Ok(String::from_utf8(bytes)?)
            }
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader
                    .read_to_end(&mut buffer)
                    .map_err(|e| Error::Io(format!("Failed to read from reader: {}", e)))?;
                Ok(String::from_utf8(buffer)?)
            }
        }
    }
}
