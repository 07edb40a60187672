//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const BOM: char = '\u{feff}';

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text, dropping a leading byte-order mark
    pub fn read_text(path: &Path) -> Result<String> {
        let mut content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        if content.starts_with(BOM) {
            content.drain(..BOM.len_utf8());
        }
        Ok(content)
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }

    /// Sum of file sizes, for progress reporting
    pub fn total_size(paths: &[impl AsRef<Path>]) -> Result<u64> {
        paths
            .iter()
            .map(|path| Self::file_size(path.as_ref()))
            .sum()
    }
}
