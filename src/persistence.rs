use crate::error::{BuildToolError, Result};
use std::path::Path;

// ============================================================================
// LOADING
// ============================================================================

/// Split text into lines, keeping each line's terminator.
///
/// Concatenating the result gives back `text` unchanged.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

/// Read a file as lines with their terminators.
///
/// # Errors
/// Returns error if the file cannot be read or is not UTF-8
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|e| BuildToolError::io(path, e))?;
    Ok(split_lines(&text))
}

// ============================================================================
// SAVING
// ============================================================================

/// Write the generated header, replacing whatever was there.
///
/// # Errors
/// Returns error if the file cannot be written
pub fn write_header(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| BuildToolError::io(path, e))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
