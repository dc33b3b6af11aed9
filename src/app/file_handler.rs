//! File system helpers for the application layer.
//!
//! Validates the dictionary path before anything is loaded and writes text
//! output (the rendered search tree) to disk. Uses the verbose logging macros
//! from the parent `app` module.

use std::fs::OpenOptions;
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;

use super::error::AppError;
use super::verbose_eprintln;

/// Checks that the dictionary path exists and points to a regular file.
///
/// # Errors
/// Returns `AppError::General` if the path does not exist and
/// `AppError::InvalidPath` if it is not a file.
pub fn validate_dictionary_path(dictionary_path: &Path, quiet_mode: bool) -> Result<(), AppError> {
    if !dictionary_path.exists() {
        let error_msg = format!("File not found: {}", dictionary_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }
    if !dictionary_path.is_file() {
        verbose_eprintln!(
            quiet_mode,
            "Input Error: Path is not a file: {}",
            dictionary_path.display()
        );
        return Err(AppError::InvalidPath(dictionary_path.display().to_string()));
    }
    Ok(())
}

/// Writes string content to a file, creating or truncating it.
///
/// The writer is flushed before returning so the caller sees the complete
/// file as soon as the call succeeds.
pub fn write_content_to_file(file_path: &Path, content: &str) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}
