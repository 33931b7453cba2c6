//! Serialization module for converting analysis results to YAML or JSON format.
//!
//! This module provides functions to serialize analysis output into standard formats
//! and write it to files or return it as strings.

use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Serializes a value to YAML format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_yaml<T: Serialize>(value: &T) -> Result<String> {
    debug!("Serializing analysis result to YAML");
    serde_yaml::to_string(value).context("Failed to serialize analysis result to YAML")
}

/// Serializes a value to JSON format with pretty printing.
///
/// The output is formatted with indentation, making it suitable for human review
/// and version control.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_json<T: Serialize>(value: &T) -> Result<String> {
    debug!("Serializing analysis result to JSON");
    serde_json::to_string_pretty(value).context("Failed to serialize analysis result to JSON")
}

/// Writes string content to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does. Parent
/// directories are created as needed.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
