//! Path helpers for the style file location.
//!
//! Responsibilities:
//! - Determine the default style file path.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::STYLE_FILE_NAME;

/// Returns the default path to the style file.
///
/// - Linux: `~/.config/spark-alert/style.json`
/// - macOS: `~/Library/Application Support/spark-alert/style.json`
/// - Windows: `%AppData%\spark-alert\config\style.json`
pub fn default_style_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", "spark-alert")
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(STYLE_FILE_NAME))
}
