//! Runtime configuration shared by the desktop and CLI front ends.
//!
//! The notes file location is resolved from, in order: an explicit path, the
//! `PTAK_NOTES_PATH` environment variable, the platform data directory, and
//! finally `notes.json` in the working directory.

use std::path::PathBuf;

use crate::util::normalize_text_option;

/// Environment variable that overrides the notes file location.
pub const NOTES_PATH_ENV: &str = "PTAK_NOTES_PATH";

/// File name of the notes file.
pub const NOTES_FILE_NAME: &str = "notes.json";

/// Directory under the platform data dir that holds the notes file.
pub const APP_DIR_NAME: &str = "ptak-note";

/// Titles shorter than this need a non-empty body to be saved.
pub const MIN_TITLE_LEN_WITHOUT_CONTENT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Location of the JSON notes file
    pub notes_path: PathBuf,
    /// Minimum title length (in characters) for a note with an empty body
    pub min_title_len_without_content: usize,
}

impl AppConfig {
    /// Config for an explicit notes file.
    pub fn with_notes_path(path: impl Into<PathBuf>) -> Self {
        Self {
            notes_path: path.into(),
            min_title_len_without_content: MIN_TITLE_LEN_WITHOUT_CONTENT,
        }
    }

    /// Resolve the config from the process environment.
    pub fn resolve(explicit_path: Option<PathBuf>) -> Self {
        Self::resolve_with(
            explicit_path,
            std::env::var(NOTES_PATH_ENV).ok(),
            dirs::data_dir(),
        )
    }

    fn resolve_with(
        explicit_path: Option<PathBuf>,
        env_path: Option<String>,
        data_dir: Option<PathBuf>,
    ) -> Self {
        let notes_path = explicit_path
            .or_else(|| normalize_text_option(env_path).map(PathBuf::from))
            .or_else(|| data_dir.map(|dir| dir.join(APP_DIR_NAME).join(NOTES_FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(NOTES_FILE_NAME));

        tracing::debug!("Using notes file {}", notes_path.display());
        Self::with_notes_path(notes_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}
