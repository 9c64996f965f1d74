use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while loading the INI settings file or writing the
/// first-run template.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the settings file.
    #[error("Failed to read settings file {path}: {source}")]
    IniRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The settings file is not valid INI.
    #[error("Failed to parse settings file {path}: {source}")]
    IniParse {
        path: PathBuf,
        #[source]
        source: ini::ParseError,
    },
    /// Failed to write the first-run template.
    #[error("Failed to write settings template {path}: {source}")]
    TemplateWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
