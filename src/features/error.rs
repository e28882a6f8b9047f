use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a file's bytes into metadata.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("File not readable or no EXIF data in file: {0}")]
    Unreadable(String),

    #[error("Could not read file: {0}")]
    Io(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Exiting due to error: {failures} file(s) could not be read")]
    Aborted { failures: usize },
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Cannot overwrite existing file {0}. Use --force to overwrite.")]
    AlreadyExists(PathBuf),

    #[error("Cannot force overwrite {0} since it exists as a directory.")]
    IsDirectory(PathBuf),

    #[error("I/O error while writing the report")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cannot use --force without specifying --output")]
    ForceWithoutOutput,
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),
}
