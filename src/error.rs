use thiserror::Error;

/// The primary error type for the geotag_report crate.
#[derive(Error, Debug)]
pub enum GeotagError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not list input files: {0}")]
    Walk(#[from] walkdir::Error),

    // --- Custom Module Errors ---
    #[error(transparent)]
    Extract(#[from] crate::features::error::ExtractError),

    #[error(transparent)]
    Output(#[from] crate::features::error::OutputError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] crate::features::error::ConfigError),

    #[error("Report rendering failed: {0}")]
    Report(#[from] crate::features::error::ReportError),
}
