use crate::features::error::ConfigError;
use crate::features::extraction::{ExtractOptions, FailurePolicy};
use crate::features::report::ReportFormat;
use bon::Builder;
use regex::Regex;
use std::path::PathBuf;

/// Everything a single scan needs to know, passed explicitly into the run.
///
/// ```rust
/// # use geotag_report::ScanConfig;
/// # use geotag_report::features::extraction::FailurePolicy;
/// let config = ScanConfig::builder()
///     .input("photos")
///     .output("locations.csv")
///     .failure_policy(FailurePolicy::Abort)
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ScanConfig {
    /// Folder (or single file) to scan. Defaults to the current directory.
    #[builder(default = PathBuf::from("."), into)]
    pub input: PathBuf,
    /// Only files whose name matches are scanned.
    pub pattern: Option<Regex>,
    #[builder(default)]
    pub include_hidden: bool,
    /// Report destination. The report goes to stdout when unset.
    #[builder(into)]
    pub output: Option<PathBuf>,
    /// Allow replacing an existing output file.
    #[builder(default)]
    pub force: bool,
    /// Explicit report format. Inferred from `output` when unset.
    pub format: Option<ReportFormat>,
    #[builder(default)]
    pub failure_policy: FailurePolicy,
    /// Suppress per-file diagnostics.
    #[builder(default)]
    pub quiet: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ScanConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.force && self.output.is_none() {
            return Err(ConfigError::ForceWithoutOutput);
        }
        Ok(())
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            policy: self.failure_policy,
            quiet: self.quiet,
        }
    }

    pub fn report_format(&self) -> ReportFormat {
        ReportFormat::resolve(self.format, self.output.as_deref())
    }
}
