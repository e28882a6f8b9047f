use crate::GeotagError;
use crate::config::ScanConfig;
use crate::features::decoder::{ExifDecoder, MetadataDecoder};
use crate::features::diagnostics::{DiagnosticSink, StderrSink};
use crate::features::extraction::{PipelineResult, extract};
use crate::features::output::write_report;
use crate::features::report::render;
use crate::utils::list_files_walkdir_filtered;
use bon::bon;
use std::path::PathBuf;

/// Runs a complete scan: list the input files, extract their positions,
/// render the report and write it out.
///
/// Use the builder pattern to construct an instance:
/// ```rust
/// # use geotag_report::{GeotagScanner, GeotagError, ScanConfig};
/// # fn main() -> Result<(), GeotagError> {
/// let scanner = GeotagScanner::builder()
///     .config(ScanConfig::builder().input("photos").build())
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct GeotagScanner {
    config: ScanConfig,
    decoder: Box<dyn MetadataDecoder>,
}

#[bon]
impl GeotagScanner {
    /// Constructs a `GeotagScanner` via a builder pattern.
    ///
    /// # Builder Arguments
    ///
    /// * `config: ScanConfig` - (Default: `ScanConfig::default()`) What to scan and where the report goes.
    /// * `decoder: Option<Box<dyn MetadataDecoder>>` - Replaces the EXIF decoder. If `None`, [`ExifDecoder`] is used.
    ///
    /// # Errors
    ///
    /// Returns [`GeotagError::Config`] when the configuration is inconsistent,
    /// e.g. `force` without an `output`.
    #[builder]
    pub fn new(
        #[builder(default)] config: ScanConfig,
        decoder: Option<Box<dyn MetadataDecoder>>,
    ) -> Result<Self, GeotagError> {
        config.validate()?;
        let decoder: Box<dyn MetadataDecoder> = match decoder {
            Some(decoder) => decoder,
            None => Box::new(ExifDecoder),
        };
        Ok(Self { config, decoder })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Lists the candidate files under the configured input.
    pub fn collect_paths(&self) -> Result<Vec<PathBuf>, GeotagError> {
        let paths = list_files_walkdir_filtered(
            &self.config.input,
            self.config.include_hidden,
            self.config.pattern.as_ref(),
        )?;
        tracing::info!(
            "Found {} file(s) under {}",
            paths.len(),
            self.config.input.display()
        );
        Ok(paths)
    }

    /// Runs the extraction pass over `paths`, reporting unreadable files to `sink`.
    pub fn extract(
        &self,
        paths: &[PathBuf],
        sink: impl DiagnosticSink,
    ) -> Result<PipelineResult, GeotagError> {
        Ok(extract(
            paths,
            self.config.extract_options(),
            &self.decoder,
            sink,
        )?)
    }

    pub fn render(&self, result: &PipelineResult) -> Result<String, GeotagError> {
        Ok(render(&result.records, self.config.report_format())?)
    }

    /// Performs the whole scan, printing diagnostics to stderr.
    ///
    /// # Errors
    ///
    /// * [`GeotagError::Walk`]: the input could not be listed.
    /// * [`GeotagError::Extract`]: a file was unreadable under the abort policy. Nothing is written.
    /// * [`GeotagError::Output`]: the output exists and `force` is off, or it is a directory.
    pub fn run(&self) -> Result<PipelineResult, GeotagError> {
        self.run_with_sink(StderrSink)
    }

    pub fn run_with_sink(&self, sink: impl DiagnosticSink) -> Result<PipelineResult, GeotagError> {
        let paths = self.collect_paths()?;
        let result = self.extract(&paths, sink)?;
        tracing::info!(
            "{} of {} file(s) have a GPS position",
            result.records.len(),
            paths.len()
        );

        let report = self.render(&result)?;
        write_report(self.config.output.as_deref(), &report, self.config.force)?;
        Ok(result)
    }
}
