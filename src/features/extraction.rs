use crate::features::decoder::{MetadataDecoder, RawMetadata};
use crate::features::diagnostics::DiagnosticSink;
use crate::features::error::{DecodeError, ExtractError};
use crate::features::gps::{Coordinate, GeoRecord};
use std::path::Path;

/// What to do when a file cannot be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Leave the file out of the report and carry on.
    #[default]
    Skip,
    /// Process every file, then fail the whole run if any file was unreadable.
    Abort,
}

/// The subset of the run configuration the pipeline itself needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub policy: FailurePolicy,
    /// Suppress per-file diagnostics.
    pub quiet: bool,
}

/// The result of processing a single file.
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Record(GeoRecord),
    NoGpsData,
    DecodeFailure(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineResult {
    /// Records in input order. Files without a record are absent.
    pub records: Vec<GeoRecord>,
    pub had_failure: bool,
}

/// Checks the decoded metadata for a complete position and converts it.
///
/// Both axes need exactly three components and a hemisphere reference;
/// anything else means there is no usable position.
pub fn geo_record(filename: String, metadata: &RawMetadata) -> Option<GeoRecord> {
    let latitude = gps_triple(metadata.gps_latitude.as_deref())?;
    let longitude = gps_triple(metadata.gps_longitude.as_deref())?;
    let latitude_ref = metadata.gps_latitude_ref?;
    let longitude_ref = metadata.gps_longitude_ref?;

    Some(GeoRecord {
        filename,
        latitude: Coordinate::from_dms(latitude, latitude_ref),
        longitude: Coordinate::from_dms(longitude, longitude_ref),
    })
}

fn gps_triple(components: Option<&[f64]>) -> Option<[f64; 3]> {
    components.and_then(|c| <[f64; 3]>::try_from(c).ok())
}

/// Reads and decodes a single file.
///
/// The whole file is read into memory. A read error is reported the same way
/// as a file the decoder rejects.
pub fn extract_file(path: &Path, decoder: &impl MetadataDecoder) -> FileOutcome {
    let decoded = std::fs::read(path)
        .map_err(|e| DecodeError::Io(e.to_string()))
        .and_then(|bytes| decoder.decode(&bytes));

    match decoded {
        Ok(metadata) => match geo_record(path.display().to_string(), &metadata) {
            Some(record) => FileOutcome::Record(record),
            None => FileOutcome::NoGpsData,
        },
        Err(e) => FileOutcome::DecodeFailure(e.to_string()),
    }
}

/// Runs every path through decode, shape check and normalization, in order.
///
/// Unreadable files are reported to `sink` (unless `options.quiet` is set) and
/// left out of the result. Under [`FailurePolicy::Abort`] the full list is still
/// processed before [`ExtractError::Aborted`] is returned.
///
/// # Errors
///
/// Returns [`ExtractError::Aborted`] only under [`FailurePolicy::Abort`] and only
/// when at least one file could not be decoded.
pub fn extract<I, P>(
    paths: I,
    options: ExtractOptions,
    decoder: &impl MetadataDecoder,
    mut sink: impl DiagnosticSink,
) -> Result<PipelineResult, ExtractError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut result = PipelineResult::default();
    let mut failures = 0;
    let mut without_gps = 0;

    for path in paths {
        let path = path.as_ref();
        match extract_file(path, decoder) {
            FileOutcome::Record(record) => {
                tracing::debug!(
                    "{}: {}, {}",
                    path.display(),
                    record.latitude,
                    record.longitude
                );
                result.records.push(record);
            }
            FileOutcome::NoGpsData => {
                tracing::debug!("{}: no GPS position", path.display());
                without_gps += 1;
            }
            FileOutcome::DecodeFailure(description) => {
                tracing::debug!("{}: unreadable ({description})", path.display());
                failures += 1;
                if !options.quiet {
                    sink.report(path, &description);
                }
            }
        }
    }

    result.had_failure = failures > 0;
    tracing::debug!(
        records = result.records.len(),
        without_gps,
        failures,
        "Extraction finished"
    );

    if result.had_failure && options.policy == FailurePolicy::Abort {
        return Err(ExtractError::Aborted { failures });
    }
    Ok(result)
}
