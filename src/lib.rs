//! # Geotag Report
//!
//! Find out where a batch of photos was taken without opening them one by one.
//!
//! This crate scans a folder for image files, reads the GPS position stored in
//! each file's EXIF block, and writes a single table with one row per photo.
//!
//! ## Key Features
//!
//! - **EXIF GPS decoding**: Reads latitude/longitude from JPEG, TIFF, PNG, WebP and HEIF files.
//! - **Coordinate conversion**: Turns degrees/minutes/seconds into decimal degrees, keeping the hemisphere letter.
//! - **Failure policies**: Skip unreadable files, or finish the scan and then fail if any file was unreadable.
//! - **Reports**: CSV, HTML or JSON, written to stdout or to a file that is never overwritten by accident.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use geotag_report::{GeotagScanner, ScanConfig};
//!
//! fn main() -> color_eyre::Result<()> {
//!     let config = ScanConfig::builder()
//!         .input("photos")
//!         .output("locations.csv")
//!         .build();
//!
//!     let scanner = GeotagScanner::builder().config(config).build()?;
//!     let result = scanner.run()?;
//!
//!     println!("{} photo(s) have a location", result.records.len());
//!     Ok(())
//! }
//! ```

pub mod config;
mod error;
pub mod features;
pub mod geotag_scanner;
pub mod utils;

pub use config::ScanConfig;
pub use error::GeotagError;
pub use features::decoder::{ExifDecoder, MetadataDecoder, RawMetadata};
pub use features::extraction::{FailurePolicy, FileOutcome, PipelineResult, extract};
pub use features::gps::{Coordinate, GeoRecord, dms_to_decimal};
pub use features::report::ReportFormat;
pub use geotag_scanner::GeotagScanner;
