//! Leaf concerns of the report: decoding, coordinate conversion, the extraction
//! pass itself, and rendering/writing the result.
pub mod decoder;
pub mod diagnostics;
pub mod error;
pub mod extraction;
pub mod gps;
pub mod output;
pub mod report;
