use crate::features::error::DecodeError;
use exif::{Exif, In, Reader, Tag, Value};
use std::io::Cursor;

/// The GPS-related fields decoded from a file, before any shape checks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMetadata {
    pub gps_latitude: Option<Vec<f64>>,
    pub gps_latitude_ref: Option<char>,
    pub gps_longitude: Option<Vec<f64>>,
    pub gps_longitude_ref: Option<char>,
}

/// Turns the raw bytes of a file into [`RawMetadata`].
pub trait MetadataDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<RawMetadata, DecodeError>;
}

impl<D: MetadataDecoder + ?Sized> MetadataDecoder for &D {
    fn decode(&self, bytes: &[u8]) -> Result<RawMetadata, DecodeError> {
        (**self).decode(bytes)
    }
}

impl<D: MetadataDecoder + ?Sized> MetadataDecoder for Box<D> {
    fn decode(&self, bytes: &[u8]) -> Result<RawMetadata, DecodeError> {
        (**self).decode(bytes)
    }
}

/// Decodes EXIF blocks from JPEG, TIFF, PNG, WebP and HEIF containers.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExifDecoder;

impl MetadataDecoder for ExifDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<RawMetadata, DecodeError> {
        let result = Reader::new()
            .continue_on_error(true)
            .read_from_container(&mut Cursor::new(bytes))
            .or_else(|e| {
                e.distill_partial_result(|errors| {
                    for error in errors {
                        tracing::debug!("Ignoring broken EXIF field: {error}");
                    }
                })
            });

        match result {
            Ok(exif) => Ok(raw_metadata(&exif)),
            // A well-formed image without an EXIF block simply has nothing to report.
            Err(exif::Error::NotFound(_)) => Ok(RawMetadata::default()),
            Err(e) => Err(DecodeError::Unreadable(e.to_string())),
        }
    }
}

fn raw_metadata(exif: &Exif) -> RawMetadata {
    RawMetadata {
        gps_latitude: get_components(exif, Tag::GPSLatitude),
        gps_latitude_ref: get_reference(exif, Tag::GPSLatitudeRef),
        gps_longitude: get_components(exif, Tag::GPSLongitude),
        gps_longitude_ref: get_reference(exif, Tag::GPSLongitudeRef),
    }
}

fn get_components(exif: &Exif, tag: Tag) -> Option<Vec<f64>> {
    match &exif.get_field(tag, In::PRIMARY)?.value {
        Value::Rational(values) => Some(values.iter().map(|r| r.to_f64()).collect()),
        Value::SRational(values) => Some(values.iter().map(|r| r.to_f64()).collect()),
        _ => None,
    }
}

fn get_reference(exif: &Exif, tag: Tag) -> Option<char> {
    match &exif.get_field(tag, In::PRIMARY)?.value {
        Value::Ascii(strings) => strings
            .first()
            .and_then(|s| s.first())
            .filter(|b| b.is_ascii_alphabetic())
            .map(|&b| char::from(b)),
        _ => None,
    }
}
