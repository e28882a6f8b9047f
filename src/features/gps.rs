use serde::{Serialize, Serializer};
use std::fmt;

/// Converts a degrees/minutes/seconds triple into decimal degrees.
///
/// Minutes and seconds are not range-checked: `(0, 60, 0)` is accepted and
/// yields the same value as `(1, 0, 0)`.
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}

/// A decimal-degree magnitude together with its hemisphere reference.
///
/// Displays as the value immediately followed by the reference character,
/// e.g. `41.40338888888889N`. This is the format written to reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub value: f64,
    pub reference: char,
}

impl Coordinate {
    pub fn from_dms(dms: [f64; 3], reference: char) -> Self {
        let [degrees, minutes, seconds] = dms;
        Self {
            value: dms_to_decimal(degrees, minutes, seconds),
            reference,
        }
    }

    /// Signed decimal degrees, negative for the southern and western hemispheres.
    pub fn signed(&self) -> f64 {
        match self.reference.to_ascii_uppercase() {
            'S' | 'W' => -self.value,
            _ => self.value,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug keeps the fractional part on whole numbers ("2.0", not "2"),
        // but switches to exponent notation for very small or large magnitudes.
        let mut number = format!("{:?}", self.value);
        if number.contains('e') {
            number = self.value.to_string();
            if !number.contains('.') {
                number.push_str(".0");
            }
        }
        write!(f, "{number}{}", self.reference)
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One row of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoRecord {
    /// Path of the source file, as it was given to the pipeline.
    pub filename: String,
    pub latitude: Coordinate,
    pub longitude: Coordinate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_degrees_are_unchanged() {
        for degrees in [0.0, 1.0, 41.0, 179.0] {
            assert_eq!(dms_to_decimal(degrees, 0.0, 0.0), degrees);
        }
    }

    #[test]
    fn test_sixty_minutes_equal_one_degree() {
        assert_eq!(dms_to_decimal(0.0, 60.0, 0.0), dms_to_decimal(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_out_of_range_minutes_are_accepted() {
        // 90 minutes is 1.5 degrees; nothing is clamped or rejected.
        assert_eq!(dms_to_decimal(10.0, 90.0, 0.0), 11.5);
    }

    #[test]
    fn test_barcelona_latitude() {
        let value = dms_to_decimal(41.0, 24.0, 12.2);
        assert!((value - 41.403_388_888_888_89).abs() < 1e-12);
    }

    #[test]
    fn test_coordinate_display_appends_reference() {
        let coordinate = Coordinate::from_dms([2.0, 10.0, 26.5], 'E');
        let text = coordinate.to_string();
        assert!(text.starts_with("2.17402"), "got {text}");
        assert!(text.ends_with('E'));
        // No separator between the number and the reference.
        let number: f64 = text.trim_end_matches('E').parse().unwrap();
        assert_eq!(number, coordinate.value);
    }

    #[test]
    fn test_coordinate_display_keeps_fraction_on_whole_numbers() {
        let coordinate = Coordinate::from_dms([2.0, 0.0, 0.0], 'W');
        assert_eq!(coordinate.to_string(), "2.0W");
    }

    #[test]
    fn test_coordinate_display_never_uses_exponent_notation() {
        let near_equator = Coordinate::from_dms([0.0, 0.0, 0.0001], 'N');
        let text = near_equator.to_string();
        assert!(!text.contains('e'), "got {text}");
        assert!(text.starts_with("0.0000000277777"), "got {text}");
        assert!(text.ends_with('N'));
        let number: f64 = text.trim_end_matches('N').parse().unwrap();
        assert_eq!(number, near_equator.value);

        let huge = Coordinate { value: 1e20, reference: 'E' };
        assert_eq!(huge.to_string(), "100000000000000000000.0E");
    }

    #[test]
    fn test_signed_value_for_each_hemisphere() {
        let value = 12.5;
        let make = |reference| Coordinate { value, reference };
        assert_eq!(make('N').signed(), 12.5);
        assert_eq!(make('E').signed(), 12.5);
        assert_eq!(make('S').signed(), -12.5);
        assert_eq!(make('W').signed(), -12.5);
        assert_eq!(make('w').signed(), -12.5);
    }

    #[test]
    fn test_record_serializes_coordinates_as_strings() {
        let record = GeoRecord {
            filename: "a.jpg".to_string(),
            latitude: Coordinate { value: 1.5, reference: 'S' },
            longitude: Coordinate { value: 3.0, reference: 'E' },
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "filename": "a.jpg",
                "latitude": "1.5S",
                "longitude": "3.0E"
            })
        );
    }
}
