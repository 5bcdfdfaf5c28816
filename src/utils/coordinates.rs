use crate::error::{ProcessingError, Result};
use crate::utils::constants::{LAT_DMS_DIGITS, LON_DMS_DIGITS, MIN_DMS_TOKEN_LEN};
use std::fmt;

/// Which axis a coordinate token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateRole {
    Latitude,
    Longitude,
}

impl CoordinateRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoordinateRole::Latitude => "latitude",
            CoordinateRole::Longitude => "longitude",
        }
    }
}

impl fmt::Display for CoordinateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized point in signed decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecimalPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl DecimalPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// KML coordinate tuple: longitude first, altitude fixed at zero
    pub fn to_kml_coordinates(&self) -> String {
        format!(
            "{},{},0",
            format_degrees(self.longitude),
            format_degrees(self.latitude)
        )
    }
}

/// Convert a packed DMS token to decimal degrees
///
/// Accepts `DDMMSS` or `DDDMMSS` followed by a single hemisphere letter.
/// Only `S` and `W` flip the sign; any other trailing character is taken as
/// positive. Minutes and seconds are not range checked.
///
/// # Examples
/// ```
/// use waypoint_extractor::utils::dms_to_decimal;
///
/// let decimal = dms_to_decimal("0773000E").unwrap();
/// assert!((decimal - 77.5).abs() < 0.000001);
/// ```
pub fn dms_to_decimal(token: &str) -> Result<f64> {
    if token.chars().count() < MIN_DMS_TOKEN_LEN {
        return Err(ProcessingError::InvalidCoordinate(format!(
            "Coordinate '{}' is too short",
            token
        )));
    }

    let mut chars = token.chars();
    let direction = chars.next_back().unwrap_or_default();
    let digits = chars.as_str();

    let degree_width = match digits.chars().count() {
        LAT_DMS_DIGITS => 2,
        LON_DMS_DIGITS => 3,
        other => {
            return Err(ProcessingError::InvalidCoordinate(format!(
                "Invalid DMS format: '{}' has {} digits, expected {} or {}",
                digits, other, LAT_DMS_DIGITS, LON_DMS_DIGITS
            )))
        }
    };

    // All-ASCII from here on, so byte slicing lines up with characters
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProcessingError::InvalidCoordinate(format!(
            "Invalid numeric values in: '{}'",
            digits
        )));
    }

    let degrees = parse_component(&digits[..degree_width], digits)?;
    let minutes = parse_component(&digits[degree_width..degree_width + 2], digits)?;
    let seconds = parse_component(&digits[degree_width + 2..], digits)?;

    let decimal_value = degrees + minutes / 60.0 + seconds / 3600.0;

    if matches!(direction, 'S' | 'W') {
        Ok(-decimal_value)
    } else {
        Ok(decimal_value)
    }
}

fn parse_component(component: &str, digits: &str) -> Result<f64> {
    component.parse::<u32>().map(f64::from).map_err(|_| {
        ProcessingError::InvalidCoordinate(format!("Invalid numeric values in: '{}'", digits))
    })
}

/// Shortest round-trip rendering that always keeps a fractional part
pub fn format_degrees(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_token() {
        let result = dms_to_decimal("123456S").unwrap();
        let expected = -(12.0 + 34.0 / 60.0 + 56.0 / 3600.0);
        assert!((result - expected).abs() < 0.000001);
        assert!((result - -12.582222).abs() < 0.000001);

        let north = dms_to_decimal("204126N").unwrap();
        assert!((north - 20.690556).abs() < 0.000001);
    }

    #[test]
    fn test_longitude_token() {
        assert!((dms_to_decimal("0773000E").unwrap() - 77.5).abs() < 0.000001);
        assert!((dms_to_decimal("1393017E").unwrap() - 139.504722).abs() < 0.000001);
        assert!((dms_to_decimal("1393017W").unwrap() - -139.504722).abs() < 0.000001);
    }

    #[test]
    fn test_direction_letter_only_sets_sign() {
        // Role-mismatched and unknown letters are treated as positive
        assert!(dms_to_decimal("123456E").unwrap() > 0.0);
        assert!(dms_to_decimal("1234567N").unwrap() > 0.0);
        assert!(dms_to_decimal("123456X").unwrap() > 0.0);
        assert!(dms_to_decimal("1234567S").unwrap() < 0.0);
        // A trailing digit is consumed as the "letter"
        assert!((dms_to_decimal("1234567").unwrap() - 12.582222).abs() < 0.000001);
    }

    #[test]
    fn test_out_of_range_minutes_are_kept() {
        let result = dms_to_decimal("129999N").unwrap();
        let expected = 12.0 + 99.0 / 60.0 + 99.0 / 3600.0;
        assert!((result - expected).abs() < 0.000001);
    }

    #[test]
    fn test_invalid_tokens() {
        assert!(dms_to_decimal("").is_err());
        assert!(dms_to_decimal("12345S").is_err()); // too short
        assert!(dms_to_decimal("12345678E").is_err()); // 8 digits
        assert!(dms_to_decimal("12A456S").is_err());
        assert!(dms_to_decimal("-12345S").is_err());
        assert!(dms_to_decimal("12°3456S").is_err());
    }

    #[test]
    fn test_kml_coordinates_are_longitude_first() {
        let position = DecimalPosition::new(-12.5, 150.0);
        assert_eq!(position.to_kml_coordinates(), "150.0,-12.5,0");
    }

    #[test]
    fn test_format_degrees() {
        assert_eq!(format_degrees(77.5), "77.5");
        assert_eq!(format_degrees(150.0), "150.0");
        assert_eq!(format_degrees(-0.0), "-0.0");
    }
}
