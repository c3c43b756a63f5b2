//! Geographic coordinate value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use forestry_core::AppError;

/// A validated WGS84 coordinate captured in the field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Altitude above sea level in meters, when the GPS fix provided one.
    pub altitude_m: Option<f64>,
}

impl Coordinate {
    /// Builds a coordinate, rejecting out-of-range values.
    pub fn new(latitude: f64, longitude: f64, altitude_m: Option<f64>) -> Result<Self, AppError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::validation(
                "Latitude must be between -90 and 90 degrees",
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::validation(
                "Longitude must be between -180 and 180 degrees",
            ));
        }
        Ok(Self {
            latitude,
            longitude,
            altitude_m,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.altitude_m {
            Some(alt) => write!(f, "({}, {}, {alt}m)", self.latitude, self.longitude),
            None => write!(f, "({}, {})", self.latitude, self.longitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_ranges() {
        assert!(Coordinate::new(-4.2153, -79.8832, Some(1240.0)).is_ok());
        assert!(Coordinate::new(90.0, 180.0, None).is_ok());
        assert!(Coordinate::new(-90.0, -180.0, None).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Coordinate::new(90.01, 0.0, None).is_err());
        assert!(Coordinate::new(-91.0, 0.0, None).is_err());
        assert!(Coordinate::new(0.0, 180.5, None).is_err());
        assert!(Coordinate::new(0.0, -200.0, None).is_err());
    }

    #[test]
    fn display_includes_altitude_when_present() {
        let c = Coordinate::new(1.5, -2.5, Some(850.0)).unwrap();
        assert_eq!(c.to_string(), "(1.5, -2.5, 850m)");
    }
}
