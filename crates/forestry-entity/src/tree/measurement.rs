//! Dendrometric measurement value object.

use serde::{Deserialize, Serialize};

use forestry_core::AppError;

/// Smalian form factor applied to the cylindrical volume.
const FORM_FACTOR: f64 = 0.7;

/// A validated set of field measurements for a single tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Diameter at breast height in centimeters.
    pub dbh_cm: f64,
    /// Total height in meters.
    pub total_height_m: f64,
    /// Merchantable height in meters.
    pub merchantable_height_m: Option<f64>,
    /// Crown diameter in meters.
    pub crown_diameter_m: Option<f64>,
}

impl Measurement {
    /// Builds a measurement, rejecting physically impossible values.
    pub fn new(
        dbh_cm: f64,
        total_height_m: f64,
        merchantable_height_m: Option<f64>,
        crown_diameter_m: Option<f64>,
    ) -> Result<Self, AppError> {
        if dbh_cm <= 0.0 {
            return Err(AppError::validation("DBH must be greater than 0"));
        }
        if total_height_m <= 0.0 {
            return Err(AppError::validation("Total height must be greater than 0"));
        }
        if let Some(merchantable) = merchantable_height_m {
            if merchantable > total_height_m {
                return Err(AppError::validation(
                    "Merchantable height cannot exceed total height",
                ));
            }
        }
        Ok(Self {
            dbh_cm,
            total_height_m,
            merchantable_height_m,
            crown_diameter_m,
        })
    }

    /// Basal area in m²: `π · (dbh/2)² / 10000`.
    pub fn basal_area_m2(&self) -> f64 {
        std::f64::consts::PI * (self.dbh_cm / 2.0).powi(2) / 10_000.0
    }

    /// Stem volume in m³ using the simplified Smalian formula:
    /// `basal area · height · 0.7`.
    pub fn volume_m3(&self) -> f64 {
        self.basal_area_m2() * self.total_height_m * FORM_FACTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(Measurement::new(0.0, 12.0, None, None).is_err());
        assert!(Measurement::new(-5.0, 12.0, None, None).is_err());
        assert!(Measurement::new(25.0, 0.0, None, None).is_err());
    }

    #[test]
    fn rejects_merchantable_above_total() {
        assert!(Measurement::new(25.0, 12.0, Some(15.0), None).is_err());
        assert!(Measurement::new(25.0, 12.0, Some(12.0), None).is_ok());
    }

    #[test]
    fn computes_basal_area_and_volume() {
        // DBH 30 cm -> basal area = π * 15² / 10000 ≈ 0.070686 m²
        let m = Measurement::new(30.0, 20.0, None, None).unwrap();
        let basal = m.basal_area_m2();
        assert!((basal - 0.070686).abs() < 1e-5);
        // volume = 0.070686 * 20 * 0.7 ≈ 0.98960 m³
        assert!((m.volume_m3() - 0.98960).abs() < 1e-4);
    }
}
