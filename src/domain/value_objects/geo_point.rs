//! # Geographic Point
//!
//! A validated (longitude, latitude) coordinate with great-circle distance.
//!
//! Distances use the haversine formula over a spherical Earth model, which
//! is accurate to well under 0.5% for the radii this system works with.

use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic coordinate.
///
/// # Invariants
///
/// - `-180 <= longitude <= 180`
/// - `-90 <= latitude <= 90`
///
/// # Examples
///
/// ```
/// use exchange_locator::domain::value_objects::geo_point::GeoPoint;
///
/// let casablanca = GeoPoint::new(-7.5898, 33.5731).unwrap();
/// let rabat = GeoPoint::new(-6.8498, 34.0209).unwrap();
///
/// let distance = casablanca.distance_km(&rabat);
/// assert!(distance > 80.0 && distance < 95.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    longitude: f64,
    latitude: f64,
}

impl GeoPoint {
    /// Creates a coordinate, validating both components.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCoordinate`] naming the offending
    /// component when a value is out of range or not a number.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::InvalidCoordinate {
                field: "latitude",
                value: latitude,
            });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinate {
                field: "longitude",
                value: longitude,
            });
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Returns the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Great-circle distance to another point, in kilometres.
    #[must_use]
    pub fn distance_km(&self, other: &Self) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.longitude, self.latitude)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn valid_coordinates_accepted() {
        assert!(GeoPoint::new(0.0, 0.0).is_ok());
        assert!(GeoPoint::new(-180.0, -90.0).is_ok());
        assert!(GeoPoint::new(180.0, 90.0).is_ok());
    }

    #[test]
    fn latitude_out_of_range_rejected() {
        let err = GeoPoint::new(0.0, 90.5).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidCoordinate {
                field: "latitude",
                ..
            }
        ));
    }

    #[test]
    fn longitude_out_of_range_rejected() {
        let err = GeoPoint::new(-180.1, 0.0).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidCoordinate {
                field: "longitude",
                ..
            }
        ));
    }

    #[test]
    fn nan_rejected() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = GeoPoint::new(-7.5898, 33.5731).unwrap();
        assert!(p.distance_km(&p).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(-7.5898, 33.5731).unwrap();
        let b = GeoPoint::new(-6.8498, 34.0209).unwrap();
        assert!((a.distance_km(&b) - b.distance_km(&a)).abs() < 1e-9);
    }

    #[test]
    fn casablanca_to_rabat_is_about_87_km() {
        let casablanca = GeoPoint::new(-7.5898, 33.5731).unwrap();
        let rabat = GeoPoint::new(-6.8498, 34.0209).unwrap();
        let d = casablanca.distance_km(&rabat);
        assert!((80.0..95.0).contains(&d), "got {d}");
    }

    #[test]
    fn antipodal_distance_is_half_circumference() {
        let a = GeoPoint::new(0.0, 0.0).unwrap();
        let b = GeoPoint::new(180.0, 0.0).unwrap();
        let d = a.distance_km(&b);
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((d - half).abs() < 1.0, "got {d}");
    }
}
