//! Validated geographic coordinate type.

use std::fmt;

use serde::Serialize;

/// Error returned when constructing a point from invalid components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate: {reason}")]
pub struct InvalidPoint {
    reason: &'static str,
}

/// A validated geographic point: latitude in [-90, 90], longitude in
/// [-180, 180], both finite.
///
/// This type guarantees that any `GeoPoint` value is valid by construction.
/// Upstream data that fails validation never becomes a `GeoPoint`; it
/// becomes absence at the resolution layer.
///
/// # Examples
///
/// ```
/// use route_render::geo::GeoPoint;
///
/// let yakutsk = GeoPoint::new(62.0355, 129.6755).unwrap();
/// assert_eq!(yakutsk.lat(), 62.0355);
/// assert_eq!(yakutsk.lon(), 129.6755);
///
/// // Out-of-range latitude is rejected
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
///
/// // Non-finite components are rejected
/// assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Construct a point from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidPoint> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(InvalidPoint {
                reason: "components must be finite numbers",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidPoint {
                reason: "latitude must be within [-90, 90]",
            });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidPoint {
                reason: "longitude must be within [-180, 180]",
            });
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Whether both components are within `tolerance_deg` of `other`.
    ///
    /// This is the proximity check used for axis-order disambiguation;
    /// it is a box test in degrees, not a great-circle distance.
    pub fn is_near(&self, other: GeoPoint, tolerance_deg: f64) -> bool {
        (self.lat - other.lat).abs() <= tolerance_deg
            && (self.lon - other.lon).abs() <= tolerance_deg
    }
}

impl fmt::Debug for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoPoint({}, {})", self.lat, self.lon)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lon)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn in_range_always_constructs(
            lat in -90.0f64..=90.0,
            lon in -180.0f64..=180.0,
        ) {
            let p = GeoPoint::new(lat, lon).unwrap();
            prop_assert_eq!(p.lat(), lat);
            prop_assert_eq!(p.lon(), lon);
        }

        #[test]
        fn out_of_range_latitude_never_constructs(
            lat in prop_oneof![90.0001f64..=1e6, -1e6f64..=-90.0001],
            lon in -180.0f64..=180.0,
        ) {
            prop_assert!(GeoPoint::new(lat, lon).is_err());
        }
    }
}
