//! Coordinate resolution from raw input shapes.
//!
//! Canonicalizes one coordinate-like value into a validated [`GeoPoint`]
//! or absence. A labelled `{latitude, longitude}` object is unambiguous;
//! a bare pair is interpreted under the axis order the caller supplies
//! (the configured default for embedded stop coordinates, the detected
//! order for path geometry).

use serde_json::Value;

use crate::geo::GeoPoint;
use crate::raw::RawCoordinate;

/// Which axis comes first in a bare coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrder {
    /// `[lat, lon]`, the naive convention.
    LatLon,
    /// `[lon, lat]`, the GeoJSON convention.
    LonLat,
}

/// Extract a finite number from a raw JSON value.
///
/// Accepts JSON numbers and numeric strings (producers send both);
/// rejects everything else, including NaN and infinities.
pub(crate) fn numeric(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Build a point from the two raw pair components under the given order.
/// Range validation happens inside [`GeoPoint::new`]; out-of-range input
/// yields `None`, never a bad point.
pub fn point_from_parts(a: f64, b: f64, order: AxisOrder) -> Option<GeoPoint> {
    match order {
        AxisOrder::LatLon => GeoPoint::new(a, b).ok(),
        AxisOrder::LonLat => GeoPoint::new(b, a).ok(),
    }
}

/// The two numeric components of a bare pair, in source order.
/// Anything that is not exactly two numbers is rejected.
pub(crate) fn pair_parts(values: &[Value]) -> Option<(f64, f64)> {
    if values.len() != 2 {
        return None;
    }
    Some((numeric(&values[0])?, numeric(&values[1])?))
}

/// Canonicalize a raw coordinate value, or return absence.
pub fn resolve_coordinate(raw: &RawCoordinate, pair_order: AxisOrder) -> Option<GeoPoint> {
    match raw {
        RawCoordinate::Object(fields) => {
            let lat = numeric(fields.latitude.as_ref()?)?;
            let lon = numeric(fields.longitude.as_ref()?)?;
            GeoPoint::new(lat, lon).ok()
        }
        RawCoordinate::Pair(values) => {
            let (a, b) = pair_parts(values)?;
            point_from_parts(a, b, pair_order)
        }
        RawCoordinate::Other(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(json: &str) -> RawCoordinate {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn labelled_object_is_unambiguous() {
        let c = coord(r#"{"latitude": 62.0355, "longitude": 129.6755}"#);
        let p = resolve_coordinate(&c, AxisOrder::LonLat).unwrap();
        // The pair order argument must not affect the labelled shape.
        assert_eq!(p.lat(), 62.0355);
        assert_eq!(p.lon(), 129.6755);
    }

    #[test]
    fn pair_respects_given_order() {
        let c = coord("[62.0, 129.7]");
        let p = resolve_coordinate(&c, AxisOrder::LatLon).unwrap();
        assert_eq!((p.lat(), p.lon()), (62.0, 129.7));

        let c = coord("[129.7, 62.0]");
        let p = resolve_coordinate(&c, AxisOrder::LonLat).unwrap();
        assert_eq!((p.lat(), p.lon()), (62.0, 129.7));
    }

    #[test]
    fn accepts_numeric_strings() {
        let c = coord(r#"{"lat": "62.0355", "lon": "129.6755"}"#);
        assert!(resolve_coordinate(&c, AxisOrder::LatLon).is_some());
    }

    #[test]
    fn rejects_missing_or_non_numeric_fields() {
        for json in [
            r#"{"latitude": 62.0}"#,
            r#"{"latitude": null, "longitude": 129.7}"#,
            r#"{"latitude": "north", "longitude": 129.7}"#,
            r#""62.0,129.7""#,
            "[62.0]",
            "[62.0, 129.7, 0.0]",
            r#"[62.0, "east"]"#,
        ] {
            let c = coord(json);
            assert!(
                resolve_coordinate(&c, AxisOrder::LatLon).is_none(),
                "expected rejection for {json}"
            );
        }
    }

    #[test]
    fn rejects_out_of_range_pairs() {
        let c = coord("[129.7, 62.0]");
        // Treated as (lat, lon), 129.7 is not a latitude.
        assert!(resolve_coordinate(&c, AxisOrder::LatLon).is_none());
    }

    #[test]
    fn numeric_filters_non_finite() {
        assert_eq!(numeric(&serde_json::json!(1.5)), Some(1.5));
        assert_eq!(numeric(&serde_json::json!("  -3.25 ")), Some(-3.25));
        assert_eq!(numeric(&serde_json::json!("NaN")), None);
        assert_eq!(numeric(&serde_json::json!("inf")), None);
        assert_eq!(numeric(&serde_json::json!(true)), None);
        assert_eq!(numeric(&serde_json::json!(null)), None);
    }
}
