//! Path geometry extraction and axis-order disambiguation.
//!
//! Upstream producers are inconsistent about GeoJSON `[lon, lat]` versus
//! naive `[lat, lon]` ordering in geometry arrays. Cross-checking candidate
//! points against the already-resolved endpoints is the most reliable
//! disambiguator, so it is tried first; the numeric-range heuristic and the
//! configured default come after. One decision applies to the whole
//! segment: producers do not mix orderings within a single polyline.

use serde_json::Value;

use crate::geo::GeoPoint;
use crate::raw::RawGeometry;

use super::config::AssembleConfig;
use super::coords::{AxisOrder, numeric, point_from_parts};

/// Extract an ordered polyline from a segment's geometry payload.
///
/// Returns `None` when fewer than two valid points survive normalization,
/// order resolution and range validation. The straight-line fallback
/// between the endpoints is the renderer's job, not this function's.
pub(crate) fn extract_polyline(
    geometry: Option<&RawGeometry>,
    from: GeoPoint,
    to: GeoPoint,
    config: &AssembleConfig,
) -> Option<Vec<GeoPoint>> {
    let pairs = raw_pairs(geometry?);
    if pairs.len() < 2 {
        return None;
    }

    let order = detect_axis_order(
        &pairs,
        from,
        to,
        config.proximity_tolerance_deg,
        config.axis_default,
    );

    let mut points: Vec<GeoPoint> = Vec::with_capacity(pairs.len());
    for &(a, b) in &pairs {
        if let Some(p) = point_from_parts(a, b, order) {
            // Collapse consecutive duplicates; some producers repeat the
            // junction point at tile borders.
            if points.last() != Some(&p) {
                points.push(p);
            }
        }
    }

    if points.len() < 2 { None } else { Some(points) }
}

/// Flatten the payload into raw 2-tuples, dropping anything that is not
/// exactly two finite numbers.
fn raw_pairs(geometry: &RawGeometry) -> Vec<(f64, f64)> {
    geometry.points().iter().filter_map(pair_of).collect()
}

fn pair_of(value: &Value) -> Option<(f64, f64)> {
    let items = value.as_array()?;
    if items.len() != 2 {
        return None;
    }
    Some((numeric(&items[0])?, numeric(&items[1])?))
}

/// Decide the axis order of a list of raw pairs.
///
/// Priority:
/// 1. proximity: if some pair matches a resolved endpoint under exactly
///    one interpretation (within `tolerance_deg` on both axes), that
///    interpretation wins for the whole list;
/// 2. range: if some pair has exactly one component outside [-90, 90],
///    that component must be the longitude, fixing the order;
/// 3. otherwise `default`.
pub fn detect_axis_order(
    pairs: &[(f64, f64)],
    from: GeoPoint,
    to: GeoPoint,
    tolerance_deg: f64,
    default: AxisOrder,
) -> AxisOrder {
    for &(a, b) in pairs {
        let as_lat_lon = near_endpoint(a, b, from, tolerance_deg)
            || near_endpoint(a, b, to, tolerance_deg);
        let as_lon_lat = near_endpoint(b, a, from, tolerance_deg)
            || near_endpoint(b, a, to, tolerance_deg);
        match (as_lat_lon, as_lon_lat) {
            (true, false) => return AxisOrder::LatLon,
            (false, true) => return AxisOrder::LonLat,
            // Both or neither: this pair is not conclusive.
            _ => {}
        }
    }

    for &(a, b) in pairs {
        let a_could_be_lat = (-90.0..=90.0).contains(&a);
        let b_could_be_lat = (-90.0..=90.0).contains(&b);
        match (a_could_be_lat, b_could_be_lat) {
            // First component cannot be a latitude, so the pair is (lon, lat).
            (false, true) => return AxisOrder::LonLat,
            (true, false) => return AxisOrder::LatLon,
            // Both in range: no signal. Neither in range: garbage pair.
            _ => {}
        }
    }

    default
}

fn near_endpoint(lat: f64, lon: f64, endpoint: GeoPoint, tolerance_deg: f64) -> bool {
    (lat - endpoint.lat()).abs() <= tolerance_deg && (lon - endpoint.lon()).abs() <= tolerance_deg
}
