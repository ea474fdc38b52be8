//! Endpoint fallback resolution.
//!
//! Every emitted segment must have coordinates at both boundaries. The
//! resolver tries sources in decreasing trust order: the stop's own data,
//! the route's structural position, the adjacent segment, and finally the
//! gazetteer. Trusting embedded data first and a static table last
//! minimizes the chance of silently drawing a geographically wrong line.

use crate::gazetteer::Gazetteer;
use crate::geo::GeoPoint;
use crate::raw::{RawId, RawPlace, RawStopDescriptor};

use super::config::AssembleConfig;
use super::coords::resolve_coordinate;
use super::transfers::{Boundary, stop_identity};

/// What the resolver knows about a boundary's surroundings.
#[derive(Debug, Default)]
pub(crate) struct BoundaryContext<'a> {
    /// Resolved coordinate of the route's overall origin city.
    pub route_origin: Option<GeoPoint>,
    /// Resolved coordinate of the route's overall destination city.
    pub route_destination: Option<GeoPoint>,
    /// Whether the owning segment is the first in the route.
    pub is_first: bool,
    /// Whether the owning segment is the last in the route.
    pub is_last: bool,
    /// Raw identity and resolved point of the previously emitted
    /// segment's "to" stop. `None` when there is no previous segment or
    /// it was skipped. The identity stays `None` for an anonymous stop;
    /// display-name fallbacks never feed it.
    pub previous_to: Option<(Option<String>, GeoPoint)>,
    /// The next segment's raw "from" stop, if any.
    pub next_from: Option<&'a RawStopDescriptor>,
}

/// Resolve a boundary stop to a coordinate, or give up.
///
/// Priority, stopping at the first success:
/// 1. the stop's own embedded coordinate;
/// 2. the route's origin (destination) city, if this is the first
///    segment's "from" (last segment's "to");
/// 3. the same physical stop on the adjacent segment: the previous
///    segment's resolved "to" for a "from" boundary; for a "to"
///    boundary, the next segment's "from", by its embedded coordinate
///    or failing that by a gazetteer lookup on its name or id;
/// 4. gazetteer lookup by stop name, then by id.
pub(crate) fn resolve_boundary(
    stop: Option<&RawStopDescriptor>,
    boundary: Boundary,
    ctx: &BoundaryContext<'_>,
    gazetteer: &Gazetteer,
    config: &AssembleConfig,
) -> Option<GeoPoint> {
    if let Some(point) = stop
        .and_then(|s| s.coordinate.as_ref())
        .and_then(|c| resolve_coordinate(c, config.axis_default))
    {
        return Some(point);
    }

    match boundary {
        Boundary::From if ctx.is_first => {
            if let Some(point) = ctx.route_origin {
                return Some(point);
            }
        }
        Boundary::To if ctx.is_last => {
            if let Some(point) = ctx.route_destination {
                return Some(point);
            }
        }
        _ => {}
    }

    let identity = stop_identity(stop);
    match boundary {
        Boundary::From => {
            if let Some((previous_identity, point)) = &ctx.previous_to {
                if identities_compatible(&identity, previous_identity) {
                    return Some(*point);
                }
            }
        }
        Boundary::To => {
            if let Some(next) = ctx.next_from {
                if identities_compatible(&identity, &stop_identity(Some(next))) {
                    if let Some(point) = next
                        .coordinate
                        .as_ref()
                        .and_then(|c| resolve_coordinate(c, config.axis_default))
                    {
                        return Some(point);
                    }
                    // Same physical stop, so its name or id locates this
                    // boundary just as well as our own would.
                    if let Some(point) = lookup_stop(next, gazetteer) {
                        return Some(point);
                    }
                }
            }
        }
    }

    lookup_stop(stop?, gazetteer)
}

/// Gazetteer lookup for a stop: by name, then by id.
fn lookup_stop(stop: &RawStopDescriptor, gazetteer: &Gazetteer) -> Option<GeoPoint> {
    if let Some(point) = stop.name.as_deref().and_then(|name| gazetteer.lookup(name)) {
        return Some(point);
    }
    stop.id
        .as_ref()
        .and_then(RawId::as_text)
        .and_then(|id| gazetteer.lookup(&id))
}

/// Whether two boundary stops may be the same physical stop. Conflicting
/// identities rule adjacency out; a missing identity on either side does
/// not, because consecutive segments share their junction structurally.
fn identities_compatible(a: &Option<String>, b: &Option<String>) -> bool {
    match (a, b) {
        (Some(x), Some(y)) => x == y,
        _ => true,
    }
}

/// Resolve a route-level place (origin or destination city): embedded
/// coordinate first, then gazetteer by name, then by id.
pub(crate) fn resolve_place(
    place: Option<&RawPlace>,
    gazetteer: &Gazetteer,
    config: &AssembleConfig,
) -> Option<GeoPoint> {
    let place = place?;
    if let Some(point) = place
        .coordinate()
        .and_then(|c| resolve_coordinate(c, config.axis_default))
    {
        return Some(point);
    }
    if let Some(point) = place.display_name().and_then(|name| gazetteer.lookup(name)) {
        return Some(point);
    }
    place.id_text().and_then(|id| gazetteer.lookup(&id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(json: &str) -> RawStopDescriptor {
        serde_json::from_str(json).unwrap()
    }

    fn p(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn empty_gazetteer() -> Gazetteer {
        Gazetteer::from_entries(std::iter::empty::<(&str, GeoPoint)>())
    }

    #[test]
    fn own_coordinate_beats_everything() {
        let s = stop(r#"{"name": "Якутск", "coordinate": {"latitude": 1.0, "longitude": 2.0}}"#);
        let ctx = BoundaryContext {
            route_origin: Some(p(9.0, 9.0)),
            is_first: true,
            ..Default::default()
        };
        let got = resolve_boundary(
            Some(&s),
            Boundary::From,
            &ctx,
            &Gazetteer::builtin(),
            &AssembleConfig::default(),
        )
        .unwrap();
        assert_eq!(got, p(1.0, 2.0));
    }

    #[test]
    fn route_origin_applies_only_to_the_first_from() {
        let s = stop(r#"{"name": "nowhere special"}"#);
        let origin = p(62.0, 129.7);

        let first = BoundaryContext {
            route_origin: Some(origin),
            is_first: true,
            ..Default::default()
        };
        let got = resolve_boundary(
            Some(&s),
            Boundary::From,
            &first,
            &empty_gazetteer(),
            &AssembleConfig::default(),
        );
        assert_eq!(got, Some(origin));

        let middle = BoundaryContext {
            route_origin: Some(origin),
            is_first: false,
            ..Default::default()
        };
        let got = resolve_boundary(
            Some(&s),
            Boundary::From,
            &middle,
            &empty_gazetteer(),
            &AssembleConfig::default(),
        );
        assert_eq!(got, None);
    }

    #[test]
    fn adjacency_borrows_the_previous_segments_to() {
        let s = stop(r#"{"id": "B"}"#);
        let shared = p(62.5353, 113.9611);
        let ctx = BoundaryContext {
            previous_to: Some((Some("B".to_string()), shared)),
            ..Default::default()
        };
        let got = resolve_boundary(
            Some(&s),
            Boundary::From,
            &ctx,
            &empty_gazetteer(),
            &AssembleConfig::default(),
        );
        assert_eq!(got, Some(shared));
    }

    #[test]
    fn adjacency_is_skipped_when_identities_conflict() {
        let s = stop(r#"{"id": "B"}"#);
        let ctx = BoundaryContext {
            previous_to: Some((Some("X".to_string()), p(1.0, 1.0))),
            ..Default::default()
        };
        let got = resolve_boundary(
            Some(&s),
            Boundary::From,
            &ctx,
            &empty_gazetteer(),
            &AssembleConfig::default(),
        );
        assert_eq!(got, None);
    }

    #[test]
    fn to_boundary_borrows_the_next_segments_embedded_from() {
        let s = stop(r#"{"id": "B"}"#);
        let next = stop(r#"{"id": "B", "coords": {"lat": 62.5353, "lon": 113.9611}}"#);
        let ctx = BoundaryContext {
            next_from: Some(&next),
            ..Default::default()
        };
        let got = resolve_boundary(
            Some(&s),
            Boundary::To,
            &ctx,
            &empty_gazetteer(),
            &AssembleConfig::default(),
        );
        assert_eq!(got, Some(p(62.5353, 113.9611)));
    }

    #[test]
    fn to_boundary_resolves_the_next_from_through_the_gazetteer() {
        let s = stop(r#"{"id": "B"}"#);
        let next = stop(r#"{"id": "B", "name": "Тикси"}"#);
        let ctx = BoundaryContext {
            next_from: Some(&next),
            ..Default::default()
        };
        let got = resolve_boundary(
            Some(&s),
            Boundary::To,
            &ctx,
            &Gazetteer::builtin(),
            &AssembleConfig::default(),
        );
        assert_eq!(got, Some(p(71.6366, 128.8685)));
    }

    #[test]
    fn gazetteer_is_the_last_resort() {
        let s = stop(r#"{"name": "Тикси"}"#);
        let got = resolve_boundary(
            Some(&s),
            Boundary::From,
            &BoundaryContext::default(),
            &Gazetteer::builtin(),
            &AssembleConfig::default(),
        )
        .unwrap();
        assert_eq!(got, p(71.6366, 128.8685));
    }

    #[test]
    fn gazetteer_falls_back_to_the_id() {
        let s = stop(r#"{"id": "Тикси"}"#);
        let got = resolve_boundary(
            Some(&s),
            Boundary::From,
            &BoundaryContext::default(),
            &Gazetteer::builtin(),
            &AssembleConfig::default(),
        );
        assert!(got.is_some());
    }

    #[test]
    fn everything_exhausted_is_none() {
        let s = stop(r#"{"id": "???", "name": "Atlantis"}"#);
        let got = resolve_boundary(
            Some(&s),
            Boundary::To,
            &BoundaryContext::default(),
            &Gazetteer::builtin(),
            &AssembleConfig::default(),
        );
        assert_eq!(got, None);

        let got = resolve_boundary(
            None,
            Boundary::From,
            &BoundaryContext::default(),
            &Gazetteer::builtin(),
            &AssembleConfig::default(),
        );
        assert_eq!(got, None);
    }

    #[test]
    fn place_resolution_prefers_embedded_coordinates() {
        let place: RawPlace =
            serde_json::from_str(r#"{"name": "Якутск", "coordinate": [10.0, 20.0]}"#).unwrap();
        let got = resolve_place(Some(&place), &Gazetteer::builtin(), &AssembleConfig::default());
        assert_eq!(got, Some(p(10.0, 20.0)));

        let bare: RawPlace = serde_json::from_str(r#""Якутск""#).unwrap();
        let got = resolve_place(Some(&bare), &Gazetteer::builtin(), &AssembleConfig::default());
        assert_eq!(got, Some(p(62.0355, 129.6755)));
    }
}
