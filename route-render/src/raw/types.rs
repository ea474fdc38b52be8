//! Raw itinerary DTOs from the upstream route builder.
//!
//! These types map the route builder's JSON output, which is heterogeneous
//! and frequently incomplete. They use `Option` liberally and tolerate
//! unexpected shapes with untagged enums and raw `serde_json::Value`
//! fields: no individual field is ever assumed to exist or to have the
//! shape the producer usually sends.

use serde::Deserialize;
use serde_json::Value;

/// The untrusted route description handed to the pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRouteDescriptor {
    /// Route identifier, if the producer assigned one.
    #[serde(alias = "routeId")]
    pub id: Option<RawId>,

    /// Overall origin city: a structured place or a bare name.
    pub from_city: Option<RawPlace>,

    /// Overall destination city: a structured place or a bare name.
    pub to_city: Option<RawPlace>,

    /// Ordered segment list. `None` here is a contract violation, not a
    /// data-quality problem; the assembler fails loudly on it.
    pub segments: Option<Vec<RawSegmentDescriptor>>,
}

/// One leg of the itinerary, as the producer describes it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSegmentDescriptor {
    /// Segment identifier. Producers disagree about the field name.
    #[serde(alias = "segmentId")]
    pub id: Option<RawId>,

    /// Primary transport-mode tag.
    #[serde(alias = "transport")]
    pub transport_type: Option<String>,

    /// Alternate mode tag some producers send instead.
    pub mode: Option<String>,

    /// Boarding stop.
    pub from: Option<RawStopDescriptor>,

    /// Alighting stop.
    pub to: Option<RawStopDescriptor>,

    /// Path geometry: a bare array of coordinate pairs, an object wrapping
    /// a `coordinates` array, or junk.
    #[serde(alias = "path", alias = "polyline")]
    pub geometry: Option<RawGeometry>,

    /// Distance in kilometres. Kept raw; producers send numbers or strings.
    #[serde(alias = "distance")]
    pub distance_km: Option<Value>,

    /// Duration in minutes. Kept raw for the same reason.
    #[serde(alias = "duration")]
    pub duration_minutes: Option<Value>,

    /// Price information, passed through untouched.
    pub price: Option<Value>,

    /// Scheduled departure, passed through as sent.
    pub departure: Option<Value>,

    /// Scheduled arrival, passed through as sent.
    pub arrival: Option<Value>,

    /// Service frequency description (e.g. "daily"), passed through.
    pub frequency: Option<Value>,

    /// Intermediate hubs an indirect segment routes through.
    pub via_hubs: Option<Vec<RawHub>>,

    /// Upstream risk/validation annotations, passed through untouched.
    #[serde(alias = "warnings")]
    pub risk: Option<Value>,
}

/// A stop at a segment boundary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStopDescriptor {
    /// Stop identifier (string or number depending on the producer).
    #[serde(alias = "stopId")]
    pub id: Option<RawId>,

    /// Display name.
    pub name: Option<String>,

    /// Free-form stop-kind string ("airport", "аэропорт", "ж/д вокзал", ...).
    #[serde(alias = "type", alias = "kind")]
    pub stop_type: Option<String>,

    /// Whether this stop is a major interchange hub.
    #[serde(alias = "hub")]
    pub is_hub: Option<bool>,

    /// Embedded coordinate, in any of the supported shapes.
    #[serde(alias = "coords", alias = "coordinates", alias = "location")]
    pub coordinate: Option<RawCoordinate>,
}

/// A place reference: structured object or bare name.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPlace {
    /// `{ "id": ..., "name": ..., "coordinate": ... }`
    Detailed(RawPlaceDetails),
    /// A bare name string like `"Якутск"`.
    Name(String),
    /// Anything else the producer sent; treated as an unnamed place.
    Other(Value),
}

impl RawPlace {
    /// Display name, if one can be read from this shape.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            RawPlace::Detailed(d) => d.name.as_deref(),
            RawPlace::Name(s) => Some(s.as_str()),
            RawPlace::Other(_) => None,
        }
    }

    /// Identifier text, if this shape carries one.
    pub fn id_text(&self) -> Option<String> {
        match self {
            RawPlace::Detailed(d) => d.id.as_ref().and_then(RawId::as_text),
            _ => None,
        }
    }

    /// Embedded coordinate, if this shape carries one.
    pub fn coordinate(&self) -> Option<&RawCoordinate> {
        match self {
            RawPlace::Detailed(d) => d.coordinate.as_ref(),
            _ => None,
        }
    }
}

/// The structured form of a place reference.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlaceDetails {
    pub id: Option<RawId>,
    pub name: Option<String>,
    #[serde(alias = "coords", alias = "coordinates", alias = "location")]
    pub coordinate: Option<RawCoordinate>,
}

/// An identifier that may arrive as a string or a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(i64),
    Other(Value),
}

impl RawId {
    /// Canonical text form of the identifier, if it has one.
    pub fn as_text(&self) -> Option<String> {
        match self {
            RawId::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            RawId::Number(n) => Some(n.to_string()),
            RawId::Other(_) => None,
        }
    }
}

/// A coordinate value in any of the shapes producers send.
///
/// `Pair` must stay ahead of `Object`: serde will deserialize a struct
/// from a two-element JSON sequence positionally, so the other order
/// would capture bare pairs as labelled objects.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawCoordinate {
    /// A bare pair like `[62.0, 129.7]`: axis order is ambiguous.
    Pair(Vec<Value>),
    /// `{ "latitude": ..., "longitude": ... }`: axis order is unambiguous.
    Object(RawCoordinateFields),
    /// Anything else; never resolves.
    Other(Value),
}

/// Fields of the labelled coordinate-object shape. The values stay raw
/// because producers occasionally send numeric strings or null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCoordinateFields {
    #[serde(alias = "lat")]
    pub latitude: Option<Value>,
    #[serde(alias = "lon", alias = "lng")]
    pub longitude: Option<Value>,
}

/// A path-geometry payload. As with [`RawCoordinate`], the sequence
/// shape is tried before the struct shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawGeometry {
    /// A bare array of coordinate pairs (elements stay raw; some may be junk).
    Points(Vec<Value>),
    /// An object wrapping the point array, GeoJSON-style.
    Wrapped(RawGeometryObject),
    /// Anything else; yields no geometry.
    Other(Value),
}

impl RawGeometry {
    /// The raw point list, regardless of wrapping.
    pub fn points(&self) -> &[Value] {
        match self {
            RawGeometry::Wrapped(obj) => obj.coordinates.as_deref().unwrap_or(&[]),
            RawGeometry::Points(points) => points,
            RawGeometry::Other(_) => &[],
        }
    }
}

/// The wrapped-object geometry shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGeometryObject {
    #[serde(alias = "points")]
    pub coordinates: Option<Vec<Value>>,
}

/// A via-hub marker: a bare name or a structured stop-like object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawHub {
    Name(String),
    Detailed(RawPlaceDetails),
    Other(Value),
}

impl RawHub {
    /// Display string for the hub, if one can be read.
    pub fn display_name(&self) -> Option<String> {
        match self {
            RawHub::Name(s) => Some(s.clone()),
            RawHub::Detailed(d) => d
                .name
                .clone()
                .or_else(|| d.id.as_ref().and_then(RawId::as_text)),
            RawHub::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_structured_place() {
        let json = r#"{"fromCity": {"id": 7, "name": "Якутск",
                        "coordinate": {"latitude": 62.0355, "longitude": 129.6755}},
                       "segments": []}"#;
        let raw: RawRouteDescriptor = serde_json::from_str(json).unwrap();
        let from = raw.from_city.unwrap();
        assert_eq!(from.display_name(), Some("Якутск"));
        assert_eq!(from.id_text(), Some("7".to_string()));
        assert!(from.coordinate().is_some());
    }

    #[test]
    fn deserializes_bare_name_place() {
        let json = r#"{"toCity": "Мирный", "segments": []}"#;
        let raw: RawRouteDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(raw.to_city.unwrap().display_name(), Some("Мирный"));
    }

    #[test]
    fn tolerates_unexpected_place_shape() {
        let json = r#"{"fromCity": 42, "segments": []}"#;
        let raw: RawRouteDescriptor = serde_json::from_str(json).unwrap();
        assert!(raw.from_city.unwrap().display_name().is_none());
    }

    #[test]
    fn coordinate_shapes() {
        let object: RawCoordinate =
            serde_json::from_str(r#"{"lat": 62.0, "lon": 129.7}"#).unwrap();
        assert!(matches!(object, RawCoordinate::Object(_)));

        // Must be Pair, not Object read positionally: downstream axis-order
        // detection needs to know the pair was unlabelled.
        let pair: RawCoordinate = serde_json::from_str("[62.0, 129.7]").unwrap();
        match &pair {
            RawCoordinate::Pair(values) => {
                assert_eq!(values.as_slice(), &[Value::from(62.0), Value::from(129.7)]);
            }
            other => panic!("bare pair deserialized as {other:?}"),
        }

        let junk: RawCoordinate = serde_json::from_str(r#""nowhere""#).unwrap();
        assert!(matches!(junk, RawCoordinate::Other(_)));
    }

    #[test]
    fn geometry_shapes_expose_the_same_point_list() {
        let bare: RawGeometry =
            serde_json::from_str("[[129.7, 62.0], [37.6, 55.7]]").unwrap();
        let wrapped: RawGeometry =
            serde_json::from_str(r#"{"coordinates": [[129.7, 62.0], [37.6, 55.7]]}"#).unwrap();
        assert_eq!(bare.points().len(), 2);
        assert_eq!(wrapped.points().len(), 2);

        let junk: RawGeometry = serde_json::from_str(r#""M0,0 L1,1""#).unwrap();
        assert!(junk.points().is_empty());
    }

    #[test]
    fn segment_field_aliases() {
        let json = r#"{"segmentId": "s1", "transport": "AIR",
                       "path": [[1.0, 2.0], [3.0, 4.0]]}"#;
        let seg: RawSegmentDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(seg.id.unwrap().as_text(), Some("s1".to_string()));
        assert_eq!(seg.transport_type.as_deref(), Some("AIR"));
        assert!(seg.geometry.is_some());
    }

    #[test]
    fn raw_id_text_forms() {
        assert_eq!(
            RawId::Text("stop-9".into()).as_text(),
            Some("stop-9".to_string())
        );
        assert_eq!(RawId::Text("  ".into()).as_text(), None);
        assert_eq!(RawId::Number(42).as_text(), Some("42".to_string()));
        assert_eq!(RawId::Other(Value::Null).as_text(), None);
    }

    #[test]
    fn missing_segment_list_stays_none() {
        let raw: RawRouteDescriptor = serde_json::from_str("{}").unwrap();
        assert!(raw.segments.is_none());

        let raw: RawRouteDescriptor =
            serde_json::from_str(r#"{"segments": null}"#).unwrap();
        assert!(raw.segments.is_none());
    }
}
