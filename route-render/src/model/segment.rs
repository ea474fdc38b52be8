//! Renderable segment type.

use serde::Serialize;
use serde_json::Value;

use crate::geo::GeoPoint;

use super::mode::TransportMode;
use super::stop::ResolvedStop;

/// Pass-through metadata the renderer shows in segment popups.
///
/// Numeric fields are coerced where the producer sent a clean number or
/// numeric string; everything else passes through as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SegmentMeta {
    pub distance_km: Option<f64>,
    pub duration_minutes: Option<f64>,
    pub price: Option<Value>,
    pub departure: Option<String>,
    pub arrival: Option<String>,
    pub frequency: Option<String>,
}

/// One fully normalized leg of the route, ready to draw.
///
/// # Invariants
///
/// - Both endpoints are resolved; a segment with an unresolved boundary
///   is dropped during assembly, never emitted.
/// - `polyline` is `Some` only when at least two valid, axis-disambiguated
///   points survived extraction. When `None`, the renderer draws a straight
///   line between the endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct RenderableSegment {
    /// Segment id, or a positional placeholder like `seg-2`.
    pub id: String,

    /// Classified transport mode (`unknown` when no signal was found).
    pub mode: TransportMode,

    /// Boarding stop.
    pub from: ResolvedStop,

    /// Alighting stop.
    pub to: ResolvedStop,

    /// Ordered path geometry, if a usable one was extracted.
    pub polyline: Option<Vec<GeoPoint>>,

    /// Popup metadata.
    pub meta: SegmentMeta,

    /// Display names of intermediate hubs this segment routes through.
    pub via_hubs: Vec<String>,

    /// Upstream risk/validation annotations, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Value>,
}
