//! The assembled route model.

use serde::Serialize;

use crate::geo::BoundingBox;

use super::segment::RenderableSegment;

/// The structurally valid map model produced by one pipeline invocation.
///
/// # Invariants
///
/// - `bounds` covers every coordinate appearing in any segment (endpoints
///   and polylines alike).
/// - When `segments` is empty, `bounds` is the static fallback region
///   ([`crate::geo::FALLBACK_BOUNDS`]), so callers can always frame a map
///   without special-casing a malformed model.
#[derive(Debug, Clone, Serialize)]
pub struct RouteRenderModel {
    /// Route id, or one synthesized from the origin/destination names.
    pub id: String,

    /// Ordered renderable segments. May be empty.
    pub segments: Vec<RenderableSegment>,

    /// Minimal rectangle covering the whole route.
    pub bounds: BoundingBox,
}
