//! Resolved stop type.

use serde::Serialize;

use crate::geo::GeoPoint;

/// A segment boundary stop with a guaranteed coordinate.
///
/// Created once per boundary during assembly and immutable thereafter.
/// Segments whose boundaries cannot all be resolved to a `ResolvedStop`
/// are never emitted, so any stop the renderer sees has a real position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedStop {
    /// Canonical identifier, if the producer supplied one.
    pub id: Option<String>,

    /// Display name. Falls back to the cached name for this id, then to
    /// the id itself, when the producer sent no name.
    pub name: String,

    /// Free-form stop-kind string as sent by the producer.
    pub kind: Option<String>,

    /// Whether this stop is a major interchange hub.
    pub is_hub: bool,

    /// Resolved position.
    pub point: GeoPoint,

    /// Whether this stop is shared with the adjacent segment (a change of
    /// vehicle happens here).
    pub is_transfer: bool,
}
