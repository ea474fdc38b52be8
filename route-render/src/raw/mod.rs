//! Untrusted input layer: DTOs for the upstream route builder's JSON.

mod types;

pub use types::{
    RawCoordinate, RawCoordinateFields, RawGeometry, RawGeometryObject, RawHub, RawId, RawPlace,
    RawPlaceDetails, RawRouteDescriptor, RawSegmentDescriptor, RawStopDescriptor,
};
