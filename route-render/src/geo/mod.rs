//! Geographic primitives: the validated coordinate type and bounding-box
//! accumulation.
//!
//! Everything downstream of the raw-input layer works exclusively in
//! [`GeoPoint`] values, so code that receives one can trust its validity.

mod bounds;
mod point;

pub use bounds::{BoundingBox, BoundsAccumulator, FALLBACK_BOUNDS};
pub use point::{GeoPoint, InvalidPoint};
