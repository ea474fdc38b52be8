//! Bounding-box accumulation for rendered routes.

use serde::Serialize;

use super::point::GeoPoint;

/// Geographic region the built-in gazetteer covers: the Sakha Republic and
/// its Lena-basin travel corridor. Used as the bounding box of an empty
/// route model so the map widget always has a region to frame.
pub const FALLBACK_BOUNDS: BoundingBox = BoundingBox {
    south: 55.0,
    north: 74.0,
    west: 105.0,
    east: 163.0,
};

/// The minimal rectangle covering a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl BoundingBox {
    /// Whether the box contains the point (inclusive on all edges).
    pub fn contains(&self, p: GeoPoint) -> bool {
        p.lat() >= self.south && p.lat() <= self.north && p.lon() >= self.west && p.lon() <= self.east
    }
}

/// Running min/max accumulator over resolved points.
///
/// Allocated fresh per pipeline invocation; `finish` yields
/// [`FALLBACK_BOUNDS`] when no point was ever added.
#[derive(Debug, Default)]
pub struct BoundsAccumulator {
    current: Option<BoundingBox>,
}

impl BoundsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the box to cover `p`.
    pub fn add(&mut self, p: GeoPoint) {
        match &mut self.current {
            Some(b) => {
                b.south = b.south.min(p.lat());
                b.north = b.north.max(p.lat());
                b.west = b.west.min(p.lon());
                b.east = b.east.max(p.lon());
            }
            None => {
                self.current = Some(BoundingBox {
                    south: p.lat(),
                    north: p.lat(),
                    west: p.lon(),
                    east: p.lon(),
                });
            }
        }
    }

    /// The accumulated box, or the static fallback region if empty.
    pub fn finish(self) -> BoundingBox {
        self.current.unwrap_or(FALLBACK_BOUNDS)
    }
}
