//! The normalization pipeline.
//!
//! A single synchronous pass over the raw segment list: resolve both
//! boundary coordinates of every segment (or skip it with a diagnostic),
//! classify its transport mode, extract and axis-disambiguate its path
//! geometry, flag transfer stops, and accumulate the bounding box. The
//! pass has no I/O and allocates all working state fresh per call.

mod assembler;
mod config;
mod coords;
mod endpoints;
mod geometry;
mod mode;
mod transfers;


pub use assembler::{AssembledRoute, RouteAssembler};
pub use config::AssembleConfig;
pub use coords::{AxisOrder, point_from_parts, resolve_coordinate};
pub use geometry::detect_axis_order;
pub use mode::classify;
pub use transfers::{Boundary, is_transfer};
