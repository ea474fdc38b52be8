//! Route-geometry normalization pipeline.
//!
//! Takes the heterogeneous, frequently incomplete multi-modal itinerary
//! description produced by the upstream route builder and turns it into a
//! structurally valid, renderable map model: validated coordinates at
//! every segment boundary, axis-disambiguated polylines, classified
//! transport modes, transfer flags and a covering bounding box. Bad data
//! degrades into per-segment diagnostics instead of failures.
//!
//! ```
//! use route_render::assemble::RouteAssembler;
//! use route_render::names::StopNameCache;
//! use route_render::raw::RawRouteDescriptor;
//!
//! let raw: RawRouteDescriptor = serde_json::from_str(
//!     r#"{
//!         "fromCity": "Якутск",
//!         "toCity": "Мирный",
//!         "segments": [{
//!             "transportType": "air",
//!             "from": {"name": "Якутск", "coords": {"lat": 62.0355, "lon": 129.6755}},
//!             "to": {"name": "Мирный", "coords": {"lat": 62.5353, "lon": 113.9611}}
//!         }]
//!     }"#,
//! )
//! .unwrap();
//!
//! let assembler = RouteAssembler::builtin();
//! let mut names = StopNameCache::new();
//! let assembled = assembler.assemble(&raw, &mut names).unwrap();
//! assert_eq!(assembled.model.segments.len(), 1);
//! assert!(assembled.diagnostics.is_empty());
//! ```

pub mod assemble;
pub mod gazetteer;
pub mod geo;
pub mod model;
pub mod names;
pub mod raw;
