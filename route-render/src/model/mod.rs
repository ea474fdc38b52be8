//! Validated output domain for the rendering collaborator.
//!
//! Everything in this module is valid by construction: a
//! [`RenderableSegment`] always has both endpoints resolved, a
//! [`RouteRenderModel`]'s bounds always cover its coordinates, and
//! [`TransportMode::Unknown`] is a renderable value rather than an error.
//! The whole model serializes to JSON for whichever map widget consumes it.

mod diagnostic;
mod error;
mod mode;
mod route;
mod segment;
mod stop;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use error::AssembleError;
pub use mode::TransportMode;
pub use route::RouteRenderModel;
pub use segment::{RenderableSegment, SegmentMeta};
pub use stop::ResolvedStop;
