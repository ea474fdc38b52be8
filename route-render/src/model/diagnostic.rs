//! Per-segment diagnostics.
//!
//! Diagnostics record data-quality degradation (a skipped segment, a
//! discarded geometry) without failing the pipeline. They are produced
//! fresh per invocation and handed to the caller for logging; nothing
//! here is persisted.

use std::fmt;

use serde::Serialize;

/// What went wrong with a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A boundary stop had no coordinate after exhausting every fallback;
    /// the segment was dropped.
    EndpointUnresolved,
    /// The geometry payload yielded fewer than two valid points; the
    /// segment was kept without a polyline.
    GeometryDiscarded,
}

/// One recorded degradation event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// Index of the segment in the raw input list.
    pub segment_index: usize,

    /// Segment id, or the synthesized positional placeholder.
    pub segment_id: String,

    /// Machine-readable category.
    pub kind: DiagnosticKind,

    /// Human-readable detail for logs.
    pub detail: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "segment {} ({}): {}",
            self.segment_index, self.segment_id, self.detail
        )
    }
}
