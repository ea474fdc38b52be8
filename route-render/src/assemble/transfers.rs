//! Transfer detection at segment boundaries.
//!
//! A boundary stop is an interchange when the traveller changes vehicle
//! there, which is a purely positional fact: the stop closes one segment
//! and opens the next. No state machine, just adjacency comparison.

use crate::raw::{RawId, RawSegmentDescriptor, RawStopDescriptor};

/// Which end of a segment a stop sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    From,
    To,
}

/// Stop identity used for adjacency and transfer comparison: the id when
/// present, else the case-folded name. A stop with neither has no
/// identity and never compares equal.
pub(crate) fn stop_identity(stop: Option<&RawStopDescriptor>) -> Option<String> {
    let stop = stop?;
    if let Some(id) = stop.id.as_ref().and_then(RawId::as_text) {
        return Some(id);
    }
    let name = stop.name.as_deref()?.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_lowercase())
    }
}

/// Whether the boundary stop of `segments[index]` is a transfer.
///
/// True iff the boundary is not the route's very first "from" nor its very
/// last "to", and the stop's identity equals the identity at the matching
/// boundary of the adjacent segment.
pub fn is_transfer(segments: &[RawSegmentDescriptor], index: usize, boundary: Boundary) -> bool {
    let Some(segment) = segments.get(index) else {
        return false;
    };
    match boundary {
        Boundary::From => {
            if index == 0 {
                return false;
            }
            identities_equal(
                stop_identity(segment.from.as_ref()),
                stop_identity(segments[index - 1].to.as_ref()),
            )
        }
        Boundary::To => {
            if index + 1 >= segments.len() {
                return false;
            }
            identities_equal(
                stop_identity(segment.to.as_ref()),
                stop_identity(segments[index + 1].from.as_ref()),
            )
        }
    }
}

fn identities_equal(a: Option<String>, b: Option<String>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}
