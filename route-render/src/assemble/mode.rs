//! Transport mode classification.
//!
//! Producers tag segments inconsistently: some send a `transportType`,
//! some a `mode`, some nothing at all. Classification never fails; every
//! signal miss falls through to the next step, ending at
//! [`TransportMode::Unknown`].

use crate::model::TransportMode;
use crate::raw::RawSegmentDescriptor;

/// One way of reading a mode tag off the raw segment. New producer quirks
/// are handled by extending [`TAG_ACCESSORS`], not by editing control flow.
type TagAccessor = for<'a> fn(&'a RawSegmentDescriptor) -> Option<&'a str>;

fn primary_tag(segment: &RawSegmentDescriptor) -> Option<&str> {
    segment.transport_type.as_deref()
}

fn alternate_tag(segment: &RawSegmentDescriptor) -> Option<&str> {
    segment.mode.as_deref()
}

/// Mode-tag accessors in trust order.
const TAG_ACCESSORS: &[TagAccessor] = &[primary_tag, alternate_tag];

/// Stop-kind keywords, lowercase, in match order. Order matters twice:
/// airplane before ferry because "airport" contains "port", and bus
/// before train because "автостанция" contains "станция".
const KIND_KEYWORDS: &[(&str, TransportMode)] = &[
    ("аэропорт", TransportMode::Airplane),
    ("аэродром", TransportMode::Airplane),
    ("airport", TransportMode::Airplane),
    ("airfield", TransportMode::Airplane),
    ("автовокзал", TransportMode::Bus),
    ("автостанция", TransportMode::Bus),
    ("bus", TransportMode::Bus),
    ("coach", TransportMode::Bus),
    ("вокзал", TransportMode::Train),
    ("станция", TransportMode::Train),
    ("платформа", TransportMode::Train),
    ("жд", TransportMode::Train),
    ("ж/д", TransportMode::Train),
    ("railway", TransportMode::Train),
    ("rail", TransportMode::Train),
    ("station", TransportMode::Train),
    ("причал", TransportMode::Ferry),
    ("пристань", TransportMode::Ferry),
    ("паром", TransportMode::Ferry),
    ("речной", TransportMode::Ferry),
    ("ferry", TransportMode::Ferry),
    ("pier", TransportMode::Ferry),
    ("порт", TransportMode::Ferry),
    ("port", TransportMode::Ferry),
    ("такси", TransportMode::Taxi),
    ("taxi", TransportMode::Taxi),
    ("зимник", TransportMode::WinterRoad),
    ("winter road", TransportMode::WinterRoad),
];

/// Derive a transport mode for the segment. Never fails.
///
/// Attempts, in order: the mode-tag accessors; stop-kind keyword matching
/// on both boundary stops; "via hubs present" (indirect segments without
/// any other signal are flights); else `Unknown`.
pub fn classify(segment: &RawSegmentDescriptor) -> TransportMode {
    for accessor in TAG_ACCESSORS {
        if let Some(mode) = accessor(segment).and_then(TransportMode::parse_tag) {
            return mode;
        }
    }

    let kinds: Vec<String> = [segment.from.as_ref(), segment.to.as_ref()]
        .into_iter()
        .flatten()
        .filter_map(|stop| stop.stop_type.as_deref())
        .map(str::to_lowercase)
        .collect();
    for &(keyword, mode) in KIND_KEYWORDS {
        if kinds.iter().any(|kind| kind.contains(keyword)) {
            return mode;
        }
    }

    if segment.via_hubs.as_ref().is_some_and(|hubs| !hubs.is_empty()) {
        return TransportMode::Airplane;
    }

    TransportMode::Unknown
}
