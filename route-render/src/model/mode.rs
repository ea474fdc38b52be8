//! Transport mode tags.

use std::fmt;

use serde::Serialize;

/// The closed set of transport modes the renderer knows how to draw.
///
/// `Unknown` is a first-class renderable value (drawn as a generic line),
/// not an error: the classifier never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Airplane,
    Train,
    Bus,
    Ferry,
    Taxi,
    WinterRoad,
    Unknown,
}

/// Recognized mode tags, lowercase. Producers mix English, Russian and
/// casing freely; the table covers the synonyms seen in the wild.
const TAG_SYNONYMS: &[(&str, TransportMode)] = &[
    ("air", TransportMode::Airplane),
    ("airplane", TransportMode::Airplane),
    ("avia", TransportMode::Airplane),
    ("plane", TransportMode::Airplane),
    ("flight", TransportMode::Airplane),
    ("авиа", TransportMode::Airplane),
    ("самолет", TransportMode::Airplane),
    ("самолёт", TransportMode::Airplane),
    ("train", TransportMode::Train),
    ("rail", TransportMode::Train),
    ("railway", TransportMode::Train),
    ("suburban", TransportMode::Train),
    ("поезд", TransportMode::Train),
    ("жд", TransportMode::Train),
    ("электричка", TransportMode::Train),
    ("bus", TransportMode::Bus),
    ("coach", TransportMode::Bus),
    ("shuttle", TransportMode::Bus),
    ("автобус", TransportMode::Bus),
    ("маршрутка", TransportMode::Bus),
    ("ferry", TransportMode::Ferry),
    ("ship", TransportMode::Ferry),
    ("boat", TransportMode::Ferry),
    ("water", TransportMode::Ferry),
    ("паром", TransportMode::Ferry),
    ("теплоход", TransportMode::Ferry),
    ("taxi", TransportMode::Taxi),
    ("car", TransportMode::Taxi),
    ("такси", TransportMode::Taxi),
    ("winter_road", TransportMode::WinterRoad),
    ("winter-road", TransportMode::WinterRoad),
    ("winterroad", TransportMode::WinterRoad),
    ("winter", TransportMode::WinterRoad),
    ("зимник", TransportMode::WinterRoad),
    ("unknown", TransportMode::Unknown),
];

impl TransportMode {
    /// Parse a producer mode tag (case-insensitive exact match against the
    /// synonym table). Returns `None` for unrecognized tags so callers can
    /// fall through to the next classification step.
    pub fn parse_tag(tag: &str) -> Option<Self> {
        let needle = tag.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        TAG_SYNONYMS
            .iter()
            .find(|(syn, _)| *syn == needle)
            .map(|&(_, mode)| mode)
    }

    /// Stable snake_case tag, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Airplane => "airplane",
            TransportMode::Train => "train",
            TransportMode::Bus => "bus",
            TransportMode::Ferry => "ferry",
            TransportMode::Taxi => "taxi",
            TransportMode::WinterRoad => "winter_road",
            TransportMode::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
