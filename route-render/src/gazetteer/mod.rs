//! Static place-name → coordinate lookup.
//!
//! The gazetteer is the last-resort fallback when a stop carries no
//! coordinate of its own and none can be borrowed from route boundaries
//! or adjacent segments. It is built once and never mutated, so it can be
//! shared freely across concurrent pipeline invocations.

use std::collections::HashMap;

use crate::geo::GeoPoint;

mod data;

/// Minimum query length for the substring-containment step. Shorter
/// queries would match half the table.
const MIN_SUBSTRING_LEN: usize = 3;

/// Read-only name/id → coordinate table.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    exact: HashMap<String, GeoPoint>,
    entries: Vec<(String, GeoPoint)>,
}

impl Gazetteer {
    /// Build the gazetteer from the built-in place table.
    pub fn builtin() -> Self {
        Self::from_entries(
            data::PLACES
                .iter()
                .filter_map(|&(name, lat, lon)| GeoPoint::new(lat, lon).ok().map(|p| (name, p))),
        )
    }

    /// Build a gazetteer from arbitrary entries (used by tests and by
    /// callers with their own reference data).
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, GeoPoint)>,
    {
        let entries: Vec<(String, GeoPoint)> = entries
            .into_iter()
            .map(|(name, p)| (name.trim().to_lowercase(), p))
            .filter(|(name, _)| !name.is_empty())
            .collect();
        let exact = entries.iter().cloned().collect();
        Self { exact, entries }
    }

    /// Look up a place by name or id.
    ///
    /// Matching is case-insensitive: exact match first, then substring
    /// containment in either direction ("Якутск" matches "г. Якутск" and
    /// vice versa). Returns `None` for empty or too-short queries that
    /// found no exact entry.
    pub fn lookup(&self, query: &str) -> Option<GeoPoint> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        if let Some(&point) = self.exact.get(&needle) {
            return Some(point);
        }
        if needle.chars().count() < MIN_SUBSTRING_LEN {
            return None;
        }
        self.entries
            .iter()
            .find(|(key, _)| key.contains(&needle) || needle.contains(key.as_str()))
            .map(|&(_, point)| point)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_case_insensitive() {
        let g = Gazetteer::builtin();
        let a = g.lookup("Якутск").unwrap();
        let b = g.lookup("якутск").unwrap();
        let c = g.lookup("YAKUTSK").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.lat(), 62.0355);
    }

    #[test]
    fn substring_matches_both_directions() {
        let g = Gazetteer::builtin();
        // Query contains the table key.
        assert!(g.lookup("г. Якутск (центр)").is_some());
        // Table key contains the query.
        assert!(g.lookup("колымск").is_some());
    }

    #[test]
    fn short_queries_only_match_exactly() {
        let g = Gazetteer::from_entries([
            ("uk", GeoPoint::new(51.5, -0.1).unwrap()),
            ("yakutsk", GeoPoint::new(62.0355, 129.6755).unwrap()),
        ]);
        assert!(g.lookup("uk").is_some()); // exact still works
        assert!(g.lookup("ya").is_none()); // too short for substring
    }

    #[test]
    fn misses_return_none() {
        let g = Gazetteer::builtin();
        assert!(g.lookup("Atlantis").is_none());
        assert!(g.lookup("").is_none());
        assert!(g.lookup("   ").is_none());
    }

    #[test]
    fn builtin_table_is_populated() {
        let g = Gazetteer::builtin();
        assert!(!g.is_empty());
        assert!(g.len() > 50);
    }
}
