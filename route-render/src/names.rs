//! Caller-owned stop display-name cache.
//!
//! Upstream segment lists often carry a stop's name on only one of the
//! segments that reference it. The cache remembers id → name pairings so
//! id-only references elsewhere in the route (or in later invocations, if
//! the caller keeps the cache around) still get a display name. It is an
//! explicit value passed into the pipeline, never process-global state,
//! so invocations stay independent and testable.

use std::collections::HashMap;

/// Mutable id → display-name map owned by the caller.
#[derive(Debug, Clone, Default)]
pub struct StopNameCache {
    names: HashMap<String, String>,
}

impl StopNameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember a name for a stop id. Later recordings win, matching the
    /// upstream behaviour of freshest-data-last.
    pub fn record(&mut self, id: &str, name: &str) {
        let id = id.trim();
        let name = name.trim();
        if id.is_empty() || name.is_empty() {
            return;
        }
        self.names.insert(id.to_string(), name.to_string());
    }

    /// Cached display name for a stop id.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.names.get(id.trim()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_retrieves() {
        let mut cache = StopNameCache::new();
        cache.record("stop-1", "Аэропорт Якутск");
        assert_eq!(cache.get("stop-1"), Some("Аэропорт Якутск"));
        assert_eq!(cache.get("stop-2"), None);
    }

    #[test]
    fn later_recording_wins() {
        let mut cache = StopNameCache::new();
        cache.record("stop-1", "Old name");
        cache.record("stop-1", "New name");
        assert_eq!(cache.get("stop-1"), Some("New name"));
    }

    #[test]
    fn ignores_blank_ids_and_names() {
        let mut cache = StopNameCache::new();
        cache.record("  ", "Somewhere");
        cache.record("stop-1", "");
        assert!(cache.is_empty());
    }
}
