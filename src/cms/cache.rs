//! Tag-aware response cache for content queries.
//!
//! Entries expire after the revalidation interval and can be evicted early
//! by tag (e.g. every entry tagged `project` after an edit in the CMS).

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use serde_json::Value;

#[derive(Debug)]
struct CacheEntry {
    value: Value,
    tags: Vec<String>,
    stored_at: Instant,
}

#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        // A panic while holding the lock cannot leave a half-written entry
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Return the cached value if it is younger than `max_age`.
    pub fn get(&self, key: &str, max_age: Duration) -> Option<Value> {
        let mut entries = self.lock();
        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < max_age => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn insert(&self, key: String, value: Value, tags: &[&str]) {
        let entry = CacheEntry {
            value,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            stored_at: Instant::now(),
        };
        self.lock().insert(key, entry);
    }

    /// Evict every entry carrying `tag`. Returns how many were removed.
    pub fn invalidate_tag(&self, tag: &str) -> usize {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, entry| !entry.tags.iter().any(|t| t == tag));
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_returns_fresh_entry() {
        let cache = ResponseCache::new();
        cache.insert("q1".to_string(), json!([1, 2]), &["project"]);

        assert_eq!(
            cache.get("q1", Duration::from_secs(60)),
            Some(json!([1, 2]))
        );
    }

    #[test]
    fn test_get_misses_unknown_key() {
        let cache = ResponseCache::new();
        assert!(cache.get("missing", Duration::from_secs(60)).is_none());
    }

    #[test]
    fn test_expired_entry_is_evicted() {
        let cache = ResponseCache::new();
        cache.insert("q1".to_string(), json!(null), &[]);

        assert!(cache.get("q1", Duration::ZERO).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_invalidate_tag_removes_only_tagged_entries() {
        let cache = ResponseCache::new();
        cache.insert("featured".to_string(), json!([]), &["project", "featured"]);
        cache.insert("all".to_string(), json!([]), &["project"]);
        cache.insert("slug".to_string(), json!({}), &["project", "slate-roof"]);
        cache.insert("other".to_string(), json!({}), &["settings"]);

        assert_eq!(cache.invalidate_tag("featured"), 1);
        assert_eq!(cache.len(), 3);

        assert_eq!(cache.invalidate_tag("project"), 2);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("other", Duration::from_secs(60)).is_some());
    }

    #[test]
    fn test_invalidate_unknown_tag_is_noop() {
        let cache = ResponseCache::new();
        cache.insert("q".to_string(), json!(1), &["project"]);
        assert_eq!(cache.invalidate_tag("nope"), 0);
        assert_eq!(cache.len(), 1);
    }
}
