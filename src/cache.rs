//! Expiring cache of hyphenated output, keyed by a hash of the input.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::util::time_now_secs;

/// Default retention for cached output: 12 hours.
pub const DEFAULT_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// Hex SHA-1 of `content`, used as the cache key.
///
/// # Examples
///
/// ```
/// use tavutin::cache::content_key;
///
/// assert_eq!(content_key(""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
/// ```
pub fn content_key(content: &str) -> String {
    sha1_smol::Sha1::from(content).digest().to_string()
}

struct Entry {
    value: String,
    expires_at: u64,
}

/// A thread-safe map of content keys to hyphenated output with a fixed TTL.
///
/// Entries past their expiry are never returned. They are dropped on lookup,
/// on every insert, or in bulk by [`HyphenCache::purge_expired`], so content
/// that is never asked for again does not stay in memory past its TTL.
pub struct HyphenCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, Entry>>,
}

impl Default for HyphenCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl HyphenCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.get_at(key, time_now_secs())
    }

    pub fn insert(&self, key: String, value: String) {
        self.insert_at(key, value, time_now_secs());
    }

    /// Drop every expired entry, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        self.purge_at(time_now_secs())
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Entry>> {
        // A poisoned map is still a valid map of strings.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn get_at(&self, key: &str, now: u64) -> Option<String> {
        let mut entries = self.lock();
        let expired = match entries.get(key) {
            Some(entry) if entry.expires_at > now => return Some(entry.value.clone()),
            Some(_) => true,
            None => false,
        };
        if expired {
            entries.remove(key);
            tracing::trace!(key, "cache entry expired");
        }
        None
    }

    fn insert_at(&self, key: String, value: String, now: u64) {
        let expires_at = now.saturating_add(self.ttl.as_secs());
        let mut entries = self.lock();
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(key, Entry { value, expires_at });
    }

    fn purge_at(&self, now: u64) -> usize {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        before - entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_key_is_stable_hex() {
        let key = content_key("kirjoituskone");
        assert_eq!(key.len(), 40);
        assert!(key.bytes().all(|b| b.is_ascii_hexdigit()));
        assert_eq!(key, content_key("kirjoituskone"));
        assert_ne!(key, content_key("Kirjoituskone"));
    }

    #[test]
    fn test_hit_before_expiry() {
        let cache = HyphenCache::new(Duration::from_secs(60));
        cache.insert_at("k".into(), "ta\u{AD}lo".into(), 1_000);
        assert_eq!(cache.get_at("k", 1_059).as_deref(), Some("ta\u{AD}lo"));
    }

    #[test]
    fn test_miss_after_expiry_removes_entry() {
        let cache = HyphenCache::new(Duration::from_secs(60));
        cache.insert_at("k".into(), "v".into(), 1_000);
        assert_eq!(cache.get_at("k", 1_060), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_purge_expired() {
        let cache = HyphenCache::new(Duration::from_secs(10));
        cache.insert_at("vanha".into(), "a".into(), 0);
        cache.insert_at("uusi".into(), "b".into(), 5);
        assert_eq!(cache.purge_at(12), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get_at("uusi", 14).as_deref(), Some("b"));
    }

    #[test]
    fn test_insert_drops_expired_entries() {
        let cache = HyphenCache::new(Duration::from_secs(10));
        cache.insert_at("vanha".into(), "a".into(), 0);
        cache.insert_at("uusi".into(), "b".into(), 100);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get_at("uusi", 105).as_deref(), Some("b"));
    }

    #[test]
    fn test_zero_ttl_stays_bounded() {
        let cache = HyphenCache::new(Duration::ZERO);
        for i in 0..1000 {
            cache.insert_at(content_key(&i.to_string()), "x".into(), 1_000);
        }
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_live_clock_round_trip() {
        let cache = HyphenCache::default();
        assert_eq!(cache.ttl(), DEFAULT_TTL);
        cache.insert(content_key("talo"), "ta\u{AD}lo".into());
        assert_eq!(
            cache.get(&content_key("talo")).as_deref(),
            Some("ta\u{AD}lo")
        );
        assert_eq!(cache.purge_expired(), 0);
    }
}
