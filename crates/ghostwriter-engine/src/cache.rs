use serde::Serialize;
use std::collections::HashMap;

/// Memoization key: the caller's mood value plus the note's leading characters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub mood: i64,
    pub prefix: String,
}

impl CacheKey {
    /// Characters of the note that take part in the key
    pub const PREFIX_CHARS: usize = 50;

    pub fn new(mood: i64, raw_text: &str) -> Self {
        Self {
            mood,
            prefix: raw_text.chars().take(Self::PREFIX_CHARS).collect(),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub fallbacks: u64,
    pub entries: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Session-lived reflection memo.
///
/// Entries are never evicted and there is no capacity bound; the table lives
/// exactly as long as the enhancer that owns it.
#[derive(Debug, Default)]
pub struct ReflectionCache {
    entries: HashMap<CacheKey, String>,
    stats: CacheStats,
}

impl ReflectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a key, counting the hit or miss
    pub fn get(&mut self, key: &CacheKey) -> Option<&String> {
        match self.entries.get(key) {
            Some(text) => {
                self.stats.hits += 1;
                Some(text)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: CacheKey, reflection: String) {
        self.entries.insert(key, reflection);
        self.stats.entries = self.entries.len();
    }

    pub fn record_fallback(&mut self) {
        self.stats.fallbacks += 1;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_truncates_to_fifty_chars() {
        let long = "a".repeat(80);
        let key = CacheKey::new(3, &long);
        assert_eq!(key.prefix.chars().count(), 50);
        assert_eq!(key, CacheKey::new(3, &format!("{}{}", "a".repeat(50), "different tail")));
        assert_ne!(key, CacheKey::new(4, &long));
    }

    #[test]
    fn test_key_counts_characters_not_bytes() {
        let text = "é".repeat(60);
        let key = CacheKey::new(2, &text);
        assert_eq!(key.prefix, "é".repeat(50));
        assert_eq!(key.mood, 2);
    }

    #[test]
    fn test_stats_track_hits_and_misses() {
        let mut cache = ReflectionCache::new();
        let key = CacheKey::new(1, "note");
        assert!(cache.get(&key).is_none());
        cache.insert(key.clone(), "reflection".to_string());
        assert_eq!(cache.get(&key).map(String::as_str), Some("reflection"));

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.hit_rate(), 0.5);
    }
}
