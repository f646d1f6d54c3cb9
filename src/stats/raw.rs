//! Raw stat mapping as returned by the stats endpoint

use crate::core::types::StatId;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Flat `stat key -> value` mapping; absent keys read as zero
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawStats {
    values: AHashMap<String, u64>,
}

impl RawStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a classified stat, 0 if the player has no entry for it
    pub fn get(&self, stat: StatId) -> u64 {
        self.get_key(&stat.key())
    }

    /// Value under a literal API key, 0 if absent
    pub fn get_key(&self, key: &str) -> u64 {
        self.values.get(key).copied().unwrap_or(0)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: u64) {
        self.values.insert(key.into(), value);
    }

    /// Builder-style insert keyed by stat ID
    pub fn with(mut self, stat: StatId, value: u64) -> Self {
        self.insert(stat.key(), value);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for RawStats {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_zero() {
        let stats = RawStats::new();
        assert_eq!(stats.get(StatId(200)), 0);
        assert_eq!(stats.get_key("anything"), 0);
        assert!(stats.is_empty());
    }

    #[test]
    fn test_lookup_uses_prefixed_key() {
        let stats: RawStats = [("1_200", 42u64), ("200", 7)].into_iter().collect();
        assert_eq!(stats.get(StatId(200)), 42);
        assert_eq!(stats.len(), 2);
    }

    #[test]
    fn test_builder() {
        let stats = RawStats::new().with(StatId(1), 10).with(StatId(1), 20);
        assert_eq!(stats.get(StatId(1)), 20);
        assert_eq!(stats.len(), 1);
    }
}
