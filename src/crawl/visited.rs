// src/crawl/visited.rs
// =============================================================================
// The set of sanitized names seen during one crawl.
//
// It only ever grows. With uniqueness on, a name in here keeps that URL out
// of every later frontier for the rest of the run.
// =============================================================================

use std::collections::HashSet;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VisitedSet {
    keys: HashSet<String>,
}

impl VisitedSet {
    /// A set that already holds the seed's key.
    pub fn with_seed(seed_key: String) -> Self {
        let mut set = Self::default();
        set.insert(seed_key);
        set
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Returns true when the key was not present before.
    pub fn insert(&mut self, key: String) -> bool {
        self.keys.insert(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
