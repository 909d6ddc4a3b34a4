//! Content hashing and deduplication
//!
//! Pages reached via distinct URLs but carrying identical normalized text
//! are collapsed to one record per crawl run. Hashes are run-local, so the
//! digest algorithm is not a compatibility surface.

use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// SHA-256 digest of the content bytes as lowercase hex
///
/// Pure function of the input: two records with equal digests are duplicates
/// regardless of URL.
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Run-scoped set of seen content digests
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<String>,
}

impl Deduplicator {
    /// Create an empty deduplicator
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this digest has been registered in this run
    pub fn is_duplicate(&self, digest: &str) -> bool {
        self.seen.contains(digest)
    }

    /// Register a digest; returns false if it was already present
    pub fn register(&mut self, digest: String) -> bool {
        self.seen.insert(digest)
    }

    /// Number of distinct digests seen
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether no digest has been registered yet
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_stable() {
        let a = content_hash("some page content");
        let b = content_hash("some page content");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_distinct_content_distinct_hash() {
        assert_ne!(content_hash("page one"), content_hash("page two"));
        assert_ne!(content_hash(""), content_hash(" "));
    }

    #[test]
    fn test_deduplicator_register_and_check() {
        let mut dedup = Deduplicator::new();
        let digest = content_hash("hello");

        assert!(!dedup.is_duplicate(&digest));
        assert!(dedup.register(digest.clone()));
        assert!(dedup.is_duplicate(&digest));
        assert!(!dedup.register(digest));
        assert_eq!(dedup.len(), 1);
    }
}
