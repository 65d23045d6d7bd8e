// src/extract/ledger.rs
// =============================================================================
// The set of every link discovered during one crawl.
//
// A crawl creates exactly one LinkLedger and lends it (&mut) to every
// extraction call. A link that is already in the ledger is "old news" and
// extraction drops it; a new link is recorded here and reported once.
//
// indexmap::IndexSet keeps insertion order, so the final listing comes out
// in discovery order (seed page links first).
// =============================================================================

use indexmap::IndexSet;

#[derive(Debug, Default)]
pub struct LinkLedger {
    links: IndexSet<String>,
}

impl LinkLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `link`. Returns `false` if it was already known.
    pub fn insert(&mut self, link: &str) -> bool {
        if self.contains(link) {
            return false;
        }
        self.links.insert(link.to_string())
    }

    pub fn contains(&self, link: &str) -> bool {
        self.links.contains(link)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Consumes the ledger, yielding links in discovery order.
    pub fn into_links(self) -> Vec<String> {
        self.links.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_reports_novelty() {
        let mut ledger = LinkLedger::new();
        assert!(ledger.insert("https://example.com/a"));
        assert!(!ledger.insert("https://example.com/a"));
        assert_eq!(ledger.len(), 1);
        assert!(ledger.contains("https://example.com/a"));
    }

    #[test]
    fn test_keeps_discovery_order() {
        let mut ledger = LinkLedger::new();
        ledger.insert("https://example.com/b");
        ledger.insert("https://example.com/a");
        ledger.insert("https://example.com/b");
        ledger.insert("https://example.com/c");

        assert_eq!(
            ledger.into_links(),
            vec![
                "https://example.com/b",
                "https://example.com/a",
                "https://example.com/c",
            ]
        );
    }

    #[test]
    fn test_new_ledger_is_empty() {
        assert!(LinkLedger::new().is_empty());
    }
}
