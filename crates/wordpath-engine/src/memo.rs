// Path memo: results of earlier queries and incidental single-hop paths

use hashbrown::HashMap;
use wordpath_core::PathResult;

/// Two-level cache from start word to end word to a query result.
///
/// Two kinds of entries share the table:
///
/// - completed queries, stored under their own `(start, end)` pair, failures
///   included, so a repeated query never re-runs the search;
/// - incidental entries written while a search expands a word `w`: for each
///   unvisited neighbor `n`, `(w, n)` maps to the path from the search's
///   start through `w` to `n`. Such a path begins at the search's start, not
///   at `w`.
///
/// Later writes to the same pair overwrite earlier ones.
#[derive(Debug, Clone, Default)]
pub struct PathMemo {
    entries: HashMap<String, HashMap<String, PathResult>>,
}

impl PathMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the stored result for `(start, end)`.
    pub fn get(&self, start: &str, end: &str) -> Option<&PathResult> {
        self.entries.get(start)?.get(end)
    }

    pub fn contains(&self, start: &str, end: &str) -> bool {
        self.get(start, end).is_some()
    }

    /// Store `result` for `(start, end)`, replacing any earlier value.
    pub fn insert(&mut self, start: &str, end: &str, result: PathResult) {
        self.entries
            .entry_ref(start)
            .or_default()
            .insert(end.to_string(), result);
    }

    /// Number of distinct start words.
    pub fn start_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of `(start, end)` pairs.
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(words: &[&str]) -> PathResult {
        PathResult::Found(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn new_memo_is_empty() {
        let memo = PathMemo::new();
        assert!(memo.is_empty());
        assert!(memo.get("cat", "dog").is_none());
        assert_eq!(memo.entry_count(), 0);
    }

    #[test]
    fn insert_and_get() {
        let mut memo = PathMemo::new();
        memo.insert("cat", "cot", found(&["cat", "cot"]));
        assert_eq!(memo.get("cat", "cot"), Some(&found(&["cat", "cot"])));
        assert!(memo.get("cot", "cat").is_none());
        assert!(memo.get("cat", "dog").is_none());
    }

    #[test]
    fn failures_are_stored() {
        let mut memo = PathMemo::new();
        memo.insert("cat", "xyz", PathResult::NotFound);
        assert!(memo.contains("cat", "xyz"));
        assert_eq!(memo.get("cat", "xyz"), Some(&PathResult::NotFound));
    }

    #[test]
    fn insert_overwrites() {
        let mut memo = PathMemo::new();
        memo.insert("cot", "dog", found(&["cat", "cot", "dog"]));
        memo.insert("cot", "dog", found(&["cot", "dog"]));
        assert_eq!(memo.get("cot", "dog"), Some(&found(&["cot", "dog"])));
        assert_eq!(memo.entry_count(), 1);
    }

    #[test]
    fn counts_starts_and_pairs() {
        let mut memo = PathMemo::new();
        memo.insert("cat", "cot", found(&["cat", "cot"]));
        memo.insert("cat", "bat", found(&["cat", "bat"]));
        memo.insert("cot", "cog", found(&["cat", "cot", "cog"]));
        assert_eq!(memo.start_count(), 2);
        assert_eq!(memo.entry_count(), 3);
    }

    #[test]
    fn clear_empties_everything() {
        let mut memo = PathMemo::new();
        memo.insert("cat", "cot", found(&["cat", "cot"]));
        memo.clear();
        assert!(memo.is_empty());
        assert!(memo.get("cat", "cot").is_none());
    }
}
