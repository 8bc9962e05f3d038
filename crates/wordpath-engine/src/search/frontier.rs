// Best-first frontier keyed by a fully ordered tuple

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A pending expansion.
///
/// Field order is the priority order: estimated total cost, then path cost,
/// then word, then path, each compared ascending. Words and paths compare
/// lexicographically by code point, which makes every tie-break
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct FrontierEntry {
    /// Path cost plus the heuristic estimate to the target.
    pub estimated: usize,
    /// Edges on `path`.
    pub path_cost: usize,
    pub word: String,
    /// Words from the search's start to `word`, inclusive.
    pub path: Vec<String>,
}

/// Min-priority queue of [`FrontierEntry`] values.
///
/// A word can be queued several times through different paths; stale
/// duplicates are discarded by the caller when popped.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: FrontierEntry) {
        self.heap.push(Reverse(entry));
    }

    /// Remove and return the smallest entry.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
