// SearchEngine: owns the vocabulary and every cache, and answers path queries
//
// A query first consults the path memo. On a miss it runs a best-first
// search over the lazily built word graph, ordered by path cost plus the
// sorted-letter heuristic, and gives up once the time budget has elapsed.
// Every outcome, failures included, is written back to the memo.
//
// The engine is single-threaded: all caches are mutated in place through
// `&mut self`. Concurrent callers need one engine each or external locking.

mod clock;
mod frontier;

use std::path::Path;
use std::time::Duration;

use hashbrown::HashSet;
use wordpath_core::{Alphabet, PathResult, SearchState, SearchStatistics};

use crate::heuristic;
use crate::memo::PathMemo;
use crate::neighbors::NeighborIndex;
use crate::vocabulary::{VocabularyError, VocabularyStore};

pub use clock::{Clock, ManualClock, MonotonicClock};
use frontier::{Frontier, FrontierEntry};

/// Time after which a running search gives up.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(20);

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// A search whose elapsed time exceeds this returns `NotFound`.
    pub time_budget: Duration,
    /// Letters tried by the substitution and insertion rules.
    pub alphabet: Alphabet,
    /// Skip anagram edges for words longer than this. `None` enumerates
    /// every permutation regardless of length.
    pub anagram_max_len: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            time_budget: DEFAULT_TIME_BUDGET,
            alphabet: Alphabet::default(),
            anagram_max_len: None,
        }
    }
}

/// Word-ladder search engine.
///
/// Owns the vocabulary, the neighbor index, the path memo and the visited
/// set of the most recent search. The vocabulary only grows: endpoints of a
/// query that are not yet words are inserted and stay for the engine's
/// lifetime, [`SearchEngine::clear`] included.
pub struct SearchEngine<C: Clock = MonotonicClock> {
    vocabulary: VocabularyStore,
    neighbors: NeighborIndex,
    memo: PathMemo,
    /// Words expanded by the most recent search.
    visited: HashSet<String>,
    time_budget: Duration,
    clock: C,
    state: SearchState,
    statistics: SearchStatistics,
}

impl SearchEngine<MonotonicClock> {
    /// Create an engine with default options and the wall clock.
    pub fn new(vocabulary: VocabularyStore) -> Self {
        Self::with_options(vocabulary, SearchOptions::default())
    }

    pub fn with_options(vocabulary: VocabularyStore, options: SearchOptions) -> Self {
        Self::with_clock(vocabulary, options, MonotonicClock::new())
    }

    /// Load the vocabulary from a one-word-per-line file.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        options: SearchOptions,
    ) -> Result<Self, VocabularyError> {
        Ok(Self::with_options(VocabularyStore::from_path(path)?, options))
    }
}

impl<C: Clock> SearchEngine<C> {
    /// Create an engine reading time from `clock`.
    pub fn with_clock(vocabulary: VocabularyStore, options: SearchOptions, clock: C) -> Self {
        Self {
            vocabulary,
            neighbors: NeighborIndex::new(options.alphabet, options.anagram_max_len),
            memo: PathMemo::new(),
            visited: HashSet::new(),
            time_budget: options.time_budget,
            clock,
            state: SearchState::Idle,
            statistics: SearchStatistics::default(),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Find a path from `start` to `end`.
    ///
    /// Both words are added to the vocabulary if missing. A memoized result
    /// for the pair, success or failure, is returned without searching.
    /// Otherwise a best-first search runs until the target is popped, the
    /// frontier empties, or the time budget elapses; its result is memoized.
    ///
    /// The returned path is not guaranteed to be a shortest one.
    pub fn find_path(&mut self, start: &str, end: &str) -> PathResult {
        let started = self.clock.now();
        self.visited.clear();
        self.vocabulary.insert(start);
        self.vocabulary.insert(end);

        let (result, memo_hit) = match self.memo.get(start, end) {
            Some(cached) => {
                tracing::debug!(start, end, found = cached.is_found(), "path memo hit");
                self.state = SearchState::Idle;
                (cached.clone(), true)
            }
            None => {
                let result = self.search(start, end);
                debug_assert!(self.state.is_terminal());
                self.memo.insert(start, end, result.clone());
                (result, false)
            }
        };

        self.statistics = SearchStatistics {
            elapsed: self.clock.now().saturating_sub(started),
            visited: self.visited.len(),
            vocabulary_size: self.vocabulary.len(),
            memo_starts: self.memo.start_count(),
            memo_entries: self.memo.entry_count(),
            graph_size: self.neighbors.graph_size(),
            memo_hit,
            state: self.state,
        };
        result
    }

    /// The best-first loop. Leaves `self.state` terminal.
    fn search(&mut self, start: &str, end: &str) -> PathResult {
        self.state = SearchState::Running;
        let search_started = self.clock.now();
        tracing::debug!(start, end, "search started");

        let mut frontier = Frontier::new();
        frontier.push(FrontierEntry {
            estimated: heuristic::estimate(start, end),
            path_cost: 0,
            word: start.to_string(),
            path: vec![start.to_string()],
        });

        while let Some(entry) = frontier.pop() {
            let elapsed = self.clock.now().saturating_sub(search_started);
            if elapsed > self.time_budget {
                return self.finish(SearchState::TimedOut, PathResult::NotFound, &frontier);
            }
            if entry.word == end {
                return self.finish(SearchState::Found, PathResult::Found(entry.path), &frontier);
            }
            if self.visited.contains(entry.word.as_str()) {
                continue;
            }
            self.visited.insert(entry.word.clone());
            tracing::trace!(word = %entry.word, cost = entry.path_cost, "expanding");

            let path_cost = entry.path_cost + 1;
            for next in self.neighbors.neighbors(&entry.word, &self.vocabulary) {
                if self.visited.contains(next.as_str()) {
                    continue;
                }
                let mut path = Vec::with_capacity(entry.path.len() + 1);
                path.extend_from_slice(&entry.path);
                path.push(next.clone());
                self.memo.insert(&entry.word, next, PathResult::Found(path.clone()));
                frontier.push(FrontierEntry {
                    estimated: path_cost + heuristic::estimate(next, end),
                    path_cost,
                    word: next.clone(),
                    path,
                });
            }
        }

        self.finish(SearchState::Exhausted, PathResult::NotFound, &frontier)
    }

    fn finish(
        &mut self,
        state: SearchState,
        result: PathResult,
        frontier: &Frontier,
    ) -> PathResult {
        self.state = state;
        tracing::debug!(
            state = ?state,
            visited = self.visited.len(),
            frontier = frontier.len(),
            "search finished"
        );
        result
    }

    /// Neighbor set of `word`, computed on first request.
    ///
    /// `word` need not be in the vocabulary.
    pub fn neighbors(&mut self, word: &str) -> &HashSet<String> {
        self.neighbors.neighbors(word, &self.vocabulary)
    }

    /// Empty the path memo, the neighbor index and the visited set.
    ///
    /// The vocabulary, including endpoints inserted by earlier queries, is
    /// kept. Statistics and state reset to their initial values.
    pub fn clear(&mut self) {
        self.memo.clear();
        self.neighbors.clear();
        self.visited.clear();
        self.state = SearchState::Idle;
        self.statistics = SearchStatistics::default();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Statistics of the most recent [`SearchEngine::find_path`] call.
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Words expanded by the most recent search.
    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    pub fn vocabulary(&self) -> &VocabularyStore {
        &self.vocabulary
    }

    pub fn memo(&self) -> &PathMemo {
        &self.memo
    }

    pub fn neighbor_index(&self) -> &NeighborIndex {
        &self.neighbors
    }

    pub fn time_budget(&self) -> Duration {
        self.time_budget
    }
}
