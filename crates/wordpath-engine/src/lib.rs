//! Word-ladder search over a fixed vocabulary.
//!
//! Two words are adjacent when one letter substitution, insertion or
//! deletion turns one into the other, or when they are anagrams. The
//! [`SearchEngine`] answers shortest-ish path queries between words with a
//! time-bounded best-first search and remembers every answer.
//!
//! # Architecture
//!
//! - [`vocabulary`] -- the set of valid words, loaded one per line
//! - [`neighbors`] -- edit rules and the lazily filled neighbor cache
//! - [`heuristic`] -- sorted-letter edit distance used for ordering
//! - [`memo`] -- cache of query results and incidental single-hop paths
//! - [`search`] -- the engine, its options and injectable clocks
//! - [`graph`] -- path and neighborhood graphs for presentation layers
//!
//! # Example
//!
//! ```
//! use wordpath_engine::{PathResult, SearchEngine, VocabularyStore};
//!
//! let vocabulary = VocabularyStore::from_words(["cat", "cot", "cog", "dog", "dot"]);
//! let mut engine = SearchEngine::new(vocabulary);
//! let result = engine.find_path("cat", "dog");
//! assert_eq!(result.cost(), Some(3));
//! assert!(matches!(engine.find_path("cat", "cat"), PathResult::Found(p) if p.len() == 1));
//! ```

pub mod graph;
pub mod heuristic;
pub mod memo;
pub mod neighbors;
pub mod search;
pub mod vocabulary;

pub use graph::{EdgeKind, GraphEdge, GraphNode, PathGraph};
pub use memo::PathMemo;
pub use neighbors::NeighborIndex;
pub use search::{
    Clock, DEFAULT_TIME_BUDGET, ManualClock, MonotonicClock, SearchEngine, SearchOptions,
};
pub use vocabulary::{VocabularyError, VocabularyStore};
pub use wordpath_core::{Alphabet, AlphabetError, PathResult, SearchState, SearchStatistics};
