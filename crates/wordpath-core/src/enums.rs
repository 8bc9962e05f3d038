// Query result and search state enums

use serde::Serialize;

/// Outcome of a path query.
///
/// A failed query is its own variant and never an empty path: a found path
/// always holds at least one word, the start, and ends with the target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "result", content = "path", rename_all = "snake_case")]
pub enum PathResult {
    /// Words from start to end, inclusive.
    Found(Vec<String>),
    /// No path was found, either because the reachable graph was exhausted
    /// or because the time budget ran out.
    NotFound,
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    /// The path, if one was found.
    pub fn path(&self) -> Option<&[String]> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NotFound => None,
        }
    }

    /// Number of edges on the path (words minus one).
    pub fn cost(&self) -> Option<usize> {
        self.path().map(|p| p.len().saturating_sub(1))
    }
}

/// Lifecycle of a single search.
///
/// `Idle -> Running -> {Found, Exhausted, TimedOut}`. A query answered from
/// the path memo never enters `Running` and leaves the state at `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchState {
    #[default]
    Idle,
    Running,
    /// The target was popped from the frontier.
    Found,
    /// The frontier emptied without reaching the target.
    Exhausted,
    /// The time budget elapsed before the target was popped.
    TimedOut,
}

impl SearchState {
    /// Whether the state ends a search.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SearchState::Found | SearchState::Exhausted | SearchState::TimedOut
        )
    }
}
