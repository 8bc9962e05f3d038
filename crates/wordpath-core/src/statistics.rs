// Per-query statistics handed to reporting layers

use std::time::Duration;

use serde::Serialize;

use crate::enums::SearchState;

/// Counters recorded at the end of every path query.
///
/// `visited` is the size of the visited set of the query that produced
/// these statistics; it is zero when the query was answered from the path
/// memo, because the visited set is rebuilt per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SearchStatistics {
    /// Wall time of the whole query, memo lookup included.
    pub elapsed: Duration,
    /// Words expanded by the search loop.
    pub visited: usize,
    /// Vocabulary size after the query's endpoints were inserted.
    pub vocabulary_size: usize,
    /// Distinct start words in the path memo.
    pub memo_starts: usize,
    /// Total (start, end) pairs in the path memo.
    pub memo_entries: usize,
    /// Sum of the sizes of every cached neighbor set.
    pub graph_size: usize,
    /// The query was answered from the path memo.
    pub memo_hit: bool,
    /// State the search ended in.
    pub state: SearchState,
}

impl SearchStatistics {
    /// Elapsed time in fractional seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle_and_empty() {
        let stats = SearchStatistics::default();
        assert_eq!(stats.state, SearchState::Idle);
        assert_eq!(stats.visited, 0);
        assert!(!stats.memo_hit);
        assert_eq!(stats.elapsed_secs(), 0.0);
    }

    #[test]
    fn elapsed_secs_is_fractional() {
        let stats = SearchStatistics {
            elapsed: Duration::from_millis(1500),
            ..Default::default()
        };
        assert!((stats.elapsed_secs() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn serializes_counters() {
        let stats = SearchStatistics {
            visited: 3,
            vocabulary_size: 5,
            state: SearchState::Found,
            ..Default::default()
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["visited"], 3);
        assert_eq!(json["vocabulary_size"], 5);
        assert_eq!(json["state"], "found");
        assert_eq!(json["memo_hit"], false);
    }
}
