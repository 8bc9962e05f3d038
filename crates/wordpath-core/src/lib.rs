//! Shared types for the wordpath word-ladder engine.
//!
//! Nothing in here searches. The crate holds the value types that cross the
//! boundary between the engine and its consumers:
//!
//! - [`alphabet`] -- the letter set used for substitution and insertion edges
//! - [`enums`] -- query result and search state
//! - [`statistics`] -- per-query counters exposed to reporting layers

pub mod alphabet;
pub mod enums;
pub mod statistics;

pub use alphabet::{Alphabet, AlphabetError, sorted_letters};
pub use enums::{PathResult, SearchState};
pub use statistics::SearchStatistics;
