// Neighbor index: lazily computed, cached adjacency of the word graph
//
//   - `rules`: the four edit rules (substitution, insertion, deletion, anagram)
//   - `NeighborIndex`: memoizes the union of rule outputs per word

pub mod rules;

use hashbrown::{HashMap, HashSet};
use wordpath_core::Alphabet;

use crate::vocabulary::VocabularyStore;

pub use rules::{Anagram, Deletion, EditRule, Insertion, Substitution, default_rules};

/// Memoizing adjacency function over words.
///
/// The neighbor set of a word is computed on first request and kept until
/// [`NeighborIndex::clear`]. Cached sets are not refreshed when the
/// vocabulary later grows, so a set computed before an insertion does not
/// include the inserted word.
pub struct NeighborIndex {
    alphabet: Alphabet,
    rules: Vec<Box<dyn EditRule>>,
    cache: HashMap<String, HashSet<String>>,
    /// Number of cache misses since construction.
    computations: usize,
}

impl NeighborIndex {
    /// Create an index using the four standard rules.
    pub fn new(alphabet: Alphabet, anagram_max_len: Option<usize>) -> Self {
        Self::with_rules(alphabet, default_rules(anagram_max_len))
    }

    /// Create an index using a custom rule set.
    pub fn with_rules(alphabet: Alphabet, rules: Vec<Box<dyn EditRule>>) -> Self {
        Self {
            alphabet,
            rules,
            cache: HashMap::new(),
            computations: 0,
        }
    }

    /// Return the neighbor set of `word`, computing and caching it on a miss.
    pub fn neighbors(&mut self, word: &str, vocabulary: &VocabularyStore) -> &HashSet<String> {
        let Self {
            alphabet,
            rules,
            cache,
            computations,
        } = self;
        cache.entry_ref(word).or_insert_with(|| {
            *computations += 1;
            compute_neighbors(word, &*alphabet, rules.as_slice(), vocabulary)
        })
    }

    /// Return the cached neighbor set of `word` without computing it.
    pub fn cached(&self, word: &str) -> Option<&HashSet<String>> {
        self.cache.get(word)
    }

    pub fn is_cached(&self, word: &str) -> bool {
        self.cache.contains_key(word)
    }

    /// Number of words with a cached neighbor set.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Sum of the sizes of all cached neighbor sets.
    pub fn graph_size(&self) -> usize {
        self.cache.values().map(HashSet::len).sum()
    }

    /// Number of neighbor sets computed (cache misses) so far. Not reset by
    /// [`NeighborIndex::clear`].
    pub fn computations(&self) -> usize {
        self.computations
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Drop every cached neighbor set.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

fn compute_neighbors(
    word: &str,
    alphabet: &Alphabet,
    rules: &[Box<dyn EditRule>],
    vocabulary: &VocabularyStore,
) -> HashSet<String> {
    let letters: Vec<char> = word.chars().collect();
    let mut out = HashSet::new();
    for rule in rules {
        let before = out.len();
        rule.collect(&letters, alphabet, vocabulary, &mut out);
        tracing::trace!(word, rule = rule.name(), added = out.len() - before, "rule applied");
    }
    out
}
