// Edit rules: each produces the vocabulary words one edit away from a word
//
// The first three rules try every letter of the alphabet at every position,
// O(L * |A|) candidates each. The anagram rule enumerates every permutation
// of the word's own letters, O(L!) candidates, and dominates for long words.

use hashbrown::HashSet;
use wordpath_core::Alphabet;

use crate::vocabulary::VocabularyStore;

/// One class of edge in the word graph.
///
/// A rule appends to `out` every candidate that is in the vocabulary and
/// differs from `word`. Rules never see each other's output; the neighbor
/// set is the union over all rules.
pub trait EditRule {
    /// Short name used in log events.
    fn name(&self) -> &'static str;

    fn collect(
        &self,
        word: &[char],
        alphabet: &Alphabet,
        vocabulary: &VocabularyStore,
        out: &mut HashSet<String>,
    );
}

/// Keep `candidate` if it is a vocabulary word other than `original`.
fn keep_candidate(
    candidate: &[char],
    original: &[char],
    vocabulary: &VocabularyStore,
    out: &mut HashSet<String>,
) {
    if candidate == original {
        return;
    }
    let s: String = candidate.iter().collect();
    if vocabulary.contains(&s) {
        out.insert(s);
    }
}

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

/// Replace the letter at each position with each alphabet letter.
pub struct Substitution;

impl EditRule for Substitution {
    fn name(&self) -> &'static str {
        "substitution"
    }

    fn collect(
        &self,
        word: &[char],
        alphabet: &Alphabet,
        vocabulary: &VocabularyStore,
        out: &mut HashSet<String>,
    ) {
        let mut buffer = word.to_vec();
        for i in 0..word.len() {
            for &c in alphabet.letters() {
                buffer[i] = c;
                keep_candidate(&buffer, word, vocabulary, out);
            }
            buffer[i] = word[i];
        }
    }
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Insert each alphabet letter at each of the `L + 1` gaps.
pub struct Insertion;

impl EditRule for Insertion {
    fn name(&self) -> &'static str {
        "insertion"
    }

    fn collect(
        &self,
        word: &[char],
        alphabet: &Alphabet,
        vocabulary: &VocabularyStore,
        out: &mut HashSet<String>,
    ) {
        let mut buffer = Vec::with_capacity(word.len() + 1);
        for i in 0..=word.len() {
            for &c in alphabet.letters() {
                buffer.clear();
                buffer.extend_from_slice(&word[..i]);
                buffer.push(c);
                buffer.extend_from_slice(&word[i..]);
                keep_candidate(&buffer, word, vocabulary, out);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Remove the letter at each position.
///
/// Deletion is the inverse of insertion but does not consult the alphabet,
/// so a letter outside the alphabet can be deleted yet never re-inserted.
pub struct Deletion;

impl EditRule for Deletion {
    fn name(&self) -> &'static str {
        "deletion"
    }

    fn collect(
        &self,
        word: &[char],
        _alphabet: &Alphabet,
        vocabulary: &VocabularyStore,
        out: &mut HashSet<String>,
    ) {
        let mut buffer = Vec::with_capacity(word.len());
        for i in 0..word.len() {
            buffer.clear();
            buffer.extend_from_slice(&word[..i]);
            buffer.extend_from_slice(&word[i + 1..]);
            keep_candidate(&buffer, word, vocabulary, out);
        }
    }
}

// ---------------------------------------------------------------------------
// Anagram
// ---------------------------------------------------------------------------

/// Try every ordering of the word's letters.
///
/// All `L!` orderings are visited, repeated letters included, using Heap's
/// algorithm. `max_len` skips the rule entirely for words longer than the
/// limit; `None` enumerates without restriction.
pub struct Anagram {
    pub max_len: Option<usize>,
}

impl Anagram {
    pub fn unrestricted() -> Self {
        Self { max_len: None }
    }

    fn applies_to(&self, len: usize) -> bool {
        self.max_len.is_none_or(|max| len <= max)
    }
}

impl EditRule for Anagram {
    fn name(&self) -> &'static str {
        "anagram"
    }

    fn collect(
        &self,
        word: &[char],
        _alphabet: &Alphabet,
        vocabulary: &VocabularyStore,
        out: &mut HashSet<String>,
    ) {
        if !self.applies_to(word.len()) {
            tracing::trace!(len = word.len(), "anagram rule skipped");
            return;
        }
        let mut letters = word.to_vec();
        let n = letters.len();
        let mut counters = vec![0usize; n];

        keep_candidate(&letters, word, vocabulary, out);
        let mut i = 1;
        while i < n {
            if counters[i] < i {
                if i % 2 == 0 {
                    letters.swap(0, i);
                } else {
                    letters.swap(counters[i], i);
                }
                keep_candidate(&letters, word, vocabulary, out);
                counters[i] += 1;
                i = 1;
            } else {
                counters[i] = 0;
                i += 1;
            }
        }
    }
}

/// The four rules in their standard order.
pub fn default_rules(anagram_max_len: Option<usize>) -> Vec<Box<dyn EditRule>> {
    vec![
        Box::new(Substitution),
        Box::new(Insertion),
        Box::new(Deletion),
        Box::new(Anagram {
            max_len: anagram_max_len,
        }),
    ]
}
