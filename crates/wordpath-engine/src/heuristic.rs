// Sorted-letter edit distance used to order the search frontier

use wordpath_core::sorted_letters;

/// Estimate the number of edges between `word1` and `word2`.
///
/// Both words are reduced to their letters in sorted order and the unit-cost
/// Levenshtein distance between those sequences is returned. Anagrams
/// therefore estimate to zero. The estimate is not a lower bound on graph
/// distance, so ordering the frontier by it gives best-first search, not
/// optimal A*.
pub fn estimate(word1: &str, word2: &str) -> usize {
    levenshtein(&sorted_letters(word1), &sorted_letters(word2))
}

/// Unit-cost edit distance (substitution, insertion, deletion).
pub fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn levenshtein_basics() {
        assert_eq!(levenshtein(&chars("kitten"), &chars("sitting")), 3);
        assert_eq!(levenshtein(&chars(""), &chars("abc")), 3);
        assert_eq!(levenshtein(&chars("abc"), &chars("")), 3);
        assert_eq!(levenshtein(&chars("abc"), &chars("abc")), 0);
        assert_eq!(levenshtein(&chars("flaw"), &chars("lawn")), 2);
    }

    #[test]
    fn anagrams_estimate_zero() {
        assert_eq!(estimate("dog", "god"), 0);
        assert_eq!(estimate("listen", "silent"), 0);
    }

    #[test]
    fn estimate_compares_sorted_forms() {
        // "act" vs "dgo"
        assert_eq!(estimate("cat", "dog"), 3);
        // "cot" vs "dgo"
        assert_eq!(estimate("cot", "dog"), 3);
        // "cgo" vs "dgo"
        assert_eq!(estimate("cog", "dog"), 1);
        // "dot" vs "dgo"
        assert_eq!(estimate("dot", "dog"), 2);
    }

    #[test]
    fn estimate_is_symmetric() {
        for (a, b) in [("cat", "dogs"), ("", "abc"), ("stone", "notes"), ("a", "b")] {
            assert_eq!(estimate(a, b), estimate(b, a));
        }
    }

    #[test]
    fn estimate_can_overestimate() {
        // One substitution apart, but sorting moves the changed letter so
        // the sorted forms need a deletion and an insertion.
        assert_eq!(estimate("ba", "bc"), 2);
        assert_eq!(estimate("ab", "cb"), 2);
        // Sorting keeps the changed letter in place: exact.
        assert_eq!(estimate("az", "bz"), 1);
    }
}
