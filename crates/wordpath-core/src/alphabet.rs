// Letter sets for candidate generation and sorted-letter forms

use std::fmt;

/// Lowercase ASCII letters, the default alphabet.
const ASCII_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Error returned when building an [`Alphabet`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetError {
    #[error("alphabet must contain at least one letter")]
    Empty,
}

/// An ordered, duplicate-free set of letters.
///
/// Substitution and insertion edges try every letter of the alphabet at
/// every position, so the alphabet bounds which neighbors can be reached by
/// those two rules. Deletion and anagram edges never consult it.
///
/// Letters keep the order they were first given in; duplicates are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from the characters of `letters`.
    ///
    /// Repeated characters are kept only once, at their first position.
    pub fn new(letters: &str) -> Result<Self, AlphabetError> {
        let mut seen = Vec::new();
        for c in letters.chars() {
            if !seen.contains(&c) {
                seen.push(c);
            }
        }
        if seen.is_empty() {
            return Err(AlphabetError::Empty);
        }
        Ok(Self { letters: seen })
    }

    /// The 26 lowercase ASCII letters `a..=z`.
    pub fn ascii_lowercase() -> Self {
        Self {
            letters: ASCII_LOWERCASE.chars().collect(),
        }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`: construction rejects empty alphabets.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(&c)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::ascii_lowercase()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.letters {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Return the characters of `word` in non-decreasing code point order.
///
/// Two words are anagrams of each other exactly when their sorted forms
/// are equal.
pub fn sorted_letters(word: &str) -> Vec<char> {
    let mut letters: Vec<char> = word.chars().collect();
    letters.sort_unstable();
    letters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ascii_lowercase() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.letters()[0], 'a');
        assert_eq!(alphabet.letters()[25], 'z');
        assert_eq!(alphabet.to_string(), ASCII_LOWERCASE);
    }

    #[test]
    fn new_drops_duplicates_keeping_first_order() {
        let alphabet = Alphabet::new("abcab").unwrap();
        assert_eq!(alphabet.letters(), &['a', 'b', 'c']);
    }

    #[test]
    fn new_rejects_empty() {
        assert_eq!(Alphabet::new(""), Err(AlphabetError::Empty));
    }

    #[test]
    fn non_ascii_letters_are_allowed() {
        let alphabet = Alphabet::new("aeiouàèéìòù").unwrap();
        assert!(alphabet.contains('è'));
        assert!(!alphabet.contains('b'));
    }

    #[test]
    fn sorted_letters_orders_by_code_point() {
        assert_eq!(sorted_letters("dog"), vec!['d', 'g', 'o']);
        assert_eq!(sorted_letters("god"), sorted_letters("dog"));
        assert!(sorted_letters("").is_empty());
    }

    #[test]
    fn sorted_letters_keeps_repeats() {
        assert_eq!(sorted_letters("anna"), vec!['a', 'a', 'n', 'n']);
    }
}
