//! Text normalization.
//!
//! One pipeline for every piece of text entering the crate, query and corpus
//! alike: lowercase, strip ASCII punctuation, split on whitespace, and
//! optionally drop stopwords. No stemming and no length filtering; any word
//! that survives the pipeline is a term.

use rustc_hash::FxHashSet;

/// Splits `text` into normalized terms.
///
/// Punctuation is removed in place rather than treated as a separator, so
/// `cat's` becomes `cats` and `rock-n-roll` becomes `rocknroll`. Only ASCII
/// punctuation is stripped; accented letters and non-Latin scripts pass
/// through untouched. Empty tokens never appear in the output.
///
/// # Example
///
/// ```
/// use cosrank::tokenizer::tokenize;
///
/// let tokens = tokenize("The cat's dog!");
/// assert_eq!(tokens, vec!["the", "cats", "dog"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let stripped = strip_punctuation(text);
    stripped.split_whitespace().map(str::to_string).collect()
}

/// Like [`tokenize`], but drops any term present in `stopwords`.
///
/// Filtering happens after normalization, so a stopword list containing
/// `the` also removes `The` and `THE,` from the input.
pub fn tokenize_filtered(text: &str, stopwords: &StopwordSet) -> Vec<String> {
    let stripped = strip_punctuation(text);
    stripped
        .split_whitespace()
        .filter(|word| !stopwords.contains(word))
        .map(str::to_string)
        .collect()
}

/// Lowercases `text` and removes every ASCII punctuation character.
fn strip_punctuation(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}

/// A set of words excluded from tokenization output.
///
/// Entries are normalized through the same pipeline as document text, so a
/// stopword file may contain mixed case or trailing punctuation without
/// weakening the filter.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// Creates an empty set. Filtering with it is a no-op.
    pub fn new() -> Self {
        StopwordSet {
            words: FxHashSet::default(),
        }
    }

    /// Builds a set from free-form text, one or more words per line.
    pub fn from_text(text: &str) -> Self {
        tokenize(text).into_iter().collect()
    }

    /// Adds `word` to the set. Returns false if it was already present.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    /// Returns true if `word` is a stopword.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<String> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        StopwordSet {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(tokenize("Hello World"), vec!["hello", "world"]);
    }

    #[test]
    fn test_tokenize_strips_punctuation_in_place() {
        assert_eq!(tokenize("cat's rock-n-roll"), vec!["cats", "rocknroll"]);
        assert_eq!(tokenize("end. of; sentence!"), vec!["end", "of", "sentence"]);
    }

    #[test]
    fn test_tokenize_collapses_whitespace_runs() {
        assert_eq!(tokenize("a  \t b\n\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tokenize_drops_punctuation_only_words() {
        assert_eq!(tokenize("cat -- dog ?!"), vec!["cat", "dog"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t  ").is_empty());
        assert!(tokenize("... !!! ???").is_empty());
    }

    #[test]
    fn test_tokenize_preserves_order_and_duplicates() {
        assert_eq!(
            tokenize("cat dog cat cat"),
            vec!["cat", "dog", "cat", "cat"]
        );
    }

    #[test]
    fn test_tokenize_keeps_non_ascii_letters() {
        assert_eq!(tokenize("Café au lait"), vec!["café", "au", "lait"]);
    }

    #[test]
    fn test_tokenize_digits_survive() {
        assert_eq!(tokenize("route 66"), vec!["route", "66"]);
    }

    #[test]
    fn test_filtered_removes_stopwords() {
        let stopwords: StopwordSet = ["the", "a"].into_iter().collect();
        assert_eq!(
            tokenize_filtered("The cat saw a dog", &stopwords),
            vec!["cat", "saw", "dog"]
        );
    }

    #[test]
    fn test_filtered_with_empty_set_is_identity() {
        let stopwords = StopwordSet::new();
        assert_eq!(
            tokenize_filtered("The cat saw a dog", &stopwords),
            tokenize("The cat saw a dog")
        );
    }

    #[test]
    fn test_filtered_matches_after_normalization() {
        let stopwords: StopwordSet = ["the"].into_iter().collect();
        // "THE," normalizes to "the" before the stopword check runs.
        assert_eq!(
            tokenize_filtered("THE, cat", &stopwords),
            vec!["cat"]
        );
    }

    #[test]
    fn test_filtered_can_drop_everything() {
        let stopwords: StopwordSet = ["cat", "dog"].into_iter().collect();
        assert!(tokenize_filtered("Cat dog CAT", &stopwords).is_empty());
    }

    #[test]
    fn test_stopword_set_from_text_normalizes_entries() {
        let stopwords = StopwordSet::from_text("The\nAND\nof,\n");
        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("and"));
        assert!(stopwords.contains("of"));
        assert_eq!(stopwords.len(), 3);
    }

    #[test]
    fn test_stopword_set_insert_deduplicates() {
        let mut stopwords = StopwordSet::new();
        assert!(stopwords.insert("the"));
        assert!(!stopwords.insert("the"));
        assert_eq!(stopwords.len(), 1);
        assert!(!stopwords.is_empty());
    }
}
