//! Two-document TF-IDF term weighting.
//!
//! The corpus for every comparison is exactly `{candidate, peer}`. For each document:
//!
//! - `tf` is the raw occurrence count of the term in that document.
//! - `idf` is `1 + ln(N / (1 + df))` with `N = 2`, so a term unique to one document has
//!   `idf = 1` and a term present in both has `idf = 1 + ln(2/3)`.
//! - the weight is `tf * idf`.
//!
//! Tokens are maximal runs of ASCII or Cyrillic letters, ASCII digits and `_`; English stop
//! words are dropped.
//! Vectors are ordered maps so that summing over them is deterministic.

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashSet};

/// Term → weight mapping for one side of a single comparison.
pub type TermVector = BTreeMap<String, f64>;

/// Number of documents in every comparison corpus.
const CORPUS_SIZE: f64 = 2.0;

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "about", "above", "after", "again", "all", "also", "am", "an", "and", "another", "any",
        "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
        "both", "but", "by", "came", "can", "cannot", "come", "could", "did", "do", "does",
        "doing", "during", "each", "few", "for", "from", "further", "get", "got", "has", "had",
        "he", "have", "her", "here", "him", "himself", "his", "how", "if", "in", "into", "is",
        "it", "its", "itself", "like", "make", "many", "me", "might", "more", "most", "much",
        "must", "my", "myself", "never", "now", "of", "on", "only", "or", "other", "our",
        "ours", "ourselves", "out", "over", "own", "said", "same", "see", "should", "since",
        "so", "some", "still", "such", "take", "than", "that", "the", "their", "theirs",
        "them", "themselves", "then", "there", "these", "they", "this", "those", "through",
        "to", "too", "under", "until", "up", "very", "was", "way", "we", "well", "were",
        "what", "where", "when", "which", "while", "who", "whom", "with", "would", "why",
        "you", "your", "yours", "yourself", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j",
        "k", "l", "m", "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z", "0",
        "1", "2", "3", "4", "5", "6", "7", "8", "9", "_",
    ]
    .into_iter()
    .collect()
});

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || ('А'..='я').contains(&c)
}

/// Splits a normalized document into weighted terms, dropping stop words.
///
/// Any character outside `[A-Za-zА-Яа-я0-9_]` is a separator, including accented Latin letters.
pub fn tokenize(document: &str) -> impl Iterator<Item = &str> {
    document
        .split(|c: char| !is_token_char(c))
        .filter(|token| !token.is_empty() && !STOP_WORDS.contains(*token))
}

fn term_counts(document: &str) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for token in tokenize(document) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

fn idf(document_frequency: usize) -> f64 {
    1.0 + (CORPUS_SIZE / (1.0 + document_frequency as f64)).ln()
}

fn weigh(own: &BTreeMap<&str, usize>, other: &BTreeMap<&str, usize>) -> TermVector {
    own.iter()
        .map(|(term, &tf)| {
            let df = if other.contains_key(*term) { 2 } else { 1 };
            (term.to_string(), tf as f64 * idf(df))
        })
        .collect()
}

/// The weighted vectors of one candidate/peer pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PairVectors {
    pub candidate: TermVector,
    pub peer: TermVector,
}

/// Builds TF-IDF vectors for `candidate` (document 0) and `peer` (document 1).
///
/// Both inputs are expected to be normalized already. An empty document, or one consisting
/// only of stop words, yields an empty vector.
pub fn vectorize_pair(candidate: &str, peer: &str) -> PairVectors {
    let candidate_counts = term_counts(candidate);
    let peer_counts = term_counts(peer);

    PairVectors {
        candidate: weigh(&candidate_counts, &peer_counts),
        peer: weigh(&peer_counts, &candidate_counts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHARED_IDF: f64 = 0.594_534_891_891_835_3;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn tokenizer_splits_on_punctuation_and_drops_stop_words() {
        let tokens: Vec<&str> = tokenize("the quick, brown fox's den_1 is here!").collect();
        assert_eq!(tokens, vec!["quick", "brown", "fox", "den_1"]);
    }

    #[test]
    fn accented_letters_split_tokens_but_cyrillic_does_not() {
        let tokens: Vec<&str> = tokenize("naïve café").collect();
        assert_eq!(tokens, vec!["na", "ve", "caf"]);
        let tokens: Vec<&str> = tokenize("привет, мир").collect();
        assert_eq!(tokens, vec!["привет", "мир"]);
    }

    #[test]
    fn unique_terms_have_unit_idf() {
        let v = vectorize_pair("rivers rivers lakes", "mountains");
        assert!(approx(v.candidate["rivers"], 2.0));
        assert!(approx(v.candidate["lakes"], 1.0));
        assert!(approx(v.peer["mountains"], 1.0));
    }

    #[test]
    fn shared_terms_are_dampened() {
        let v = vectorize_pair("apples oranges", "apples bananas");
        assert!(approx(v.candidate["apples"], SHARED_IDF));
        assert!(approx(v.peer["apples"], SHARED_IDF));
        assert!(v.candidate["apples"] < v.candidate["oranges"]);
    }

    #[test]
    fn term_frequency_scales_weight() {
        let v = vectorize_pair("graph graph graph", "graph");
        assert!(approx(v.candidate["graph"], 3.0 * SHARED_IDF));
        assert!(approx(v.peer["graph"], SHARED_IDF));
    }

    #[test]
    fn empty_and_stop_word_documents_have_empty_vectors() {
        let v = vectorize_pair("", "the and of");
        assert!(v.candidate.is_empty());
        assert!(v.peer.is_empty());
    }
}
