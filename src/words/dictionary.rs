//! Dictionaries answering word and prefix queries

use std::collections::BTreeSet;
use std::ops::Bound;

/// A set of words that can be probed for whole words and for roots
/// (prefixes of at least one word).
pub trait SearchableDictionary {
    /// Does any word start with `text`?
    fn contains_root(&self, text: &str) -> bool;

    /// Is `word` in the dictionary?
    fn contains_word(&self, word: &str) -> bool;
}

/// Unindexed dictionary over a plain vector; every query is a linear scan.
#[derive(Debug, Clone, Default)]
pub struct ArrayDictionary {
    words: Vec<String>,
}

impl ArrayDictionary {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }
}

impl SearchableDictionary for ArrayDictionary {
    fn contains_root(&self, text: &str) -> bool {
        self.words.iter().any(|w| w.starts_with(text))
    }

    fn contains_word(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// Ordered dictionary; root queries are a single range lookup.
#[derive(Debug, Clone, Default)]
pub struct SortedDictionary {
    words: BTreeSet<String>,
}

impl SortedDictionary {
    pub fn new<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SearchableDictionary for SortedDictionary {
    fn contains_root(&self, text: &str) -> bool {
        // The smallest word >= text starts with text iff any word does.
        self.words
            .range::<str, _>((Bound::Included(text), Bound::Unbounded))
            .next()
            .is_some_and(|w| w.starts_with(text))
    }

    fn contains_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
