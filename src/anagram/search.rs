//! Anagram search over an in-memory word list
//!
//! A word matches when it is a rearrangement of exactly the pattern's
//! letters. Matching is exact and case-sensitive; wildcards are not
//! supported.

/// Sorted characters of a string. Two strings are anagrams iff their
/// signatures are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(Vec<char>);

impl Signature {
    pub fn of(text: &str) -> Self {
        let mut chars: Vec<char> = text.chars().collect();
        chars.sort_unstable();
        Self(chars)
    }
}

/// Is `word` an anagram of `pattern`?
pub fn is_anagram(pattern: &str, word: &str) -> bool {
    // Equal multisets of chars always encode to the same number of bytes.
    if pattern.len() != word.len() {
        return false;
    }
    Signature::of(pattern) == Signature::of(word)
}

/// How many words to scan between progress reports: about 1% of the list,
/// never less than one.
pub fn progress_step(total: usize) -> usize {
    ((total + 50) / 100).max(1)
}

/// Percentage of the list scanned once `index` has been processed
pub fn progress_percent(index: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    index * 100 / total
}

/// Anagram matcher for one pattern, with the pattern's signature computed once.
#[derive(Debug, Clone)]
pub struct AnagramSearcher {
    pattern: String,
    signature: Signature,
}

impl AnagramSearcher {
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let signature = Signature::of(&pattern);
        Self { pattern, signature }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Does `word` use exactly the pattern's letters?
    pub fn matches(&self, word: &str) -> bool {
        // Byte-length gate first; only same-length words are sorted.
        word.len() == self.pattern.len() && Signature::of(word) == self.signature
    }

    /// Scan `words` in order.
    ///
    /// `on_match` receives every anagram in list order. `on_progress`
    /// receives strings like `"42%"` roughly every 1% of the list; it may
    /// never report 100%. An empty list triggers neither callback.
    pub fn search<S, M, P>(&self, words: &[S], mut on_match: M, on_progress: P)
    where
        S: AsRef<str>,
        M: FnMut(&str),
        P: FnMut(&str),
    {
        self.scan(words, |_, word| on_match(word), on_progress);
    }

    /// Like [`search`](Self::search), but matches also carry their index in `words`.
    pub fn scan<S, M, P>(&self, words: &[S], mut on_match: M, mut on_progress: P)
    where
        S: AsRef<str>,
        M: FnMut(usize, &str),
        P: FnMut(&str),
    {
        let total = words.len();
        let step = progress_step(total);

        for (i, word) in words.iter().enumerate() {
            let word = word.as_ref();
            if self.matches(word) {
                on_match(i, word);
            }
            if i > 0 && i % step == 0 {
                on_progress(&format!("{}%", progress_percent(i, total)));
            }
        }
    }

    /// Collect all anagrams of the pattern, in list order
    pub fn find_all<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        let mut found = Vec::new();
        self.search(words, |w| found.push(w.to_string()), |_| {});
        found
    }
}

/// Scan `words` for anagrams of `pattern`, reporting through the callbacks.
///
/// See [`AnagramSearcher::search`].
pub fn search<S, M, P>(pattern: &str, words: &[S], on_match: M, on_progress: P)
where
    S: AsRef<str>,
    M: FnMut(&str),
    P: FnMut(&str),
{
    AnagramSearcher::new(pattern).search(words, on_match, on_progress);
}
