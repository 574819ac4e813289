//! wordkit - word-puzzle toolkit
//!
//! wordkit provides:
//! - Anagram search over a word list with incremental match/progress callbacks
//! - Word search solving over rectangular letter grids
//! - Named word lists (inline, file, or remote descriptors)
//! - Unified output format (jsonl/json/md/raw)
//!
//! ```
//! use wordkit::anagram::search::search;
//!
//! let mut found = Vec::new();
//! search("listen", &["enlist", "google", "inlets"], |w| found.push(w.to_string()), |_| {});
//! assert_eq!(found, ["enlist", "inlets"]);
//! ```

pub mod anagram;
pub mod cli;
pub mod core;
pub mod puzzle;
pub mod words;

pub use anagram::search::{is_anagram, search, AnagramSearcher};
pub use words::dictionary::{ArrayDictionary, SearchableDictionary, SortedDictionary};
pub use words::list::{get_all_words, WordList, WordSource};
