//! Anagram module - Find rearrangements of a pattern in a word list
//!
//! Provides:
//! - search: the anagram predicate and the progress-reporting scan
//! - api: the `anagram` and `check` commands

pub mod api;
pub mod search;
