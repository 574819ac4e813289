//! Words module - Word lists and dictionaries
//!
//! Provides:
//! - list: named word sources and the loader that materializes them
//! - dictionary: word/root membership queries for the word search solver
//! - api: the `lists` command

pub mod api;
pub mod dictionary;
pub mod list;
