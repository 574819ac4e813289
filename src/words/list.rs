//! Word lists - named sources of candidate words
//!
//! A list is either inline, a local text file (one word per line), or a
//! remote URL. Remote lists are described but never fetched, so loading one
//! yields no words.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Where a word list gets its words from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum WordSource {
    Inline(Vec<String>),
    File(PathBuf),
    Remote(String),
}

/// A named collection of candidate words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList {
    pub name: String,
    pub source: WordSource,
}

impl WordList {
    pub fn inline<S: Into<String>>(name: &str, words: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.to_string(),
            source: WordSource::Inline(words.into_iter().map(Into::into).collect()),
        }
    }

    pub fn file(name: &str, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.to_string(),
            source: WordSource::File(path.into()),
        }
    }

    pub fn remote(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            source: WordSource::Remote(url.to_string()),
        }
    }
}

/// Word list loading errors
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list is only available remotely ({0}) and is not fetched")]
    RemoteUnavailable(String),

    #[error("word list has no words")]
    Empty,

    #[error("unknown word list: {0}")]
    UnknownList(String),
}

pub const ENGLISH_NAME: &str = "English";
pub const ENGLISH_URL: &str = "https://github.com/dwyl/english-words/blob/master/words_alpha.txt";

/// Built-in word lists
pub fn builtin_lists() -> Vec<WordList> {
    vec![WordList::remote(ENGLISH_NAME, ENGLISH_URL)]
}

/// Find a built-in list by name (case-insensitive)
pub fn find_builtin(name: &str) -> Option<WordList> {
    builtin_lists()
        .into_iter()
        .find(|l| l.name.eq_ignore_ascii_case(name))
}

/// The list used when the caller names none
pub fn default_list() -> WordList {
    WordList::remote(ENGLISH_NAME, ENGLISH_URL)
}

/// Pick a word list from caller choices.
///
/// Inline words win over a file, a file over a named built-in list, and with
/// nothing given the default list is used.
pub fn resolve_list(
    inline: &[String],
    file: Option<&Path>,
    name: Option<&str>,
) -> Result<WordList, WordListError> {
    if !inline.is_empty() {
        return Ok(WordList::inline("inline", inline.iter().cloned()));
    }
    if let Some(path) = file {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        return Ok(WordList::file(&name, path));
    }
    match name {
        Some(name) => find_builtin(name).ok_or_else(|| WordListError::UnknownList(name.to_string())),
        None => Ok(default_list()),
    }
}

/// Split word-per-line text, trimming whitespace and dropping blank lines
pub fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

fn read_word_file(path: &Path) -> Result<Vec<String>, WordListError> {
    let bytes = fs::read(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_words(&String::from_utf8_lossy(&bytes)))
}

/// Materialize the words of a list
pub fn load_words(list: &WordList) -> Result<Vec<String>, WordListError> {
    let words = match &list.source {
        WordSource::Inline(words) => words.clone(),
        WordSource::File(path) => read_word_file(path)?,
        WordSource::Remote(url) => return Err(WordListError::RemoteUnavailable(url.clone())),
    };

    if words.is_empty() {
        return Err(WordListError::Empty);
    }
    Ok(words)
}

/// Materialize the words of a list, treating any failure as an empty list
pub fn get_all_words(list: &WordList) -> Vec<String> {
    match load_words(list) {
        Ok(words) => {
            log::debug!("loaded {} words from list {:?}", words.len(), list.name);
            words
        }
        Err(e) => {
            log::warn!("word list {:?}: {}", list.name, e);
            Vec::new()
        }
    }
}
