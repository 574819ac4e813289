//! Anagram API - anagram and check commands

use anyhow::{bail, Result};
use colored::Colorize;

use crate::anagram::search::{is_anagram, AnagramSearcher};
use crate::core::model::{Meta, ResultItem, ResultSet};
use crate::core::render::{emit, RenderConfig};
use crate::words::list::{get_all_words, WordList};

/// Find all anagrams of `pattern` in `words`, in list order.
///
/// Every progress string is handed to `on_progress`.
pub fn find_anagrams<P>(
    pattern: &str,
    list_name: &str,
    words: &[String],
    on_progress: P,
) -> ResultSet
where
    P: FnMut(&str),
{
    let mut result_set = ResultSet::new();

    AnagramSearcher::new(pattern).scan(
        words,
        |index, word| {
            result_set.push(ResultItem::anagram(word, pattern).with_meta(Meta {
                index: Some(index),
                list: Some(list_name.to_string()),
            }));
        },
        on_progress,
    );

    result_set
}

/// Run the anagram command
pub fn run_anagram(
    pattern: &str,
    list: &WordList,
    show_progress: bool,
    config: RenderConfig,
) -> Result<()> {
    if pattern.is_empty() {
        bail!("Pattern must not be empty");
    }

    let words = get_all_words(list);
    log::info!(
        "searching {} words from {:?} for anagrams of {:?}",
        words.len(),
        list.name,
        pattern
    );

    let result_set = find_anagrams(pattern, &list.name, &words, |percent| {
        log::debug!("scanned {}", percent);
        if show_progress {
            eprint!("\r{} {:>4}", "scanning".cyan(), percent);
        }
    });
    if show_progress && words.len() > 1 {
        eprintln!();
    }

    log::info!("found {} anagrams", result_set.len());
    log::debug!("anagrams: {:?}", result_set.words());
    emit(&result_set, config)?;
    Ok(())
}

/// Run the check command
pub fn run_check(pattern: &str, word: &str, config: RenderConfig) -> Result<()> {
    if pattern.is_empty() {
        bail!("Pattern must not be empty");
    }

    let mut result_set = ResultSet::new();
    result_set.push(ResultItem::check(pattern, word, is_anagram(pattern, word)));

    emit(&result_set, config)?;
    Ok(())
}
