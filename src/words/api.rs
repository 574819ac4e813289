//! Word list API - lists command

use anyhow::Result;

use crate::core::model::{ResultItem, ResultSet};
use crate::core::render::{emit, RenderConfig};
use crate::words::list::builtin_lists;

/// Describe every built-in word list
pub fn list_word_lists() -> Result<ResultSet> {
    builtin_lists()
        .into_iter()
        .map(|list| -> Result<ResultItem> {
            Ok(ResultItem::list(serde_json::to_value(&list)?))
        })
        .collect()
}

/// Run the lists command
pub fn run_lists(config: RenderConfig) -> Result<()> {
    let result_set = list_word_lists()?;
    emit(&result_set, config)?;
    Ok(())
}
