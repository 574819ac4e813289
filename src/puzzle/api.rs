//! Word search API - wordsearch command

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::model::{Meta, ResultItem, ResultSet};
use crate::core::render::{emit, RenderConfig};
use crate::puzzle::grid::Grid;
use crate::puzzle::solve::solve;
use crate::words::dictionary::SortedDictionary;
use crate::words::list::{get_all_words, WordList};

/// Solve a grid against a list, producing one match per placement
pub fn search_grid(grid: &Grid, list: &WordList, min_len: usize) -> ResultSet {
    // Grids are lowercased on parse, so the dictionary must be too.
    let dictionary =
        SortedDictionary::new(get_all_words(list).into_iter().map(|w| w.to_lowercase()));
    log::info!(
        "solving {}x{} grid against {} words from {:?}",
        grid.height(),
        grid.width(),
        dictionary.len(),
        list.name
    );

    let mut result_set: ResultSet = solve(grid, &dictionary, min_len)
        .into_iter()
        .map(|found| {
            ResultItem::placement(found.word, found.placement).with_meta(Meta {
                index: None,
                list: Some(list.name.clone()),
            })
        })
        .collect();

    result_set.sort();
    result_set
}

/// Run the wordsearch command
pub fn run_wordsearch(
    grid_path: &Path,
    list: &WordList,
    min_len: usize,
    config: RenderConfig,
) -> Result<()> {
    let text = fs::read_to_string(grid_path)
        .with_context(|| format!("Failed to read grid: {:?}", grid_path))?;
    let grid = Grid::parse(&text).with_context(|| format!("Invalid grid: {:?}", grid_path))?;

    let result_set = search_grid(&grid, list, min_len);
    log::info!("found {} placements", result_set.len());

    emit(&result_set, config)?;
    Ok(())
}
