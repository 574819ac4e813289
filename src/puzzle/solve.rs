//! Word search solver
//!
//! Walks a ray from every cell in every direction, growing the candidate one
//! letter at a time and abandoning the ray once no dictionary word starts
//! with it.

use crate::core::model::{Direction, Placement};
use crate::puzzle::grid::Grid;
use crate::words::dictionary::SearchableDictionary;

/// Shortest word the solver will report
pub const MIN_WORD_LEN: usize = 2;

/// A dictionary word spelled out in the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    pub word: String,
    pub placement: Placement,
}

/// Find every placement of a dictionary word with at least `min_len` letters.
///
/// `min_len` is raised to [`MIN_WORD_LEN`] if smaller. Results are ordered by
/// row, column, direction, then word.
pub fn solve<D>(grid: &Grid, dictionary: &D, min_len: usize) -> Vec<Found>
where
    D: SearchableDictionary + ?Sized,
{
    let min_len = min_len.max(MIN_WORD_LEN);
    let mut found = Vec::new();

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            for direction in Direction::ALL {
                walk(grid, dictionary, min_len, row, col, direction, &mut found);
            }
        }
    }

    found.sort_by(|a, b| {
        let pa = &a.placement;
        let pb = &b.placement;
        (pa.row, pa.col, pa.direction, &a.word).cmp(&(pb.row, pb.col, pb.direction, &b.word))
    });
    found
}

fn walk<D>(
    grid: &Grid,
    dictionary: &D,
    min_len: usize,
    row: usize,
    col: usize,
    direction: Direction,
    found: &mut Vec<Found>,
) where
    D: SearchableDictionary + ?Sized,
{
    let (dr, dc) = direction.delta();
    let (mut r, mut c) = (row as isize, col as isize);
    let mut candidate = String::new();
    let mut len = 0usize;

    while let Some(letter) = grid.get(r, c) {
        candidate.push(letter);
        len += 1;

        if !dictionary.contains_root(&candidate) {
            break;
        }
        if len >= min_len && dictionary.contains_word(&candidate) {
            found.push(Found {
                word: candidate.clone(),
                placement: Placement {
                    row,
                    col,
                    direction,
                },
            });
        }

        r += dr;
        c += dc;
    }
}
