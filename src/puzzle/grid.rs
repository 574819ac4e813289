//! Letter grids for word search puzzles

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid WHITESPACE_RE regex"));

/// A rectangular grid of lowercase letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl Grid {
    /// Parse a grid, one row per non-blank line.
    ///
    /// Whitespace inside a row is ignored, so `C A T` and `CAT` are the same
    /// row. Letters are lowercased.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| WHITESPACE_RE.replace_all(line, "").to_lowercase())
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();

        let Some(first) = rows.first() else {
            bail!("Grid is empty");
        };
        let width = first.len();

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                bail!(
                    "Grid row {} has {} letters, expected {} (rows must all be the same width)",
                    i + 1,
                    row.len(),
                    width
                );
            }
        }

        Ok(Self { rows, width })
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Letter at a signed position; `None` outside the grid
    pub fn get(&self, row: isize, col: isize) -> Option<char> {
        if row < 0 || col < 0 {
            return None;
        }
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
    }
}
