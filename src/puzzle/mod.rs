//! Puzzle module - Word search grids
//!
//! Provides:
//! - grid: parsing rectangular letter grids
//! - solve: finding dictionary words along the eight directions
//! - api: the `wordsearch` command

pub mod api;
pub mod grid;
pub mod solve;
