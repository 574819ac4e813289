//! Unified Result Model
//!
//! Every command maps its findings to this model before rendering output.

use serde::{Deserialize, Serialize};

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Match,
    Check,
    List,
}

/// Source mode indicating which tool produced the result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    Anagram,
    WordSearch,
    Registry,
}

/// One of the eight straight-line directions in a letter grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl Direction {
    /// All directions, clockwise from north
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::Ne,
        Direction::E,
        Direction::Se,
        Direction::S,
        Direction::Sw,
        Direction::W,
        Direction::Nw,
    ];

    /// Row and column step for one letter in this direction
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::N => (-1, 0),
            Direction::Ne => (-1, 1),
            Direction::E => (0, 1),
            Direction::Se => (1, 1),
            Direction::S => (1, 0),
            Direction::Sw => (1, -1),
            Direction::W => (0, -1),
            Direction::Nw => (-1, -1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::N => "n",
            Direction::Ne => "ne",
            Direction::E => "e",
            Direction::Se => "se",
            Direction::S => "s",
            Direction::Sw => "sw",
            Direction::W => "w",
            Direction::Nw => "nw",
        }
    }
}

/// Where a word sits in a grid (0-based row/col of its first letter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

/// Metadata for a result item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    /// Position of the word in the source list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,

    /// Name of the word list the word came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<String>,
}

/// The unified result item that all commands produce
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    pub kind: Kind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,

    /// The pattern the word was tested against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,

    /// Structured payload for commands like `check` and `lists`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    pub source_mode: SourceMode,

    #[serde(default)]
    pub meta: Meta,
}

impl ResultItem {
    fn empty(kind: Kind, source_mode: SourceMode) -> Self {
        Self {
            kind,
            word: None,
            pattern: None,
            placement: None,
            data: None,
            source_mode,
            meta: Meta::default(),
        }
    }

    /// Create an anagram match
    pub fn anagram(word: impl Into<String>, pattern: impl Into<String>) -> Self {
        let mut item = Self::empty(Kind::Match, SourceMode::Anagram);
        item.word = Some(word.into());
        item.pattern = Some(pattern.into());
        item
    }

    /// Create a word-search match
    pub fn placement(word: impl Into<String>, placement: Placement) -> Self {
        let mut item = Self::empty(Kind::Match, SourceMode::WordSearch);
        item.word = Some(word.into());
        item.placement = Some(placement);
        item
    }

    /// Create the outcome of a single anagram check
    pub fn check(pattern: impl Into<String>, word: impl Into<String>, anagram: bool) -> Self {
        let mut item = Self::empty(Kind::Check, SourceMode::Anagram);
        item.word = Some(word.into());
        item.pattern = Some(pattern.into());
        item.data = Some(serde_json::json!({ "anagram": anagram }));
        item
    }

    /// Create a word-list registry entry
    pub fn list(data: serde_json::Value) -> Self {
        let mut item = Self::empty(Kind::List, SourceMode::Registry);
        item.data = Some(data);
        item
    }

    /// Set metadata
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }
}

/// Result set containing multiple result items, in insertion order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    /// Sort by placement (row, col, direction) and then by word.
    ///
    /// Items without a placement keep their relative order after placed ones.
    pub fn sort(&mut self) {
        self.items.sort_by(|a, b| match (&a.placement, &b.placement) {
            (Some(pa), Some(pb)) => (pa.row, pa.col, pa.direction)
                .cmp(&(pb.row, pb.col, pb.direction))
                .then_with(|| a.word.cmp(&b.word)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Words of all items, in order
    pub fn words(&self) -> Vec<&str> {
        self.items.iter().filter_map(|i| i.word.as_deref()).collect()
    }
}

impl FromIterator<ResultItem> for ResultSet {
    fn from_iter<T: IntoIterator<Item = ResultItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
