use std::collections::{btree_map, BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Smallest editable grid side.
pub const MIN_GRID_SIZE: usize = 3;
/// Largest editable grid side.
pub const MAX_GRID_SIZE: usize = 1000;
/// Side of the grid a fresh editor starts with.
pub const DEFAULT_GRID_SIZE: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Across,
    Down,
}

impl Orientation {
    pub fn opposite(self) -> Self {
        match self {
            Orientation::Across => Orientation::Down,
            Orientation::Down => Orientation::Across,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Across => write!(f, "across"),
            Orientation::Down => write!(f, "down"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareDecoration {
    Circled,
    Shaded,
}

/// A fillable cell. Group numbers are 0 until the grid is numbered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhiteSquare {
    pub value: String,
    pub across: usize,
    pub down: usize,
    pub number: Option<usize>,
    pub decoration: Option<SquareDecoration>,
    pub rebus: bool,
}

impl WhiteSquare {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Square {
    Black,
    White(WhiteSquare),
}

impl Square {
    pub fn white() -> Self {
        Square::White(WhiteSquare::new())
    }

    pub fn black() -> Self {
        Square::Black
    }

    pub fn is_black(&self) -> bool {
        matches!(self, Square::Black)
    }

    pub fn as_white(&self) -> Option<&WhiteSquare> {
        match self {
            Square::Black => None,
            Square::White(square) => Some(square),
        }
    }

    pub fn as_white_mut(&mut self) -> Option<&mut WhiteSquare> {
        match self {
            Square::Black => None,
            Square::White(square) => Some(square),
        }
    }
}

/// Row-major sequence of `size * size` squares.
pub type Grid = Vec<Square>;

/// Identity of a clue: one word group in one orientation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ClueKey {
    pub orientation: Orientation,
    pub number: usize,
}

impl ClueKey {
    pub fn new(orientation: Orientation, number: usize) -> Self {
        Self {
            orientation,
            number,
        }
    }

    pub fn across(number: usize) -> Self {
        Self::new(Orientation::Across, number)
    }

    pub fn down(number: usize) -> Self {
        Self::new(Orientation::Down, number)
    }
}

impl fmt::Display for ClueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.number, self.orientation)
    }
}

/// Associations are weak references: a referenced clue may later disappear,
/// at which point the reconciler drops the reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub text: String,
    pub associations: BTreeSet<ClueKey>,
    pub indices: Vec<usize>,
}

impl Clue {
    /// A fresh clue for a word group that has no prior identity.
    pub fn empty(indices: Vec<usize>) -> Self {
        Self {
            text: String::new(),
            associations: BTreeSet::new(),
            indices,
        }
    }
}

/// All clues of a puzzle, keyed by word-group number per orientation.
///
/// Backed by ordered maps so iteration (and everything derived from it)
/// is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueSet {
    across: BTreeMap<usize, Clue>,
    down: BTreeMap<usize, Clue>,
}

impl ClueSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn lane(&self, orientation: Orientation) -> &BTreeMap<usize, Clue> {
        match orientation {
            Orientation::Across => &self.across,
            Orientation::Down => &self.down,
        }
    }

    fn lane_mut(&mut self, orientation: Orientation) -> &mut BTreeMap<usize, Clue> {
        match orientation {
            Orientation::Across => &mut self.across,
            Orientation::Down => &mut self.down,
        }
    }

    pub fn get(&self, key: ClueKey) -> Option<&Clue> {
        self.lane(key.orientation).get(&key.number)
    }

    pub fn get_mut(&mut self, key: ClueKey) -> Option<&mut Clue> {
        self.lane_mut(key.orientation).get_mut(&key.number)
    }

    pub fn insert(&mut self, key: ClueKey, clue: Clue) -> Option<Clue> {
        self.lane_mut(key.orientation).insert(key.number, clue)
    }

    pub fn remove(&mut self, key: ClueKey) -> Option<Clue> {
        self.lane_mut(key.orientation).remove(&key.number)
    }

    pub fn contains(&self, key: ClueKey) -> bool {
        self.lane(key.orientation).contains_key(&key.number)
    }

    pub fn len(&self) -> usize {
        self.across.len() + self.down.len()
    }

    pub fn is_empty(&self) -> bool {
        self.across.is_empty() && self.down.is_empty()
    }

    /// All clues in one orientation, ordered by number.
    pub fn orientation(&self, orientation: Orientation) -> &BTreeMap<usize, Clue> {
        self.lane(orientation)
    }

    /// Across clues first, then down, each ordered by number.
    pub fn iter(&self) -> impl Iterator<Item = (ClueKey, &Clue)> + '_ {
        self.iter_lane(Orientation::Across)
            .chain(self.iter_lane(Orientation::Down))
    }

    pub fn keys(&self) -> impl Iterator<Item = ClueKey> + '_ {
        self.iter().map(|(key, _)| key)
    }

    fn iter_lane(&self, orientation: Orientation) -> ClueLaneIter<'_> {
        ClueLaneIter {
            orientation,
            inner: self.lane(orientation).iter(),
        }
    }
}

struct ClueLaneIter<'a> {
    orientation: Orientation,
    inner: btree_map::Iter<'a, usize, Clue>,
}

impl<'a> Iterator for ClueLaneIter<'a> {
    type Item = (ClueKey, &'a Clue);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(&number, clue)| (ClueKey::new(self.orientation, number), clue))
    }
}

/// The single unit of value passed between commands. Commands never mutate
/// a crossword in place; each produces a new one, so previous versions stay
/// valid for anyone still holding them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crossword {
    pub grid: Grid,
    pub size: usize,
    pub clues: ClueSet,
    pub title: Option<String>,
    pub theme: Option<String>,
}

impl Crossword {
    pub fn with_grid(grid: Grid, size: usize) -> Self {
        Self {
            grid,
            size,
            clues: ClueSet::new(),
            title: None,
            theme: None,
        }
    }
}
