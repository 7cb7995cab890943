//! Word groups and clue identity across mutations.
//!
//! A word group's identity is its exact ordered list of cell indices. When
//! a structural edit reshapes the grid, every old clue either finds a group
//! with exactly its (remapped) indices, and is retained under the group's
//! new number with its text intact, or it is reported lost. Lost clues are
//! never discarded here; the caller decides whether to archive them or
//! offer them back (toggle undo restores them).
//!
//! Exact matching is deliberate: matching by closest overlap can alias two
//! old clues onto one new group and silently merge user text.

use std::collections::{BTreeMap, HashMap};

use crate::model::{Clue, ClueKey, ClueSet, Crossword, Orientation};

/// Word groups of a numbered grid: group number to ordered member indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordMap {
    pub across: BTreeMap<usize, Vec<usize>>,
    pub down: BTreeMap<usize, Vec<usize>>,
}

impl WordMap {
    fn lane(&self, orientation: Orientation) -> &BTreeMap<usize, Vec<usize>> {
        match orientation {
            Orientation::Across => &self.across,
            Orientation::Down => &self.down,
        }
    }

    pub fn get(&self, key: ClueKey) -> Option<&Vec<usize>> {
        self.lane(key.orientation).get(&key.number)
    }

    pub fn len(&self) -> usize {
        self.across.len() + self.down.len()
    }

    pub fn is_empty(&self) -> bool {
        self.across.is_empty() && self.down.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = ClueKey> + '_ {
        let across = self
            .across
            .keys()
            .map(|&number| ClueKey::across(number));
        let down = self.down.keys().map(|&number| ClueKey::down(number));
        across.chain(down)
    }

    /// A word is complete when every member square holds a value.
    pub fn is_complete(&self, crossword: &Crossword, key: ClueKey) -> bool {
        self.get(key).is_some_and(|indices| {
            indices.iter().all(|&i| {
                crossword.grid[i]
                    .as_white()
                    .is_some_and(|white| !white.value.is_empty())
            })
        })
    }
}

/// Extract the word groups from a numbered grid. The row-major walk keeps
/// each group's index list ordered.
pub fn words(crossword: &Crossword) -> WordMap {
    let mut map = WordMap::default();

    for (i, square) in crossword.grid.iter().enumerate() {
        if let Some(white) = square.as_white() {
            map.across.entry(white.across).or_default().push(i);
            map.down.entry(white.down).or_default().push(i);
        }
    }

    map
}

/// How a structural transform moved cell indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexRemap {
    /// Geometry unchanged (square toggles).
    Identity,
    /// Row/column-preserving copy between grids of different sizes. Cells
    /// outside the shared `min(old, new)` square have no image.
    Resize { old_size: usize, new_size: usize },
}

impl IndexRemap {
    pub fn map(self, index: usize) -> Option<usize> {
        match self {
            IndexRemap::Identity => Some(index),
            IndexRemap::Resize { old_size, new_size } => {
                let row = index / old_size;
                let col = index % old_size;
                let kept = old_size.min(new_size);
                if row < kept && col < kept {
                    Some(row * new_size + col)
                } else {
                    None
                }
            }
        }
    }
}

/// Rebuild the clue set for a freshly numbered grid.
///
/// Returns `(new_clues, lost_clues)`. Every group in the grid gets exactly
/// one clue; every old clue lands in exactly one of the two sets. Retained
/// clues keep their text and follow their group to its new number; their
/// associations are rewritten to the surviving targets' new keys, dangling
/// ones dropped. Lost clues keep their pre-mutation keys verbatim.
pub fn reconcile(
    numbered: &Crossword,
    old_clues: &ClueSet,
    remap: IndexRemap,
) -> (ClueSet, ClueSet) {
    let groups = words(numbered);

    let mut across_lookup: HashMap<&[usize], usize> = HashMap::new();
    for (&number, indices) in &groups.across {
        across_lookup.insert(indices.as_slice(), number);
    }
    let mut down_lookup: HashMap<&[usize], usize> = HashMap::new();
    for (&number, indices) in &groups.down {
        down_lookup.insert(indices.as_slice(), number);
    }

    let mut lost = ClueSet::new();
    let mut retained: Vec<(ClueKey, ClueKey, &Clue)> = Vec::new();
    let mut key_map: BTreeMap<ClueKey, ClueKey> = BTreeMap::new();

    for (old_key, clue) in old_clues.iter() {
        let mapped: Option<Vec<usize>> =
            clue.indices.iter().map(|&i| remap.map(i)).collect();

        let new_number = mapped.as_deref().and_then(|indices| {
            match old_key.orientation {
                Orientation::Across => across_lookup.get(indices),
                Orientation::Down => down_lookup.get(indices),
            }
            .copied()
        });

        match new_number {
            Some(number) => {
                let new_key = ClueKey::new(old_key.orientation, number);
                key_map.insert(old_key, new_key);
                retained.push((old_key, new_key, clue));
            }
            None => {
                lost.insert(old_key, clue.clone());
            }
        }
    }

    let mut new_clues = ClueSet::new();

    for (_, new_key, clue) in retained {
        let indices = groups
            .get(new_key)
            .cloned()
            .unwrap_or_else(|| clue.indices.clone());
        let associations = clue
            .associations
            .iter()
            .filter_map(|target| key_map.get(target).copied())
            .collect();

        let previous = new_clues.insert(
            new_key,
            Clue {
                text: clue.text.clone(),
                associations,
                indices,
            },
        );
        debug_assert!(previous.is_none(), "clue key collision at {new_key}");
    }

    for key in groups.keys() {
        if !new_clues.contains(key) {
            let indices = groups.get(key).cloned().unwrap_or_default();
            new_clues.insert(key, Clue::empty(indices));
        }
    }

    (new_clues, lost)
}
