use std::collections::HashMap;

use uuid::Uuid;

use super::{Metadata, PuzzleStore, SavedPuzzle};
use crate::error::{GridzError, Result};

/// In-memory store for tests and previews. No persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    puzzles: HashMap<Uuid, SavedPuzzle>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}

impl PuzzleStore for InMemoryStore {
    fn save_puzzle(&mut self, puzzle: &SavedPuzzle) -> Result<()> {
        self.puzzles.insert(puzzle.metadata.id, puzzle.clone());
        Ok(())
    }

    fn get_puzzle(&self, id: &Uuid) -> Result<SavedPuzzle> {
        self.puzzles
            .get(id)
            .cloned()
            .ok_or(GridzError::PuzzleNotFound(*id))
    }

    fn list_puzzles(&self) -> Result<Vec<Metadata>> {
        let mut all: Vec<Metadata> = self
            .puzzles
            .values()
            .map(|puzzle| puzzle.metadata.clone())
            .collect();
        all.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(all)
    }

    fn delete_puzzle(&mut self, id: &Uuid) -> Result<()> {
        self.puzzles
            .remove(id)
            .map(|_| ())
            .ok_or(GridzError::PuzzleNotFound(*id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{resize_grid, EditorCommand};
    use crate::model::Crossword;

    #[test]
    fn save_get_delete() {
        let mut store = InMemoryStore::new();
        let crossword = resize_grid(3)
            .execute(Crossword::with_grid(Vec::new(), 0))
            .into_crossword();
        let puzzle = SavedPuzzle::new("test".to_string(), crossword);

        store.save_puzzle(&puzzle).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_puzzle(&puzzle.metadata.id).unwrap(), puzzle);

        store.delete_puzzle(&puzzle.metadata.id).unwrap();
        assert!(store.is_empty());
        assert!(store.get_puzzle(&puzzle.metadata.id).is_err());
    }
}
