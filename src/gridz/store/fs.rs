use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::{Metadata, PuzzleStore, SavedPuzzle};
use crate::error::{GridzError, Result};
use crate::model::Crossword;

const DATA_FILENAME: &str = "data.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn puzzle_path(&self, id: &Uuid) -> PathBuf {
        self.root.join(format!("puzzle-{id}.json"))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }

    fn load_metadata(&self) -> Result<HashMap<Uuid, Metadata>> {
        let data_file = self.root.join(DATA_FILENAME);
        if !data_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(data_file)?;
        let meta: HashMap<Uuid, Metadata> = serde_json::from_str(&content)?;
        Ok(meta)
    }

    fn save_metadata(&self, meta: &HashMap<Uuid, Metadata>) -> Result<()> {
        let data_file = self.root.join(DATA_FILENAME);
        let content = serde_json::to_string_pretty(meta)?;
        fs::write(data_file, content)?;
        Ok(())
    }
}

impl PuzzleStore for FileStore {
    fn save_puzzle(&mut self, puzzle: &SavedPuzzle) -> Result<()> {
        self.ensure_root()?;

        let mut meta_map = self.load_metadata()?;
        meta_map.insert(puzzle.metadata.id, puzzle.metadata.clone());
        self.save_metadata(&meta_map)?;

        let content = serde_json::to_string_pretty(&puzzle.crossword)?;
        fs::write(self.puzzle_path(&puzzle.metadata.id), content)?;

        Ok(())
    }

    fn get_puzzle(&self, id: &Uuid) -> Result<SavedPuzzle> {
        let meta_map = self.load_metadata()?;
        let metadata = meta_map
            .get(id)
            .ok_or(GridzError::PuzzleNotFound(*id))?
            .clone();

        let path = self.puzzle_path(id);
        if !path.exists() {
            return Err(GridzError::Store(format!(
                "Missing puzzle file for {id}"
            )));
        }
        let content = fs::read_to_string(path)?;
        let crossword: Crossword = serde_json::from_str(&content)?;

        Ok(SavedPuzzle {
            metadata,
            crossword,
        })
    }

    fn list_puzzles(&self) -> Result<Vec<Metadata>> {
        let meta_map = self.load_metadata()?;
        let mut all: Vec<Metadata> = meta_map.into_values().collect();
        all.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(all)
    }

    fn delete_puzzle(&mut self, id: &Uuid) -> Result<()> {
        let mut meta_map = self.load_metadata()?;
        if meta_map.remove(id).is_none() {
            return Err(GridzError::PuzzleNotFound(*id));
        }
        self.save_metadata(&meta_map)?;

        let path = self.puzzle_path(id);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
