//! # Storage Layer
//!
//! The editor core never touches the filesystem; persistence is a
//! collaborator behind the [`PuzzleStore`] trait. The only requirement the
//! core places on an encoding is that it round-trips every `Crossword`
//! field losslessly, since snapshot undo depends on exact reconstruction.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON file storage
//!   - Metadata for all puzzles in `data.json`
//!   - Each crossword in its own `puzzle-{uuid}.json`
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!
//! Metadata and crosswords are stored separately so listing puzzles does
//! not deserialize every grid.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::model::Crossword;

pub mod fs;
pub mod memory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
}

impl Metadata {
    pub fn new(title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPuzzle {
    pub metadata: Metadata,
    pub crossword: Crossword,
}

impl SavedPuzzle {
    pub fn new(title: String, crossword: Crossword) -> Self {
        Self {
            metadata: Metadata::new(title),
            crossword,
        }
    }

    /// Record a new revision of the crossword.
    pub fn update(&mut self, crossword: Crossword) {
        self.crossword = crossword;
        self.metadata.updated_at = Utc::now();
    }
}

/// Abstract interface for puzzle storage.
pub trait PuzzleStore {
    /// Save a puzzle (create or update)
    fn save_puzzle(&mut self, puzzle: &SavedPuzzle) -> Result<()>;

    /// Get a puzzle by ID
    fn get_puzzle(&self, id: &Uuid) -> Result<SavedPuzzle>;

    /// List metadata for all stored puzzles, newest first
    fn list_puzzles(&self) -> Result<Vec<Metadata>>;

    /// Delete a puzzle permanently
    fn delete_puzzle(&mut self, id: &Uuid) -> Result<()>;
}
