//! # Editor Facade
//!
//! [`Editor`] is the single entry point UIs drive. It owns the current
//! crossword and the undo/redo history, and runs the control loop around
//! commands:
//!
//! - `execute` runs a fresh command; on success it adopts the new
//!   crossword, pushes the command's inverse onto the undo stack and
//!   clears the redo stack.
//! - `undo`/`redo` pop a command from one stack, execute it, and push the
//!   inverse it returns onto the other stack.
//!
//! A rejected command (`NoOperation`) changes nothing and is never
//! recorded. The facade contains no editing logic of its own; everything
//! lives in `commands`.

use uuid::Uuid;

use crate::commands::{CommandExecutionResult, EditorCommand};
use crate::config::GridzConfig;
use crate::error::Result;
use crate::grid::{new_grid, number_squares};
use crate::history::History;
use crate::model::{
    ClueSet, Crossword, Grid, MAX_GRID_SIZE, MIN_GRID_SIZE,
};
use crate::reconcile::{reconcile, words, IndexRemap, WordMap};
use crate::store::{PuzzleStore, SavedPuzzle};

/// What a call to `execute`/`undo`/`redo` did.
#[derive(Debug)]
pub enum ExecuteOutcome {
    Applied {
        /// Clues whose word group did not survive; see the reconciler.
        lost_clues: ClueSet,
    },
    /// The command (or an empty history stack) declined to act.
    Rejected,
}

impl ExecuteOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ExecuteOutcome::Applied { .. })
    }

    pub fn lost_clues(&self) -> Option<&ClueSet> {
        match self {
            ExecuteOutcome::Applied { lost_clues } => Some(lost_clues),
            ExecuteOutcome::Rejected => None,
        }
    }
}

pub struct Editor {
    crossword: Crossword,
    history: History,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// A fresh all-white puzzle using default configuration.
    pub fn new() -> Self {
        Self::with_config(&GridzConfig::default())
    }

    pub fn with_config(config: &GridzConfig) -> Self {
        let size = config.default_size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
        let mut crossword =
            Crossword::with_grid(number_squares(new_grid(size), size), size);
        let (clues, _) = reconcile(&crossword, &ClueSet::new(), IndexRemap::Identity);
        crossword.clues = clues;

        Self {
            crossword,
            history: History::with_capacity(config.history_capacity),
        }
    }

    /// Adopt an existing crossword, normalizing it on the way in: a zero
    /// size is derived from the grid length, the grid is renumbered, and
    /// clues are re-keyed to the fresh numbering.
    pub fn load(crossword: Crossword) -> Self {
        let mut crossword = crossword;
        if crossword.size == 0 && !crossword.grid.is_empty() {
            let len = crossword.grid.len();
            let mut size = len.isqrt();
            if size * size < len {
                size += 1;
            }
            crossword.size = size;
        }

        if !crossword.grid.is_empty() {
            crossword.grid = number_squares(crossword.grid, crossword.size);
            let (clues, _) =
                reconcile(&crossword, &crossword.clues, IndexRemap::Identity);
            crossword.clues = clues;
        }

        Self {
            crossword,
            history: History::new(),
        }
    }

    /// Run a fresh command. On success the redo stack is invalidated.
    pub fn execute(&mut self, command: &dyn EditorCommand) -> ExecuteOutcome {
        let current = std::mem::take(&mut self.crossword);
        match command.execute(current) {
            CommandExecutionResult::Success {
                crossword,
                undo,
                lost_clues,
            } => {
                debug_assert_eq!(crossword.grid.len(), crossword.size * crossword.size);
                self.crossword = crossword;
                self.history.push_undo(undo);
                self.history.clear_redo();
                ExecuteOutcome::Applied { lost_clues }
            }
            CommandExecutionResult::NoOperation { crossword } => {
                self.crossword = crossword;
                ExecuteOutcome::Rejected
            }
        }
    }

    pub fn undo(&mut self) -> ExecuteOutcome {
        let Some(command) = self.history.pop_undo() else {
            return ExecuteOutcome::Rejected;
        };

        let current = std::mem::take(&mut self.crossword);
        match command.execute(current) {
            CommandExecutionResult::Success {
                crossword,
                undo,
                lost_clues,
            } => {
                self.crossword = crossword;
                self.history.push_redo(undo);
                ExecuteOutcome::Applied { lost_clues }
            }
            CommandExecutionResult::NoOperation { crossword } => {
                self.crossword = crossword;
                ExecuteOutcome::Rejected
            }
        }
    }

    pub fn redo(&mut self) -> ExecuteOutcome {
        let Some(command) = self.history.pop_redo() else {
            return ExecuteOutcome::Rejected;
        };

        let current = std::mem::take(&mut self.crossword);
        match command.execute(current) {
            CommandExecutionResult::Success {
                crossword,
                undo,
                lost_clues,
            } => {
                self.crossword = crossword;
                self.history.push_undo(undo);
                ExecuteOutcome::Applied { lost_clues }
            }
            CommandExecutionResult::NoOperation { crossword } => {
                self.crossword = crossword;
                ExecuteOutcome::Rejected
            }
        }
    }

    pub fn crossword(&self) -> &Crossword {
        &self.crossword
    }

    pub fn grid(&self) -> &Grid {
        &self.crossword.grid
    }

    pub fn size(&self) -> usize {
        self.crossword.size
    }

    pub fn clues(&self) -> &ClueSet {
        &self.crossword.clues
    }

    pub fn words(&self) -> WordMap {
        words(&self.crossword)
    }

    pub fn title(&self) -> Option<&str> {
        self.crossword.title.as_deref()
    }

    pub fn theme(&self) -> Option<&str> {
        self.crossword.theme.as_deref()
    }

    // Title and theme are not structural edits; they bypass history.
    pub fn set_title(&mut self, title: Option<String>) {
        self.crossword.title = title;
    }

    pub fn set_theme(&mut self, theme: Option<String>) {
        self.crossword.theme = theme;
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Open a stored puzzle in a fresh editing session.
    pub fn open<S: PuzzleStore>(store: &S, id: &Uuid) -> Result<Self> {
        let saved = store.get_puzzle(id)?;
        Ok(Self::load(saved.crossword))
    }

    /// Save the current crossword as a new stored puzzle.
    pub fn save_as<S: PuzzleStore>(
        &self,
        store: &mut S,
        title: impl Into<String>,
    ) -> Result<Uuid> {
        let puzzle = SavedPuzzle::new(title.into(), self.crossword.clone());
        let id = puzzle.metadata.id;
        store.save_puzzle(&puzzle)?;
        Ok(id)
    }
}
