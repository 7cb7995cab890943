//! Editor commands.
//!
//! A command is a value describing one edit. Executing it consumes the
//! current crossword and either produces a new one together with its
//! inverse command (`Success`) or hands the input back untouched
//! (`NoOperation`). Inverses are commands themselves: executing one yields
//! the state it replaced *and* its own inverse, so undo and redo stay
//! symmetric all the way down.
//!
//! Structural commands (resize, toggle) renumber the grid and reconcile
//! the clue set before returning; pure field updates (value, clue text)
//! leave the geometry alone.

use std::fmt;

use crate::model::{ClueSet, Crossword};

pub mod resize;
pub mod toggle_square;
pub mod undo;
pub mod update_clue;
pub mod update_value;

pub use resize::resize_grid;
pub use toggle_square::{toggle_square, toggle_square_symmetric};
pub use update_clue::{update_clue_associations, update_clue_text};
pub use update_value::update_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    ResizeGrid,
    ToggleSquare,
    UpdateValue,
    UpdateClueText,
    UpdateClueAssociations,
}

pub trait EditorCommand: fmt::Debug {
    fn kind(&self) -> CommandKind;
    fn display_name(&self) -> &'static str;
    fn execute(&self, crossword: Crossword) -> CommandExecutionResult;
}

#[derive(Debug)]
pub enum CommandExecutionResult {
    Success {
        crossword: Crossword,
        undo: Box<dyn EditorCommand>,
        /// Clues whose word group did not survive the edit. Their text is
        /// preserved here; the inverse command knows how to bring them back.
        lost_clues: ClueSet,
    },
    /// Rejected or no-effect input. The crossword is handed back unchanged
    /// and nothing may be pushed to history.
    NoOperation { crossword: Crossword },
}

impl CommandExecutionResult {
    pub(crate) fn success(crossword: Crossword, undo: Box<dyn EditorCommand>) -> Self {
        CommandExecutionResult::Success {
            crossword,
            undo,
            lost_clues: ClueSet::new(),
        }
    }

    pub fn crossword(&self) -> &Crossword {
        match self {
            CommandExecutionResult::Success { crossword, .. } => crossword,
            CommandExecutionResult::NoOperation { crossword } => crossword,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CommandExecutionResult::Success { .. })
    }

    pub fn is_no_operation(&self) -> bool {
        matches!(self, CommandExecutionResult::NoOperation { .. })
    }

    pub fn into_crossword(self) -> Crossword {
        match self {
            CommandExecutionResult::Success { crossword, .. } => crossword,
            CommandExecutionResult::NoOperation { crossword } => crossword,
        }
    }
}
