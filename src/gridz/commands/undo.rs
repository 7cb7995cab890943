//! Inverse commands.
//!
//! Mutators build these to reverse themselves. Each one, when executed,
//! captures enough of the state it replaces to produce its own inverse, so
//! an undo can always be redone.

use crate::commands::{CommandExecutionResult, CommandKind, EditorCommand};
use crate::grid::number_squares;
use crate::model::{ClueSet, Crossword, Square};
use crate::reconcile::{reconcile, IndexRemap};

/// Restores a complete prior crossword. Used where the forward command is
/// lossy (shrinking resize) and no structural inverse exists.
#[derive(Debug, Clone)]
pub struct RestoreSnapshot {
    snapshot: Crossword,
    kind: CommandKind,
}

impl RestoreSnapshot {
    pub(crate) fn new(snapshot: Crossword, kind: CommandKind) -> Self {
        Self { snapshot, kind }
    }
}

impl EditorCommand for RestoreSnapshot {
    fn kind(&self) -> CommandKind {
        self.kind
    }

    fn display_name(&self) -> &'static str {
        "restore snapshot"
    }

    fn execute(&self, crossword: Crossword) -> CommandExecutionResult {
        let undo = Box::new(RestoreSnapshot::new(crossword, self.kind));
        CommandExecutionResult::success(self.snapshot.clone(), undo)
    }
}

/// Puts previously toggled squares back by identity, renumbers, and merges
/// the clues the toggle had lost back over their revived groups.
#[derive(Debug, Clone)]
pub struct RestoreSquares {
    squares: Vec<(usize, Square)>,
    lost: ClueSet,
}

impl RestoreSquares {
    pub(crate) fn new(squares: Vec<(usize, Square)>, lost: ClueSet) -> Self {
        Self { squares, lost }
    }
}

impl EditorCommand for RestoreSquares {
    fn kind(&self) -> CommandKind {
        CommandKind::ToggleSquare
    }

    fn display_name(&self) -> &'static str {
        "restore square color"
    }

    fn execute(&self, crossword: Crossword) -> CommandExecutionResult {
        if self
            .squares
            .iter()
            .any(|&(i, _)| i >= crossword.grid.len())
        {
            return CommandExecutionResult::NoOperation { crossword };
        }

        let previous: Vec<(usize, Square)> = self
            .squares
            .iter()
            .map(|&(i, _)| (i, crossword.grid[i].clone()))
            .collect();

        let old_clues = crossword.clues.clone();
        let mut grid = crossword.grid;
        for (i, square) in &self.squares {
            grid[*i] = square.clone();
        }

        let mut next = Crossword {
            grid: number_squares(grid, crossword.size),
            size: crossword.size,
            clues: crossword.clues,
            title: crossword.title,
            theme: crossword.theme,
        };

        let (mut clues, lost_now) = reconcile(&next, &old_clues, IndexRemap::Identity);

        // A saved clue comes back only when its exact group exists again.
        for (key, saved) in self.lost.iter() {
            let revived = clues
                .get(key)
                .is_some_and(|slot| slot.indices == saved.indices);
            if revived {
                clues.insert(key, saved.clone());
            }
        }
        next.clues = clues;

        CommandExecutionResult::Success {
            crossword: next,
            undo: Box::new(RestoreSquares::new(previous, lost_now.clone())),
            lost_clues: lost_now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::resize_grid;

    fn fresh(size: usize) -> Crossword {
        resize_grid(size)
            .execute(Crossword::with_grid(Vec::new(), 0))
            .into_crossword()
    }

    #[test]
    fn snapshot_restore_is_symmetric() {
        let a = fresh(3);
        let b = fresh(5);

        let restore = RestoreSnapshot::new(a.clone(), CommandKind::ResizeGrid);
        assert_eq!(restore.kind(), CommandKind::ResizeGrid);

        let CommandExecutionResult::Success { crossword, undo, .. } =
            restore.execute(b.clone())
        else {
            panic!("expected success");
        };
        assert_eq!(crossword, a);
        assert_eq!(undo.kind(), CommandKind::ResizeGrid);

        let back = undo.execute(crossword).into_crossword();
        assert_eq!(back, b);
    }

    #[test]
    fn restore_squares_rejects_stale_indices() {
        let crossword = fresh(3);
        let restore = RestoreSquares::new(vec![(40, Square::black())], ClueSet::new());
        assert!(restore.execute(crossword).is_no_operation());
    }
}
