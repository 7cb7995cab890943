use crate::commands::undo::RestoreSnapshot;
use crate::commands::{CommandExecutionResult, CommandKind, EditorCommand};
use crate::grid::{new_grid, number_squares};
use crate::model::{Crossword, MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::reconcile::{reconcile, IndexRemap};

/// Resize the grid to `new_size` x `new_size`, keeping the overlapping
/// top-left region. Shrinking is lossy, so the inverse restores a full
/// pre-resize snapshot.
pub fn resize_grid(new_size: usize) -> ResizeGrid {
    ResizeGrid { new_size }
}

#[derive(Debug, Clone)]
pub struct ResizeGrid {
    new_size: usize,
}

impl EditorCommand for ResizeGrid {
    fn kind(&self) -> CommandKind {
        CommandKind::ResizeGrid
    }

    fn display_name(&self) -> &'static str {
        "resize grid"
    }

    fn execute(&self, crossword: Crossword) -> CommandExecutionResult {
        let previous_size = crossword.size;
        let target_length = self.new_size * self.new_size;

        if self.new_size < MIN_GRID_SIZE || self.new_size > MAX_GRID_SIZE {
            return CommandExecutionResult::NoOperation { crossword };
        }

        // First allocation of an empty puzzle is an initialization, not an
        // edit: it must never land in history.
        if crossword.grid.is_empty() {
            let mut next = Crossword {
                grid: number_squares(new_grid(self.new_size), self.new_size),
                size: self.new_size,
                ..crossword
            };
            let (clues, _) = reconcile(&next, &next.clues, IndexRemap::Identity);
            next.clues = clues;
            return CommandExecutionResult::NoOperation { crossword: next };
        }

        if self.new_size == previous_size && crossword.grid.len() == target_length {
            return CommandExecutionResult::NoOperation { crossword };
        }

        let snapshot = crossword.clone();

        let kept = previous_size.min(self.new_size);
        let mut grid = new_grid(self.new_size);
        for row in 0..kept {
            for col in 0..kept {
                grid[row * self.new_size + col] =
                    crossword.grid[row * previous_size + col].clone();
            }
        }

        let mut next = Crossword {
            grid: number_squares(grid, self.new_size),
            size: self.new_size,
            ..crossword
        };

        let remap = IndexRemap::Resize {
            old_size: previous_size,
            new_size: self.new_size,
        };
        let (clues, lost_clues) = reconcile(&next, &snapshot.clues, remap);
        next.clues = clues;

        CommandExecutionResult::Success {
            crossword: next,
            undo: Box::new(RestoreSnapshot::new(snapshot, CommandKind::ResizeGrid)),
            lost_clues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClueKey, Square};
    use crate::reconcile::words;

    fn fresh(size: usize) -> Crossword {
        resize_grid(size)
            .execute(Crossword::with_grid(Vec::new(), 0))
            .into_crossword()
    }

    #[test]
    fn rejects_out_of_range_sizes() {
        let crossword = fresh(5);
        assert!(resize_grid(2).execute(crossword.clone()).is_no_operation());
        assert!(resize_grid(1001).execute(crossword).is_no_operation());
    }

    #[test]
    fn resize_to_current_size_is_a_no_op() {
        let crossword = fresh(5);
        let result = resize_grid(5).execute(crossword.clone());
        assert!(result.is_no_operation());
        assert_eq!(result.crossword(), &crossword);
    }

    #[test]
    fn empty_grid_is_initialized_without_history() {
        let result = resize_grid(5).execute(Crossword::with_grid(Vec::new(), 0));
        assert!(result.is_no_operation());

        let crossword = result.into_crossword();
        assert_eq!(crossword.size, 5);
        assert_eq!(crossword.grid.len(), 25);
        assert_eq!(crossword.clues.len(), words(&crossword).len());
    }

    #[test]
    fn growing_keeps_the_old_region() {
        let mut crossword = fresh(3);
        crossword.grid[4] = Square::black();
        crossword.grid[0].as_white_mut().unwrap().value = "A".to_string();
        let crossword = crate::grid::renumber(crossword);

        let result = resize_grid(5).execute(crossword);
        assert!(result.is_success());
        let next = result.into_crossword();

        assert_eq!(next.size, 5);
        assert_eq!(next.grid.len(), 25);
        assert_eq!(next.grid[0].as_white().unwrap().value, "A");
        // Old (1,1) lands at index 6 in the 5x5 grid.
        assert!(next.grid[6].is_black());
    }

    #[test]
    fn shrinking_reports_clues_outside_the_window_as_lost() {
        let mut crossword = fresh(5);
        let keys: Vec<ClueKey> = crossword.clues.keys().collect();
        for key in keys {
            crossword.clues.get_mut(key).unwrap().text = format!("{key}");
        }

        let result = resize_grid(3).execute(crossword);
        let CommandExecutionResult::Success {
            crossword: next,
            lost_clues,
            ..
        } = result
        else {
            panic!("expected success");
        };

        assert_eq!(next.size, 3);
        // All-white 5x5 words are 5 long; nothing survives a shrink to 3.
        assert_eq!(lost_clues.len(), 10);
        assert_eq!(next.clues.len(), words(&next).len());
    }

    #[test]
    fn undo_restores_the_exact_snapshot() {
        let mut crossword = fresh(5);
        crossword.grid[7] = Square::black();
        crossword.grid[3].as_white_mut().unwrap().value = "Z".to_string();
        let crossword = crate::grid::renumber(crossword);
        let before = crossword.clone();

        let CommandExecutionResult::Success { crossword: next, undo, .. } =
            resize_grid(3).execute(crossword)
        else {
            panic!("expected success");
        };

        let CommandExecutionResult::Success { crossword: restored, undo: redo, .. } =
            undo.execute(next.clone())
        else {
            panic!("expected success");
        };
        assert_eq!(restored, before);

        // Redo is itself a snapshot restore of the post-resize state.
        let CommandExecutionResult::Success { crossword: again, .. } =
            redo.execute(restored)
        else {
            panic!("expected success");
        };
        assert_eq!(again, next);
    }
}
