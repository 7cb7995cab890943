use crate::commands::undo::RestoreSquares;
use crate::commands::{CommandExecutionResult, CommandKind, EditorCommand};
use crate::grid::number_squares;
use crate::model::{Crossword, Square};
use crate::reconcile::{reconcile, IndexRemap};

/// Flip the color of the square at `index`, discarding its value.
pub fn toggle_square(index: usize) -> ToggleSquare {
    ToggleSquare {
        index,
        symmetric: false,
    }
}

/// Like [`toggle_square`], but also sets the 180°-rotationally-symmetric
/// square to the same new color, keeping the grid symmetric.
pub fn toggle_square_symmetric(index: usize) -> ToggleSquare {
    ToggleSquare {
        index,
        symmetric: true,
    }
}

#[derive(Debug, Clone)]
pub struct ToggleSquare {
    index: usize,
    symmetric: bool,
}

impl EditorCommand for ToggleSquare {
    fn kind(&self) -> CommandKind {
        CommandKind::ToggleSquare
    }

    fn display_name(&self) -> &'static str {
        "toggle square color"
    }

    fn execute(&self, crossword: Crossword) -> CommandExecutionResult {
        if self.index >= crossword.grid.len() {
            return CommandExecutionResult::NoOperation { crossword };
        }

        let to_black = !crossword.grid[self.index].is_black();

        let mut targets = vec![self.index];
        if self.symmetric {
            let mirror = crossword.size * crossword.size - 1 - self.index;
            if mirror != self.index {
                targets.push(mirror);
            }
        }

        let previous: Vec<(usize, Square)> = targets
            .iter()
            .map(|&i| (i, crossword.grid[i].clone()))
            .collect();

        let old_clues = crossword.clues.clone();
        let mut grid = crossword.grid;
        for &i in &targets {
            grid[i] = if to_black {
                Square::black()
            } else {
                Square::white()
            };
        }

        let mut next = Crossword {
            grid: number_squares(grid, crossword.size),
            size: crossword.size,
            clues: crossword.clues,
            title: crossword.title,
            theme: crossword.theme,
        };

        let (clues, lost_clues) = reconcile(&next, &old_clues, IndexRemap::Identity);
        next.clues = clues;

        CommandExecutionResult::Success {
            crossword: next,
            undo: Box::new(RestoreSquares::new(previous, lost_clues.clone())),
            lost_clues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::resize_grid;
    use crate::model::ClueKey;
    use crate::reconcile::words;

    fn fresh(size: usize) -> Crossword {
        resize_grid(size)
            .execute(Crossword::with_grid(Vec::new(), 0))
            .into_crossword()
    }

    #[test]
    fn rejects_out_of_range_index() {
        let crossword = fresh(3);
        assert!(toggle_square(9).execute(crossword).is_no_operation());
    }

    #[test]
    fn toggles_white_to_black_and_renumbers() {
        let crossword = fresh(3);
        let result = toggle_square(0).execute(crossword);
        assert!(result.is_success());

        let next = result.into_crossword();
        assert!(next.grid[0].is_black());
        // 1-across shrank to [1,2]; its clue set tracks the new groups.
        let map = words(&next);
        assert_eq!(map.across[&1], vec![1, 2]);
        assert_eq!(next.clues.len(), map.len());
    }

    #[test]
    fn toggling_back_discards_the_value() {
        let mut crossword = fresh(3);
        crossword.grid[4].as_white_mut().unwrap().value = "X".to_string();

        let blacked = toggle_square(4).execute(crossword).into_crossword();
        assert!(blacked.grid[4].is_black());

        let whited = toggle_square(4).execute(blacked).into_crossword();
        let white = whited.grid[4].as_white().unwrap();
        assert_eq!(white.value, "");
    }

    #[test]
    fn symmetric_toggle_flips_the_mirror_cell_to_the_same_color() {
        let crossword = fresh(5);
        let next = toggle_square_symmetric(3).execute(crossword).into_crossword();
        assert!(next.grid[3].is_black());
        assert!(next.grid[21].is_black());

        // Toggling a black square symmetrically whitens both ends even if
        // the mirror is already white.
        let back = toggle_square_symmetric(3).execute(next).into_crossword();
        assert!(!back.grid[3].is_black());
        assert!(!back.grid[21].is_black());
    }

    #[test]
    fn symmetric_toggle_of_the_center_touches_one_cell() {
        let crossword = fresh(3);
        let result = toggle_square_symmetric(4).execute(crossword);
        let next = result.into_crossword();
        assert_eq!(
            next.grid.iter().filter(|square| square.is_black()).count(),
            1
        );
    }

    #[test]
    fn lost_clue_text_returns_on_undo() {
        let mut crossword = fresh(3);
        crossword
            .clues
            .get_mut(ClueKey::across(1))
            .unwrap()
            .text = "Top row".to_string();
        let before = crossword.clone();

        let CommandExecutionResult::Success { crossword: next, undo, lost_clues } =
            toggle_square(0).execute(crossword)
        else {
            panic!("expected success");
        };

        // The old 1-across (3 cells) no longer matches any group.
        assert!(lost_clues.get(ClueKey::across(1)).is_some());
        assert_eq!(lost_clues.get(ClueKey::across(1)).unwrap().text, "Top row");

        let restored = undo.execute(next).into_crossword();
        assert_eq!(restored, before);
    }

    #[test]
    fn undo_round_trips_through_redo() {
        let crossword = fresh(5);
        let CommandExecutionResult::Success { crossword: toggled, undo, .. } =
            toggle_square(12).execute(crossword.clone())
        else {
            panic!("expected success");
        };

        let CommandExecutionResult::Success { crossword: restored, undo: redo, .. } =
            undo.execute(toggled.clone())
        else {
            panic!("expected success");
        };
        assert_eq!(restored, crossword);

        let redone = redo.execute(restored).into_crossword();
        assert_eq!(redone, toggled);
    }
}
