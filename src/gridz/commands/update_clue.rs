use std::collections::BTreeSet;

use crate::commands::{CommandExecutionResult, CommandKind, EditorCommand};
use crate::model::{ClueKey, Crossword, Orientation};

/// Replace the text of the clue at `(orientation, number)`.
pub fn update_clue_text(
    orientation: Orientation,
    number: usize,
    text: impl Into<String>,
) -> UpdateClueText {
    UpdateClueText {
        key: ClueKey::new(orientation, number),
        text: text.into(),
    }
}

#[derive(Debug, Clone)]
pub struct UpdateClueText {
    key: ClueKey,
    text: String,
}

impl EditorCommand for UpdateClueText {
    fn kind(&self) -> CommandKind {
        CommandKind::UpdateClueText
    }

    fn display_name(&self) -> &'static str {
        "update clue"
    }

    fn execute(&self, crossword: Crossword) -> CommandExecutionResult {
        let previous = match crossword.clues.get(self.key) {
            Some(clue) => clue.text.clone(),
            None => return CommandExecutionResult::NoOperation { crossword },
        };

        let mut crossword = crossword;
        if let Some(clue) = crossword.clues.get_mut(self.key) {
            clue.text = self.text.clone();
        }

        let undo = Box::new(UpdateClueText {
            key: self.key,
            text: previous,
        });
        CommandExecutionResult::success(crossword, undo)
    }
}

/// Replace the cross-reference set of the clue at `(orientation, number)`.
/// Self-references and keys with no clue behind them are filtered out.
pub fn update_clue_associations(
    orientation: Orientation,
    number: usize,
    associations: BTreeSet<ClueKey>,
) -> UpdateClueAssociations {
    UpdateClueAssociations {
        key: ClueKey::new(orientation, number),
        associations,
    }
}

#[derive(Debug, Clone)]
pub struct UpdateClueAssociations {
    key: ClueKey,
    associations: BTreeSet<ClueKey>,
}

impl EditorCommand for UpdateClueAssociations {
    fn kind(&self) -> CommandKind {
        CommandKind::UpdateClueAssociations
    }

    fn display_name(&self) -> &'static str {
        "update clue references"
    }

    fn execute(&self, crossword: Crossword) -> CommandExecutionResult {
        let previous = match crossword.clues.get(self.key) {
            Some(clue) => clue.associations.clone(),
            None => return CommandExecutionResult::NoOperation { crossword },
        };

        let filtered: BTreeSet<ClueKey> = self
            .associations
            .iter()
            .copied()
            .filter(|&target| target != self.key && crossword.clues.contains(target))
            .collect();

        let mut crossword = crossword;
        if let Some(clue) = crossword.clues.get_mut(self.key) {
            clue.associations = filtered;
        }

        let undo = Box::new(UpdateClueAssociations {
            key: self.key,
            associations: previous,
        });
        CommandExecutionResult::success(crossword, undo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::resize_grid;
    use crate::model::Crossword;

    fn fresh(size: usize) -> Crossword {
        resize_grid(size)
            .execute(Crossword::with_grid(Vec::new(), 0))
            .into_crossword()
    }

    #[test]
    fn rejects_unknown_keys() {
        let crossword = fresh(3);
        let result = update_clue_text(Orientation::Across, 99, "?").execute(crossword);
        assert!(result.is_no_operation());
    }

    #[test]
    fn replaces_clue_text() {
        let next = update_clue_text(Orientation::Across, 1, "Top row")
            .execute(fresh(3))
            .into_crossword();
        assert_eq!(next.clues.get(ClueKey::across(1)).unwrap().text, "Top row");
    }

    #[test]
    fn undo_restores_the_prior_text() {
        let crossword = update_clue_text(Orientation::Down, 2, "old")
            .execute(fresh(3))
            .into_crossword();
        let before = crossword.clone();

        let CommandExecutionResult::Success { crossword: next, undo, .. } =
            update_clue_text(Orientation::Down, 2, "new").execute(crossword)
        else {
            panic!("expected success");
        };
        assert_eq!(next.clues.get(ClueKey::down(2)).unwrap().text, "new");

        let restored = undo.execute(next).into_crossword();
        assert_eq!(restored, before);
    }

    #[test]
    fn associations_filter_unknown_and_self_targets() {
        let wanted: BTreeSet<ClueKey> =
            [ClueKey::across(1), ClueKey::across(99), ClueKey::down(2)]
                .into_iter()
                .collect();

        let next = update_clue_associations(Orientation::Across, 1, wanted)
            .execute(fresh(3))
            .into_crossword();

        let stored = &next.clues.get(ClueKey::across(1)).unwrap().associations;
        assert!(stored.contains(&ClueKey::down(2)));
        assert!(!stored.contains(&ClueKey::across(1)));
        assert!(!stored.contains(&ClueKey::across(99)));
    }

    #[test]
    fn association_undo_round_trips() {
        let crossword = fresh(3);
        let before = crossword.clone();

        let wanted: BTreeSet<ClueKey> = [ClueKey::down(3)].into_iter().collect();
        let CommandExecutionResult::Success { crossword: next, undo, .. } =
            update_clue_associations(Orientation::Across, 4, wanted).execute(crossword)
        else {
            panic!("expected success");
        };

        let restored = undo.execute(next).into_crossword();
        assert_eq!(restored, before);
    }
}
