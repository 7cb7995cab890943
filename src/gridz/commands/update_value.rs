use crate::commands::{CommandExecutionResult, CommandKind, EditorCommand};
use crate::model::{Crossword, Square};

/// Set the value of the white square at `index`. Text is uppercased;
/// anything longer than one character marks the square as a rebus. The
/// grid's geometry is untouched, so no renumbering happens.
pub fn update_value(index: usize, text: impl Into<String>) -> UpdateValue {
    UpdateValue {
        index,
        text: text.into(),
    }
}

#[derive(Debug, Clone)]
pub struct UpdateValue {
    index: usize,
    text: String,
}

impl EditorCommand for UpdateValue {
    fn kind(&self) -> CommandKind {
        CommandKind::UpdateValue
    }

    fn display_name(&self) -> &'static str {
        "update value"
    }

    fn execute(&self, crossword: Crossword) -> CommandExecutionResult {
        let previous = match crossword.grid.get(self.index) {
            Some(Square::White(white)) => white.value.clone(),
            _ => return CommandExecutionResult::NoOperation { crossword },
        };

        let mut crossword = crossword;
        if let Some(white) = crossword.grid[self.index].as_white_mut() {
            white.value = self.text.to_uppercase();
            white.rebus = white.value.chars().count() > 1;
        }

        let undo = Box::new(update_value(self.index, previous));
        CommandExecutionResult::success(crossword, undo)
    }
}
