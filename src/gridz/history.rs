//! Bounded undo/redo stacks.
//!
//! The history owns inverse commands, not crosswords: undoing pops a
//! command and executes it against the current state. Both stacks evict
//! their oldest entry past capacity, so an editing session's memory use is
//! bounded no matter how long it runs.

use std::collections::VecDeque;

use crate::commands::EditorCommand;

pub const DEFAULT_HISTORY_CAPACITY: usize = 1000;

#[derive(Debug)]
pub struct History {
    undo: VecDeque<Box<dyn EditorCommand>>,
    redo: VecDeque<Box<dyn EditorCommand>>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push_undo(&mut self, command: Box<dyn EditorCommand>) {
        self.undo.push_back(command);
        while self.undo.len() > self.capacity {
            self.undo.pop_front();
        }
    }

    pub fn pop_undo(&mut self) -> Option<Box<dyn EditorCommand>> {
        self.undo.pop_back()
    }

    pub fn push_redo(&mut self, command: Box<dyn EditorCommand>) {
        self.redo.push_back(command);
        while self.redo.len() > self.capacity {
            self.redo.pop_front();
        }
    }

    pub fn pop_redo(&mut self) -> Option<Box<dyn EditorCommand>> {
        self.redo.pop_back()
    }

    /// A fresh successful command invalidates everything undone so far.
    pub fn clear_redo(&mut self) {
        self.redo.clear();
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::update_value;

    #[test]
    fn starts_empty() {
        let history = History::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.capacity(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn pops_in_reverse_push_order() {
        let mut history = History::new();
        history.push_undo(Box::new(update_value(0, "A")));
        history.push_undo(Box::new(update_value(1, "B")));

        assert_eq!(history.undo_len(), 2);
        let _ = history.pop_undo().unwrap();
        assert_eq!(history.undo_len(), 1);
    }

    #[test]
    fn evicts_oldest_beyond_capacity() {
        let mut history = History::with_capacity(3);
        for i in 0..5 {
            history.push_undo(Box::new(update_value(i, "A")));
        }
        assert_eq!(history.undo_len(), 3);
    }

    #[test]
    fn clear_redo_empties_only_the_redo_stack() {
        let mut history = History::new();
        history.push_undo(Box::new(update_value(0, "A")));
        history.push_redo(Box::new(update_value(1, "B")));

        history.clear_redo();
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn capacity_of_zero_is_clamped() {
        let history = History::with_capacity(0);
        assert_eq!(history.capacity(), 1);
    }
}
