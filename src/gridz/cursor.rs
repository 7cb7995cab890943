//! Pure cursor index arithmetic.
//!
//! Only the math lives here: converting between flat indices and
//! coordinates, and stepping a cursor one cell at a time inside the grid.
//! Navigation policy (skipping black squares, wrapping, jumping between
//! words) belongs to the UI driving the editor.

use serde::{Deserialize, Serialize};

use crate::model::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    Down,
    Right,
}

impl Direction {
    /// The orientation a movement in this direction implies.
    pub fn orientation(self) -> Orientation {
        match self {
            Direction::Up | Direction::Down => Orientation::Down,
            Direction::Left | Direction::Right => Orientation::Across,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorState {
    pub orientation: Orientation,
    pub index: usize,
}

pub fn to_xy(index: usize, size: usize) -> (usize, usize) {
    (index % size, index / size)
}

pub fn is_at_movement_bound(direction: Direction, size: usize, x: usize, y: usize) -> bool {
    match direction {
        Direction::Left => x == 0,
        Direction::Up => y == 0,
        Direction::Right => x >= size - 1,
        Direction::Down => y >= size - 1,
    }
}

/// Step the cursor one cell. A move across the grain first reorients the
/// cursor in place; a move at the grid edge leaves it where it is.
pub fn move_cursor(direction: Direction, size: usize, cursor: CursorState) -> CursorState {
    let target = direction.orientation();
    if cursor.orientation != target {
        return CursorState {
            orientation: target,
            ..cursor
        };
    }

    let (x, y) = to_xy(cursor.index, size);
    if is_at_movement_bound(direction, size, x, y) {
        return cursor;
    }

    let index = match direction {
        Direction::Left => cursor.index - 1,
        Direction::Right => cursor.index + 1,
        Direction::Up => cursor.index - size,
        Direction::Down => cursor.index + size,
    };

    CursorState { index, ..cursor }
}
