//! Grid numbering.
//!
//! Numbering is a pure function of cell colors and positions: a row-major
//! scan with a single counter shared by both orientations. A white square
//! starts an across word when it sits in column 0 or right of a black
//! square, and a down word when it sits in row 0 or below a black square.
//! The counter advances once per start square (even when it starts both
//! words) and its value is propagated along the run as the word's group
//! number.

use crate::model::{Crossword, Grid, Orientation, Square};

/// An all-white, un-numbered grid of `size * size` squares.
pub fn new_grid(size: usize) -> Grid {
    vec![Square::white(); size * size]
}

pub fn is_new_row(index: usize, size: usize) -> bool {
    index % size == 0
}

pub fn is_new_column(index: usize, size: usize) -> bool {
    index < size
}

/// Renumber a crossword's grid. Values, rebus flags and decorations are
/// untouched; prior numbering is discarded.
pub fn renumber(crossword: Crossword) -> Crossword {
    if crossword.grid.is_empty() {
        return crossword;
    }

    let size = crossword.size;
    Crossword {
        grid: number_squares(crossword.grid, size),
        ..crossword
    }
}

/// Number a raw grid in place and return it.
pub fn number_squares(mut grid: Grid, size: usize) -> Grid {
    for square in grid.iter_mut() {
        if let Some(white) = square.as_white_mut() {
            white.across = 0;
            white.down = 0;
            white.number = None;
        }
    }

    let mut number = 0;

    for i in 0..grid.len() {
        if grid[i].is_black() {
            continue;
        }

        let new_across = is_new_row(i, size) || grid[i - 1].is_black();
        let new_down = is_new_column(i, size) || grid[i - size].is_black();

        if !new_across && !new_down {
            continue;
        }

        number += 1;

        if new_across {
            number_word(&mut grid, size, Orientation::Across, i, number);
        }
        if new_down {
            number_word(&mut grid, size, Orientation::Down, i, number);
        }

        if let Some(white) = grid[i].as_white_mut() {
            white.number = Some(number);
        }
    }

    grid
}

/// Propagate a group number along the run starting at `start`, stopping at
/// a black square, the end of the grid, or (across only) the end of the row.
fn number_word(grid: &mut Grid, size: usize, orientation: Orientation, start: usize, number: usize) {
    let step = match orientation {
        Orientation::Across => 1,
        Orientation::Down => size,
    };

    let mut i = start;
    loop {
        match grid[i].as_white_mut() {
            Some(white) => match orientation {
                Orientation::Across => white.across = number,
                Orientation::Down => white.down = number,
            },
            None => break,
        }

        let next = i + step;
        if next >= grid.len() {
            break;
        }
        if orientation == Orientation::Across && is_new_row(next, size) {
            break;
        }
        i = next;
    }
}
