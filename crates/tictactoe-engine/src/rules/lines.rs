//! Line-based win detection: rows, columns and the two diagonals.

use super::GameRules;
use tictactoe_core::{Coordinate, Grid, Mark};

/// Wins by filling a whole line with one mark.
///
/// Lines are checked in order and the first complete one decides the winner.
/// For a generated rule set that order is rows top to bottom, then columns
/// left to right, then the main diagonal, then the anti-diagonal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRules {
    lines: Vec<Vec<Coordinate>>,
}

impl LineRules {
    /// Creates a rule set from an explicit list of lines.
    pub fn new(lines: Vec<Vec<Coordinate>>) -> Self {
        LineRules { lines }
    }

    /// Generates the `2 * size + 2` standard lines for a `size × size` grid.
    ///
    /// A non-positive size yields no lines.
    pub fn for_size(size: i32) -> Self {
        if size <= 0 {
            return LineRules { lines: Vec::new() };
        }

        let mut lines = Vec::with_capacity(2 * size as usize + 2);
        for y in 0..size {
            lines.push((0..size).map(|x| Coordinate::new(x, y)).collect());
        }
        for x in 0..size {
            lines.push((0..size).map(|y| Coordinate::new(x, y)).collect());
        }
        lines.push((0..size).map(|i| Coordinate::new(i, i)).collect());
        lines.push((0..size).map(|i| Coordinate::new(size - 1 - i, i)).collect());

        LineRules { lines }
    }

    /// Returns the lines in evaluation order.
    pub fn lines(&self) -> &[Vec<Coordinate>] {
        &self.lines
    }

    /// Returns the mark filling the whole line, if there is one.
    ///
    /// Empty lines, lines with an empty cell, and lines reaching outside the
    /// grid never qualify.
    fn line_owner(grid: &Grid<Mark>, line: &[Coordinate]) -> Option<Mark> {
        let (first, rest) = line.split_first()?;
        let candidate = *grid.value_at(*first).ok()??;
        rest.iter()
            .all(|&c| matches!(grid.value_at(c), Ok(Some(&mark)) if mark == candidate))
            .then_some(candidate)
    }
}

impl GameRules for LineRules {
    fn winner(&self, grid: &Grid<Mark>) -> Option<Mark> {
        self.lines
            .iter()
            .find_map(|line| Self::line_owner(grid, line))
    }
}
