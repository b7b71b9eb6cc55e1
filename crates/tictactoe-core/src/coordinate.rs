//! Grid cell addressing.

use std::fmt;

/// A cell address on the grid, zero-indexed.
///
/// `x` is the column and `y` is the row. A coordinate carries no knowledge of
/// the grid it is used with, so it may lie outside any particular grid; the
/// [`Grid`](crate::Grid) is what enforces bounds.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// Creates a coordinate from column and row.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }

    /// Returns true if both components lie in `0..size`.
    #[inline]
    pub const fn is_within(self, size: i32) -> bool {
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Coordinate::new(x, y)
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
