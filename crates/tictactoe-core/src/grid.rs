//! Bounded, sparse square grid.

use crate::Coordinate;
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur when building or mutating a [`Grid`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid size: {0} (must be positive)")]
    InvalidSize(i32),

    #[error("coordinate {0} is outside the grid")]
    InvalidCoordinate(Coordinate),

    #[error("coordinate {0} is already occupied")]
    CoordinateOccupied(Coordinate),
}

/// A square `size × size` grid mapping coordinates to occupants.
///
/// Only occupied cells are stored. The grid never shrinks: once a cell holds
/// a value it keeps it for the lifetime of the grid.
///
/// The grid is generic over the occupant so it can be exercised with simple
/// stand-in types; the engine uses it with [`Mark`](crate::Mark).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    size: i32,
    values: HashMap<Coordinate, T>,
}

impl<T> Grid<T> {
    /// Creates an empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] if `size` is zero or negative.
    pub fn new(size: i32) -> Result<Self, GridError> {
        if size <= 0 {
            return Err(GridError::InvalidSize(size));
        }
        Ok(Grid {
            size,
            values: HashMap::new(),
        })
    }

    /// Returns the side length.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Returns the total number of cells.
    #[inline]
    pub fn capacity(&self) -> usize {
        // size is positive, so the cast is lossless
        let side = self.size as usize;
        side * side
    }

    /// Returns the number of occupied cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no cell is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if the coordinate lies inside the grid.
    #[inline]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.is_within(self.size)
    }

    /// Returns the occupant at a coordinate, or `None` if the cell is empty.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoordinate`] if the coordinate is outside
    /// the grid.
    pub fn value_at(&self, coordinate: Coordinate) -> Result<Option<&T>, GridError> {
        if !self.contains(coordinate) {
            return Err(GridError::InvalidCoordinate(coordinate));
        }
        Ok(self.values.get(&coordinate))
    }

    /// Places a value at an empty cell.
    ///
    /// Bounds are checked before occupancy. The grid is left untouched on
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoordinate`] if the coordinate is outside
    /// the grid, or [`GridError::CoordinateOccupied`] if the cell already
    /// holds a value.
    pub fn put(&mut self, value: T, coordinate: Coordinate) -> Result<(), GridError> {
        if self.value_at(coordinate)?.is_some() {
            return Err(GridError::CoordinateOccupied(coordinate));
        }
        self.values.insert(coordinate, value);
        Ok(())
    }

    /// Returns true if at least one cell is still empty.
    pub fn has_coordinate_available(&self) -> bool {
        self.values.len() < self.capacity()
    }

    /// Iterates over every coordinate of the grid, row by row.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Coordinate::new(x, y)))
    }

    /// Iterates over the occupied cells in no particular order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coordinate, &T)> {
        self.values.iter().map(|(&c, v)| (c, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    const TEST_SIZE: i32 = 2;

    fn make_grid() -> Grid<Mark> {
        Grid::new(TEST_SIZE).unwrap()
    }

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    const OUTSIDE: [(i32, i32); 6] = [(-1, 0), (0, -1), (-1, -1), (3, 0), (0, 3), (3, 3)];

    #[test]
    fn new_with_positive_size() {
        assert!(Grid::<Mark>::new(3).is_ok());
        assert!(Grid::<Mark>::new(5).is_ok());
        assert!(Grid::<Mark>::new(6).is_ok());
    }

    #[test]
    fn new_with_zero_or_negative_size() {
        for size in [0, -1, -2, -3] {
            assert_eq!(Grid::<Mark>::new(size), Err(GridError::InvalidSize(size)));
        }
    }

    #[test]
    fn initial_state_is_empty() {
        let grid = make_grid();
        assert!(grid.is_empty());
        for coordinate in grid.coordinates() {
            assert_eq!(grid.value_at(coordinate), Ok(None));
        }
    }

    #[test]
    fn value_outside_grid() {
        let grid = make_grid();
        for (x, y) in OUTSIDE {
            assert_eq!(
                grid.value_at(c(x, y)),
                Err(GridError::InvalidCoordinate(c(x, y)))
            );
        }
    }

    #[test]
    fn put_cross() {
        let mut grid = make_grid();
        for coordinate in [c(0, 0), c(1, 0), c(0, 1), c(1, 1)] {
            grid.put(Mark::Cross, coordinate).unwrap();
            assert_eq!(grid.value_at(coordinate), Ok(Some(&Mark::Cross)));
        }
    }

    #[test]
    fn put_nought() {
        let mut grid = make_grid();
        for coordinate in [c(0, 0), c(1, 0), c(0, 1), c(1, 1)] {
            grid.put(Mark::Nought, coordinate).unwrap();
            assert_eq!(grid.value_at(coordinate), Ok(Some(&Mark::Nought)));
        }
    }

    #[test]
    fn put_outside_grid() {
        let mut grid = make_grid();
        for mark in [Mark::Cross, Mark::Nought] {
            for (x, y) in OUTSIDE {
                assert_eq!(
                    grid.put(mark, c(x, y)),
                    Err(GridError::InvalidCoordinate(c(x, y)))
                );
            }
        }
        assert!(grid.is_empty());
    }

    #[test]
    fn put_on_occupied_cell() {
        let mut grid = make_grid();

        grid.put(Mark::Nought, c(0, 0)).unwrap();
        assert_eq!(
            grid.put(Mark::Nought, c(0, 0)),
            Err(GridError::CoordinateOccupied(c(0, 0)))
        );

        grid.put(Mark::Cross, c(1, 0)).unwrap();
        assert_eq!(
            grid.put(Mark::Nought, c(1, 0)),
            Err(GridError::CoordinateOccupied(c(1, 0)))
        );
        assert_eq!(grid.value_at(c(1, 0)), Ok(Some(&Mark::Cross)));
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn availability_tracks_occupancy() {
        let mut grid = make_grid();
        assert!(grid.has_coordinate_available());

        let cells: Vec<_> = grid.coordinates().collect();
        let (last, rest) = cells.split_last().unwrap();
        for &coordinate in rest {
            grid.put(Mark::Cross, coordinate).unwrap();
            assert!(grid.has_coordinate_available());
        }
        grid.put(Mark::Nought, *last).unwrap();
        assert!(!grid.has_coordinate_available());
    }

    #[test]
    fn single_cell_grid() {
        let mut grid = Grid::new(1).unwrap();
        assert_eq!(grid.capacity(), 1);
        grid.put('a', c(0, 0)).unwrap();
        assert!(!grid.has_coordinate_available());
    }

    #[test]
    fn coordinates_row_major() {
        let grid = make_grid();
        let all: Vec<_> = grid.coordinates().collect();
        assert_eq!(all, vec![c(0, 0), c(1, 0), c(0, 1), c(1, 1)]);
    }

    #[test]
    fn occupied_lists_placed_values() {
        let mut grid = Grid::new(3).unwrap();
        grid.put(7u8, c(2, 1)).unwrap();
        let occupied: Vec<_> = grid.occupied().collect();
        assert_eq!(occupied, vec![(c(2, 1), &7u8)]);
    }
}
