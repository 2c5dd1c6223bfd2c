//! A simple 2d grid type
//! Backed by an ndarray in row-major order, so row 0 is the first row of the
//! underlying slice and the slice can be handed straight to an image buffer.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt;

use super::vectors::RowColVector;

/// A simple 2d grid type
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T>(ndarray::Array2<T>);

/* =================
 * Initialization
 * ================= */
impl<T> Grid<T> {
    /// Create a new grid filled with one value
    pub fn new_fill(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self(ndarray::Array2::from_elem((height, width), value))
    }
}

/* ======================================
 * Simple Getters
 * Access basic attributes of the struct
 * ====================================== */
impl<T> Grid<T> {
    /// Get the width of the grid, the number of columns
    pub fn get_width(&self) -> usize {
        self.0.ncols()
    }
    /// Get the height of the grid, the number of rows
    pub fn get_height(&self) -> usize {
        self.0.nrows()
    }
    /// True if the coordinate lies inside the grid
    pub fn contains(&self, idx: RowColVector) -> bool {
        idx.row < self.get_height() && idx.col < self.get_width()
    }
}

/// Defines when the user has simply exceeded the bounds of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOutOfBoundsError(pub RowColVector);
impl fmt::Display for GridOutOfBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} went outside the constraints of grid", self.0)
    }
}
impl std::error::Error for GridOutOfBoundsError {}

/* ======================================
 * Position Based Getters
 * Access data at a position
 * ====================================== */
impl<T> Grid<T> {
    /// Gets the value at the given coordinate, or None if the coordinate is out of bounds
    pub fn get(&self, idx: RowColVector) -> Option<&T> {
        self.0.get([idx.row, idx.col])
    }
    /// Gets the value at the given coordinate, mutably
    pub fn get_mut(&mut self, idx: RowColVector) -> Option<&mut T> {
        self.0.get_mut([idx.row, idx.col])
    }
    /// Like set, but gives you ownership of the original value
    pub fn replace(&mut self, idx: RowColVector, replacement: T) -> Result<T, GridOutOfBoundsError> {
        let cell = self.get_mut(idx).ok_or(GridOutOfBoundsError(idx))?;
        Ok(std::mem::replace(cell, replacement))
    }
    /// Sets the value at the given coordinate, overwriting the old value
    pub fn set(&mut self, idx: RowColVector, value: T) -> Result<(), GridOutOfBoundsError> {
        self.replace(idx, value).map(|_| ())
    }
    /// Swaps two cells. Both must be in bounds.
    pub fn swap(&mut self, a: RowColVector, b: RowColVector) -> Result<(), GridOutOfBoundsError> {
        for idx in [a, b] {
            if !self.contains(idx) {
                return Err(GridOutOfBoundsError(idx));
            }
        }
        self.0.swap([a.row, a.col], [b.row, b.col]);
        Ok(())
    }
    /// Overwrite every cell with the given value
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.0.fill(value);
    }
}

/// Iteration, row by row starting from the top
impl<T> Grid<T> {
    /// Get an iterator over the grid
    pub fn iter(&self) -> ndarray::iter::Iter<'_, T, ndarray::Ix2> {
        self.0.iter()
    }

    /// Get a mutable iterator over the grid
    pub fn iter_mut(&mut self) -> ndarray::iter::IterMut<'_, T, ndarray::Ix2> {
        self.0.iter_mut()
    }

    /// Iterate over every cell along with its coordinate
    pub fn indexed_iter(&self) -> impl Iterator<Item = (RowColVector, &T)> {
        self.0
            .indexed_iter()
            .map(|((row, col), value)| (RowColVector { row, col }, value))
    }
}
