// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with: the
//! `Grid` of altitudes which is handed to the library, the identifier of a
//! cell (`NodeId`) and the errors that can be raised while building a grid.

// ----------------------------------------------------------------------------
// --- NODE ID ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The identifier of a node: it indicates the position of the referenced node
/// in the 'nodes' vector of the graph. Because there is exactly one node per
/// grid cell, this is also the row major index `y * width + x` of that cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub usize);
impl NodeId {
    #[inline]
    /// This function returns the numeric value of the identifier.
    ///
    /// # Examples:
    /// ```
    /// # use descent::NodeId;
    /// assert_eq!(0, NodeId(0).id());
    /// assert_eq!(7, NodeId(7).id());
    /// ```
    pub fn id(self) -> usize {
        self.0
    }
}

// ----------------------------------------------------------------------------
// --- ERRORS -----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The errors that can occur when one tries to build a grid (or a graph) from
/// raw dimensions and altitudes. These are the only recoverable errors of the
/// library: any out of bounds access is a programming error and panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The number of altitudes does not match the announced dimensions
    #[error("a {width}x{height} grid needs {expected} altitudes but {actual} were given")]
    DimensionMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    /// One of the rows does not have the same length as the first one
    #[error("row {row} has {actual} altitudes where {expected} were expected")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// The announced dimensions do not even fit in memory
    #[error("a {width}x{height} grid is too large to be represented")]
    TooLarge { width: usize, height: usize },
}

// ----------------------------------------------------------------------------
// --- GRID -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// An immutable rectangular matrix of altitudes. The altitudes are stored in
/// row major order: the altitude of cell `(x, y)` sits at `y * width + x`.
///
/// A grid whose width or height is zero is perfectly valid. It simply has no
/// cell at all (hence, no path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    altitudes: Vec<isize>,
}

impl Grid {
    /// Creates a new grid after having checked that the altitudes cover the
    /// announced dimensions exactly.
    ///
    /// # Examples:
    /// ```
    /// # use descent::Grid;
    /// let grid = Grid::new(3, 1, vec![3, 2, 1]).unwrap();
    /// assert_eq!(2, grid.altitude(1, 0));
    ///
    /// assert!(Grid::new(3, 2, vec![3, 2, 1]).is_err());
    /// ```
    pub fn new(width: usize, height: usize, altitudes: Vec<isize>) -> Result<Self, Error> {
        let expected = width
            .checked_mul(height)
            .ok_or(Error::TooLarge { width, height })?;

        if expected != altitudes.len() {
            return Err(Error::DimensionMismatch {
                width,
                height,
                expected,
                actual: altitudes.len(),
            });
        }
        Ok(Grid { width, height, altitudes })
    }
    /// Creates a grid from a list of rows. This is mostly a convenience for
    /// tests and small hand written maps.
    ///
    /// # Examples:
    /// ```
    /// # use descent::Grid;
    /// let grid = Grid::from_rows(&[vec![4, 3], vec![2, 1]]).unwrap();
    /// assert_eq!((2, 2), (grid.width(), grid.height()));
    /// assert_eq!(2, grid.altitude(0, 1));
    /// ```
    pub fn from_rows(rows: &[Vec<isize>]) -> Result<Self, Error> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(Error::RaggedRow { row, expected: width, actual: r.len() });
        }
        let altitudes = rows.iter().flatten().copied().collect();
        Self::new(width, height, altitudes)
    }
    /// The number of columns
    pub fn width(&self) -> usize {
        self.width
    }
    /// The number of rows
    pub fn height(&self) -> usize {
        self.height
    }
    /// Returns true iff the grid has no cell at all
    pub fn is_empty(&self) -> bool {
        self.altitudes.is_empty()
    }
    /// All altitudes in row major order
    pub fn altitudes(&self) -> &[isize] {
        &self.altitudes
    }
    /// Returns the row major index of the cell `(x, y)`.
    ///
    /// # Panics
    /// When `(x, y)` lies outside of the grid.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        assert!(x < self.width, "x = {} is out of bounds (width = {})", x, self.width);
        assert!(y < self.height, "y = {} is out of bounds (height = {})", y, self.height);
        y * self.width + x
    }
    /// Returns the altitude of cell `(x, y)`.
    ///
    /// # Panics
    /// When `(x, y)` lies outside of the grid.
    #[inline]
    pub fn altitude(&self, x: usize, y: usize) -> isize {
        self.altitudes[self.index(x, y)]
    }
    /// The highest altitude of the grid (None when the grid is empty)
    pub fn max_altitude(&self) -> Option<isize> {
        self.altitudes.iter().copied().max()
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
