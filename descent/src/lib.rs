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

//! # Descent
//! Descent finds the longest strictly descending path through a rectangular
//! grid of altitudes. Starting from any cell, a skier may only move to one of
//! the four orthogonally adjacent cells, and only if that cell is strictly
//! lower than the current one. Among all the paths one could follow, the best
//! one is the path visiting the most cells; when several paths visit the same
//! number of cells, the one with the steepest overall descent (altitude of the
//! first cell minus altitude of the last one) is preferred.
//!
//! Because every move goes strictly down, the moves form a directed acyclic
//! graph (the `Graph`). The best path of a node only depends on the best
//! paths of its lower neighbours, which is why it is computed once per node
//! and memoized by the path finders.
//!
//! ## Side benefit
//! As a side benefit, the `ParallelPathFinder` lets you exploit all of your
//! hardware to solve huge grids. It always yields the very same answer as the
//! `SequentialPathFinder`.
//!
//! ## Quick Example
//! ```
//! # use descent::*;
//! #
//! // 1. Describe the terrain (row major, one vector per row)
//! let grid = Grid::from_rows(&[
//!     vec![4, 8, 7, 3],
//!     vec![2, 5, 9, 3],
//!     vec![6, 3, 2, 5],
//!     vec![4, 4, 1, 6],
//! ]).unwrap();
//! // 2. Build the graph of all descending moves
//! let graph = Graph::new(&grid);
//! // 3. Pick a path finder (use ParallelPathFinder::new to go parallel)
//! let finder = SequentialPathFinder::new(&graph);
//! // 4. Find the best path. This is None only for an empty grid.
//! let best = finder.find_best_path().unwrap();
//!
//! assert_eq!(5, best.steps());
//! assert_eq!(8, best.descent());
//! assert_eq!((2, 1), (best.start().x, best.start().y));
//!
//! // 5. Do whatever you like with it
//! for direction in best.directions() {
//!     println!("{direction}");
//! }
//! ```
//!
//! ## Going further
//! The `PathFinder` trait is the abstraction you will want to look at first.
//! It tells what you can ask an engine (the best path of one node, the best
//! path of the whole graph) and documents the rules used to break ties.

mod common;
mod abstraction;
mod implementation;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
