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

//! This module defines the `Path` value type along with its ranking key
//! (`PathValue`) and the one and only comparison used to rank descending
//! paths (`PathRanking`).

use std::cmp::Ordering;

use compare::Compare;

use crate::{Direction, Node};

// ----------------------------------------------------------------------------
// --- PATH VALUE -------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The key on which descending paths are ranked: first the number of steps
/// (nodes visited), then the total altitude descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathValue {
    /// The number of nodes visited by the path (always >= 1)
    pub steps: usize,
    /// The difference between the altitude of the first and the last node
    pub descent: usize,
}
impl PathValue {
    /// The value of a path that does not go anywhere: it only visits its
    /// start node.
    pub const SINGLE_NODE: PathValue = PathValue { steps: 1, descent: 0 };

    /// This is THE comparison of descending paths: the one with more steps
    /// is greater; when both have the same number of steps, the one with the
    /// bigger descent is greater. Otherwise they are equal (interchangeable).
    ///
    /// # Examples:
    /// ```
    /// # use std::cmp::Ordering;
    /// # use descent::PathValue;
    /// let long  = PathValue { steps: 5, descent: 1 };
    /// let steep = PathValue { steps: 3, descent: 99 };
    /// assert_eq!(Ordering::Greater, long.compare(&steep));
    ///
    /// let steeper = PathValue { steps: 5, descent: 2 };
    /// assert_eq!(Ordering::Less, long.compare(&steeper));
    /// ```
    #[inline]
    pub fn compare(&self, other: &PathValue) -> Ordering {
        self.steps.cmp(&other.steps)
            .then_with(|| self.descent.cmp(&other.descent))
    }
}

// ----------------------------------------------------------------------------
// --- PATH RANKING -----------------------------------------------------------
// ----------------------------------------------------------------------------
/// This is a zero sized adapter exposing the ranking of descending paths as
/// a `Compare` object. All selections (best neighbour of a node, best node of
/// the graph) are made through this ranking so that the tie-break rule can
/// never differ from one call site to the other.
///
/// # Example
/// ```
/// # use descent::*;
/// use compare::Compare;
///
/// let a = PathValue { steps: 3, descent: 3 };
/// let b = PathValue { steps: 3, descent: 2 };
/// assert!(PathRanking.compares_gt(&a, &b));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PathRanking;

impl Compare<PathValue> for PathRanking {
    fn compare(&self, l: &PathValue, r: &PathValue) -> Ordering {
        l.compare(r)
    }
}
impl Compare<Path> for PathRanking {
    fn compare(&self, l: &Path, r: &Path) -> Ordering {
        l.value().compare(&r.value())
    }
}

// ----------------------------------------------------------------------------
// --- PATH -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A path is the ordered sequence of nodes visited when skiing from a start
/// node down to a terminal node (a node from where one cannot descend any
/// further). A path is never empty, and the altitude strictly decreases from
/// one node to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<Node>,
}

impl Path {
    /// Creates a new path from the given sequence of nodes.
    ///
    /// # Panics
    /// If the sequence is empty. In debug builds, this also checks that the
    /// nodes are orthogonally adjacent and strictly descending.
    pub fn new(nodes: Vec<Node>) -> Self {
        assert!(!nodes.is_empty(), "a path visits at least one node");
        debug_assert!(nodes.windows(2).all(|w| w[0].altitude > w[1].altitude));
        debug_assert!(nodes.windows(2).all(|w| w[0].is_adjacent_to(&w[1])));
        Path { nodes }
    }
    /// The nodes of this path, from the start to the terminal node
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
    /// The node where the path starts
    pub fn start(&self) -> Node {
        self.nodes[0]
    }
    /// The node where the path ends (a local minimum)
    pub fn end(&self) -> Node {
        self.nodes[self.nodes.len() - 1]
    }
    /// The number of nodes visited along the path
    pub fn steps(&self) -> usize {
        self.nodes.len()
    }
    /// The total altitude drop between the start and the end of the path
    pub fn descent(&self) -> usize {
        self.start().altitude.abs_diff(self.end().altitude)
    }
    /// The ranking key of this path
    pub fn value(&self) -> PathValue {
        PathValue { steps: self.steps(), descent: self.descent() }
    }
    /// The turn by turn directions one must follow to ski down this path.
    /// There is one direction less than there are nodes.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.nodes.windows(2).map(|w| Direction::between(&w[0], &w[1]))
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
