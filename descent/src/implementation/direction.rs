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

//! This module provides the projection of a path onto turn by turn
//! directions. It has no bearing on the computation of the longest path.

use std::fmt;

use crate::Node;

/// The direction of one single move between two orthogonally adjacent nodes.
///
/// # Note
/// The y axis grows towards the north: moving from row `y` to row `y + 1`
/// is a move to the North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Returns the direction one must take to move from `from` to `to`.
    ///
    /// # Examples:
    /// ```
    /// # use descent::*;
    /// let a = Node { id: NodeId(0), x: 0, y: 0, altitude: 2 };
    /// let b = Node { id: NodeId(1), x: 1, y: 0, altitude: 1 };
    /// assert_eq!(Direction::East, Direction::between(&a, &b));
    /// assert_eq!(Direction::West, Direction::between(&b, &a));
    /// ```
    pub fn between(from: &Node, to: &Node) -> Direction {
        debug_assert!(from.is_adjacent_to(to), "{:?} and {:?} are not adjacent", from, to);
        if to.y > from.y {
            Direction::North
        } else if to.y < from.y {
            Direction::South
        } else if to.x > from.x {
            Direction::East
        } else {
            Direction::West
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East  => "East",
            Direction::West  => "West",
        };
        f.write_str(name)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_direction {
    use crate::{Direction, Node, NodeId};

    fn at(x: usize, y: usize) -> Node {
        Node { id: NodeId(0), x, y, altitude: 0 }
    }

    #[test]
    fn growing_y_is_north() {
        assert_eq!(Direction::North, Direction::between(&at(3, 3), &at(3, 4)));
    }
    #[test]
    fn shrinking_y_is_south() {
        assert_eq!(Direction::South, Direction::between(&at(3, 3), &at(3, 2)));
    }
    #[test]
    fn growing_x_is_east() {
        assert_eq!(Direction::East, Direction::between(&at(3, 3), &at(4, 3)));
    }
    #[test]
    fn shrinking_x_is_west() {
        assert_eq!(Direction::West, Direction::between(&at(3, 3), &at(2, 3)));
    }
    #[test]
    fn display_uses_the_compass_names() {
        let names = [Direction::North, Direction::South, Direction::East, Direction::West]
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>();
        assert_eq!(vec!["North", "South", "East", "West"], names);
    }
}
