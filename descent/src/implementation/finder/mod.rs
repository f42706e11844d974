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

//! This module provides the path engines. Both of them memoize the best link
//! of each node in a write-once slot and both use the very same selection
//! routine (`select_best_link`) so that they always agree on the answer.
mod sequential;
mod parallel;

pub use sequential::*;
pub use parallel::*;

use compare::Compare;

use crate::{Graph, NodeId, PathRanking, PathValue};

/// What gets memoized for each node: the value of its best descending path
/// and the identifier of the next node on that path (None for a terminal
/// node). The path itself is rebuilt by following the successors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BestLink {
    value: PathValue,
    next: Option<NodeId>,
}

impl BestLink {
    /// The best link of a node from where one cannot go any lower
    const TERMINAL: BestLink = BestLink { value: PathValue::SINGLE_NODE, next: None };
}

/// Selects the best way down from `node`. The neighbours are examined in the
/// order of the adjacency list and a candidate only replaces the incumbent
/// when it is strictly greater (first seen wins ties). The function `below`
/// must yield the value of the best path of a neighbour.
fn select_best_link<F>(graph: &Graph, node: NodeId, mut below: F) -> BestLink
where F: FnMut(NodeId) -> PathValue
{
    let altitude = graph.node(node).altitude;
    let mut best = BestLink::TERMINAL;
    for &next in graph.neighbours(node) {
        let next_altitude = graph.node(next).altitude;
        debug_assert!(next_altitude < altitude, "{:?} -> {:?} is not a descending edge", node, next);

        let tail = below(next);
        let candidate = PathValue {
            steps: tail.steps + 1,
            descent: tail.descent + altitude.abs_diff(next_altitude),
        };
        if PathRanking.compares_gt(&candidate, &best.value) {
            best = BestLink { value: candidate, next: Some(next) };
        }
    }
    best
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_select_best_link {
    use crate::{Graph, Grid, NodeId, PathValue};

    use super::{select_best_link, BestLink};

    fn graph(rows: &[Vec<isize>]) -> Graph {
        Graph::new(&Grid::from_rows(rows).unwrap())
    }

    #[test]
    fn a_node_without_neighbour_is_terminal() {
        let g = graph(&[vec![5]]);
        let link = select_best_link(&g, NodeId(0), |_| unreachable!());
        assert_eq!(BestLink::TERMINAL, link);
    }
    #[test]
    fn the_longest_tail_wins() {
        let g = graph(&[vec![1, 9, 8]]);
        let link = select_best_link(&g, NodeId(1), |n| match n.0 {
            0 => PathValue { steps: 1, descent: 0 },
            2 => PathValue { steps: 3, descent: 1 },
            _ => unreachable!(),
        });
        assert_eq!(Some(NodeId(2)), link.next);
        assert_eq!(PathValue { steps: 4, descent: 2 }, link.value);
    }
    #[test]
    fn descent_breaks_ties_between_tails() {
        // west drop is 8, east drop is 1
        let g = graph(&[vec![1, 9, 8]]);
        let link = select_best_link(&g, NodeId(1), |_| PathValue { steps: 2, descent: 1 });
        assert_eq!(Some(NodeId(0)), link.next);
        assert_eq!(PathValue { steps: 3, descent: 9 }, link.value);
    }
    #[test]
    fn the_first_neighbour_wins_an_exact_tie() {
        let g = graph(&[vec![3, 4, 3]]);
        let link = select_best_link(&g, NodeId(1), |_| PathValue::SINGLE_NODE);
        assert_eq!(Some(NodeId(0)), link.next);
    }
}
