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

//! This module provides the implementation of a sequential path finder. That
//! is a path finder which computes the best path of the nodes using one single
//! thread of execution, lazily, as the best paths are being asked for.
//!
//! The search is a memoized depth first search. It does not recurse though:
//! it unrolls the exploration on an explicit stack so that a descent crossing
//! the whole grid never exhausts the call stack.

use std::cell::OnceCell;

use crate::{Graph, NodeId, PathFinder, PathValue};

use super::{select_best_link, BestLink};

/// One item of the exploration stack
#[derive(Debug, Clone, Copy)]
enum Visit {
    /// The node must be examined: its neighbours still need to be resolved
    Enter(NodeId),
    /// All neighbours of the node have been resolved: pick the best one
    Leave(NodeId),
}

/// This is the structure implementing a single threaded, lazy path finder.
///
/// # Example
/// ```
/// # use descent::*;
/// let grid   = Grid::from_rows(&[vec![3, 2, 1]]).unwrap();
/// let graph  = Graph::new(&grid);
/// let finder = SequentialPathFinder::new(&graph);
///
/// let best = finder.find_best_path().unwrap();
/// assert_eq!(3, best.steps());
/// assert_eq!(2, best.descent());
/// ```
pub struct SequentialPathFinder<'a> {
    /// The graph being explored
    graph: &'a Graph,
    /// The write-once slot of each node (indexed by node id)
    memo: Vec<OnceCell<BestLink>>,
}

impl<'a> SequentialPathFinder<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        let mut memo = Vec::with_capacity(graph.nb_nodes());
        memo.resize_with(graph.nb_nodes(), OnceCell::new);
        SequentialPathFinder { graph, memo }
    }

    /// Returns the number of nodes whose best path has already been computed
    pub fn nb_resolved(&self) -> usize {
        self.memo.iter().filter(|slot| slot.get().is_some()).count()
    }

    /// Returns the memoized link of `node`, exploring the part of the graph
    /// below `node` when it has not been resolved yet.
    fn link(&self, node: NodeId) -> BestLink {
        assert!(node.0 < self.memo.len(), "{:?} is out of bounds ({} nodes)", node, self.memo.len());
        match self.memo[node.0].get() {
            Some(link) => *link,
            None => self.explore(node),
        }
    }

    /// Resolves `root` and every node reachable from it that has not been
    /// resolved yet. A node is only resolved after all of its neighbours,
    /// which is always possible since the graph is acyclic.
    fn explore(&self, root: NodeId) -> BestLink {
        let mut stack = vec![Visit::Enter(root)];
        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(node) => {
                    if self.memo[node.0].get().is_some() {
                        continue;
                    }
                    stack.push(Visit::Leave(node));
                    // reversed so that the neighbours are visited in the
                    // order of the adjacency list
                    for &next in self.graph.neighbours(node).iter().rev() {
                        if self.memo[next.0].get().is_none() {
                            stack.push(Visit::Enter(next));
                        }
                    }
                },
                Visit::Leave(node) => {
                    self.resolve(node);
                },
            }
        }
        self.resolve(root)
    }

    /// Fills the slot of `node` (unless already done) assuming that all of
    /// its neighbours are resolved.
    fn resolve(&self, node: NodeId) -> BestLink {
        *self.memo[node.0].get_or_init(|| {
            select_best_link(self.graph, node, |next| self.link(next).value)
        })
    }
}

impl PathFinder for SequentialPathFinder<'_> {
    fn graph(&self) -> &Graph {
        self.graph
    }

    fn best_value_from(&self, node: NodeId) -> PathValue {
        self.link(node).value
    }

    fn successor(&self, node: NodeId) -> Option<NodeId> {
        self.link(node).next
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
