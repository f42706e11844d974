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

//! This module defines the `PathFinder` trait.

use compare::Compare;

use crate::{Graph, NodeId, Path, PathRanking, PathValue};

/// This is the path engine abstraction. It is implemented by the structures
/// that compute, for every node of a `Graph`, the best descending path that
/// starts at that node.
///
/// The best path of a node is the greatest of its candidate paths under
/// `PathRanking` (more steps first, then more descent). The candidates of a
/// node are examined in the order of its outgoing edges (west, east, north,
/// south) and the first one wins a tie. A node without outgoing edge is a
/// terminal node: its best path only visits the node itself.
///
/// Any implementation must memoize the outcome of each node: the best path
/// of a node is computed at most once, and asking twice for the same node
/// yields the same answer.
pub trait PathFinder {
    /// The graph whose paths are being searched
    fn graph(&self) -> &Graph;

    /// Returns the value (steps, descent) of the best descending path that
    /// starts at `node`, without materializing the path itself.
    ///
    /// # Panics
    /// When `node` does not belong to the graph.
    fn best_value_from(&self, node: NodeId) -> PathValue;

    /// Returns the node following `node` on its best descending path, or
    /// None when `node` is a terminal node.
    ///
    /// # Panics
    /// When `node` does not belong to the graph.
    fn successor(&self, node: NodeId) -> Option<NodeId>;

    /// Returns the best descending path that starts at `node`.
    ///
    /// # Panics
    /// When `node` does not belong to the graph.
    fn best_path_from(&self, node: NodeId) -> Path {
        let graph = self.graph();
        let steps = self.best_value_from(node).steps;

        let mut nodes = Vec::with_capacity(steps);
        let mut current = Some(node);
        while let Some(id) = current {
            nodes.push(graph.node(id));
            current = self.successor(id);
        }
        Path::new(nodes)
    }

    /// Scans all the nodes of the graph in row major order and returns the
    /// best of their best paths. When several nodes are tied, the first one
    /// encountered is kept. This returns None iff the graph has no node.
    fn find_best_path(&self) -> Option<Path> {
        let graph = self.graph();
        let mut best: Option<(NodeId, PathValue)> = None;
        for node in graph.nodes() {
            let value = self.best_value_from(node.id);
            match best {
                Some((_, incumbent)) if !PathRanking.compares_gt(&value, &incumbent) => {},
                _ => best = Some((node.id, value)),
            }
        }
        best.map(|(id, _)| self.best_path_from(id))
    }
}
