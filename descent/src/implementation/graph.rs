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

//! This module provides the graph of descending moves that is built from a
//! grid of altitudes. The graph is a DAG by construction: an edge always
//! leads to a node of strictly lower altitude.
//!
//! The graph is stored in a handful of flat vectors (nodes, edge ranges and
//! edge targets) rather than as a web of pointers. Nodes are referenced by
//! their `NodeId`, which is nothing but their position in the 'nodes' vector.

use tracing::debug;

use crate::{Error, Grid, NodeId};

/// Represents one cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node {
    /// The identifier of this node (`y * width + x`)
    pub id: NodeId,
    /// The column of the cell
    pub x: usize,
    /// The row of the cell
    pub y: usize,
    /// The altitude of the cell
    pub altitude: isize,
}
impl Node {
    /// Returns true iff `other` is one of the four orthogonal neighbours of
    /// this node.
    pub fn is_adjacent_to(&self, other: &Node) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

/// Identifies the slice of the 'edges' vector that holds the outgoing edges
/// of one node.
#[derive(Debug, Clone, Copy)]
struct EdgeRange {
    from: usize,
    to: usize,
}

/// The graph of all descending moves on a grid.
///
/// The outgoing edges of a node are always listed in the same fixed order:
/// **west, east, north (y - 1), south (y + 1)**. That order matters since it
/// decides which neighbour wins when two candidate paths are tied.
#[derive(Debug, Clone)]
pub struct Graph {
    /// The number of columns of the underlying grid
    width: usize,
    /// The number of rows of the underlying grid
    height: usize,
    /// All the nodes of the graph, in row major order
    nodes: Vec<Node>,
    /// For each node, the range of its outgoing edges in 'edges'
    outbound: Vec<EdgeRange>,
    /// The destination of all edges, grouped by source node
    edges: Vec<NodeId>,
}

impl Graph {
    /// Builds the graph of descending moves of the given grid.
    ///
    /// # Examples:
    /// ```
    /// # use descent::*;
    /// let grid  = Grid::from_rows(&[vec![3, 2, 1]]).unwrap();
    /// let graph = Graph::new(&grid);
    ///
    /// assert_eq!(3, graph.nb_nodes());
    /// assert_eq!(&[NodeId(1)], graph.neighbours(NodeId(0)));
    /// assert!(graph.neighbours(NodeId(2)).is_empty());
    /// ```
    pub fn new(grid: &Grid) -> Self {
        let (width, height) = (grid.width(), grid.height());
        let nb_nodes = width * height;

        let mut nodes = Vec::with_capacity(nb_nodes);
        for y in 0..height {
            for x in 0..width {
                let id = NodeId(y * width + x);
                nodes.push(Node { id, x, y, altitude: grid.altitude(x, y) });
            }
        }

        let mut graph = Graph {
            width,
            height,
            nodes,
            outbound: Vec::with_capacity(nb_nodes),
            edges: Vec::with_capacity(2 * nb_nodes),
        };
        graph.build_edges();

        debug!(width, height, nodes = graph.nb_nodes(), edges = graph.nb_edges(), "graph built");
        graph
    }
    /// Validates the raw dimensions and altitudes and builds the graph when
    /// they are consistent. Nothing is built otherwise.
    pub fn from_altitudes(width: usize, height: usize, altitudes: &[isize]) -> Result<Self, Error> {
        let grid = Grid::new(width, height, altitudes.to_vec())?;
        Ok(Self::new(&grid))
    }

    fn build_edges(&mut self) {
        for id in 0..self.nodes.len() {
            let node = self.nodes[id];
            let from = self.edges.len();
            for candidate in self.orthogonal_neighbours(&node).into_iter().flatten() {
                if self.nodes[candidate.0].altitude < node.altitude {
                    self.edges.push(candidate);
                }
            }
            self.outbound.push(EdgeRange { from, to: self.edges.len() });
        }
    }

    /// The west, east, north and south neighbours of `node` (in that order)
    /// when they exist.
    fn orthogonal_neighbours(&self, node: &Node) -> [Option<NodeId>; 4] {
        let (x, y) = (node.x, node.y);
        [
            (x > 0).then(|| self.id_of(x - 1, y)),
            (x + 1 < self.width).then(|| self.id_of(x + 1, y)),
            (y > 0).then(|| self.id_of(x, y - 1)),
            (y + 1 < self.height).then(|| self.id_of(x, y + 1)),
        ]
    }

    /// The number of columns
    pub fn width(&self) -> usize {
        self.width
    }
    /// The number of rows
    pub fn height(&self) -> usize {
        self.height
    }
    /// The number of nodes (cells)
    pub fn nb_nodes(&self) -> usize {
        self.nodes.len()
    }
    /// The number of descending edges
    pub fn nb_edges(&self) -> usize {
        self.edges.len()
    }
    /// Returns true iff the graph has no node at all
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    /// All nodes, in row major order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
    /// Returns the node having the given identifier.
    ///
    /// # Panics
    /// When there is no such node.
    #[inline]
    pub fn node(&self, id: NodeId) -> Node {
        assert!(id.0 < self.nodes.len(), "{:?} is out of bounds ({} nodes)", id, self.nodes.len());
        self.nodes[id.0]
    }
    /// Returns the identifier of the node at `(x, y)`.
    ///
    /// # Panics
    /// When `(x, y)` lies outside of the grid.
    #[inline]
    pub fn id_of(&self, x: usize, y: usize) -> NodeId {
        assert!(x < self.width, "x = {} is out of bounds (width = {})", x, self.width);
        assert!(y < self.height, "y = {} is out of bounds (height = {})", y, self.height);
        NodeId(y * self.width + x)
    }
    /// Returns the node at `(x, y)`.
    ///
    /// # Panics
    /// When `(x, y)` lies outside of the grid.
    #[inline]
    pub fn node_at(&self, x: usize, y: usize) -> Node {
        self.nodes[self.id_of(x, y).0]
    }
    /// The nodes one can directly ski down to from `id` (west, east, north,
    /// south order, skipping those which are not strictly lower).
    ///
    /// # Panics
    /// When there is no such node.
    #[inline]
    pub fn neighbours(&self, id: NodeId) -> &[NodeId] {
        assert!(id.0 < self.nodes.len(), "{:?} is out of bounds ({} nodes)", id, self.nodes.len());
        let EdgeRange { from, to } = self.outbound[id.0];
        &self.edges[from..to]
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
