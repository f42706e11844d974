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

//! This module provides the implementation of a parallel path finder. That is
//! a path finder which computes the best path of all the nodes of the graph
//! using as many threads as requested. By default, it uses as many threads as
//! the number of hardware threads available on the machine.
//!
//! The nodes are processed by increasing altitude. Because all edges lead to
//! a strictly lower node, the nodes that share one same altitude (a 'level')
//! never depend on one another: a level can be split in chunks which are
//! processed concurrently, as soon as all the lower levels are complete.
use std::sync::OnceLock;

use parking_lot::{Condvar, Mutex};
use tracing::debug;

use crate::{Graph, NodeId, PathFinder, PathValue};

use super::{select_best_link, BestLink};

/// The default number of nodes handed to a worker at once
const DEFAULT_CHUNK_SIZE: usize = 256;

/// The shared data that may only be manipulated within critical sections
struct Critical {
    /// The position (in 'order') of the next node to hand over to a worker
    next: usize,
    /// The position (in 'order') of the first node beyond the current level
    level_end: usize,
    /// The number of chunks that are currently being processed.
    ///
    /// # Note
    /// This is the piece of information that lets us distinguish between a
    /// level which is exhausted but not complete (a worker must wait) and a
    /// level which is complete (the next one can be opened).
    ongoing: usize,
    /// The number of levels that have been opened so far
    levels: usize,
}

/// The state which is shared among the many running threads: it provides an
/// access to the critical data (protected by a mutex) as well as a monitor
/// (condvar) to park threads while the current level is being completed.
struct Shared {
    /// All node ids sorted by increasing altitude
    order: Vec<NodeId>,
    /// The altitude of the nodes in 'order' (same positions)
    altitudes: Vec<isize>,
    /// This is the shared state data which can only be accessed within critical
    /// sections. Therefore, it is protected by a mutex which prevents concurrent
    /// reads/writes.
    critical: Mutex<Critical>,
    /// This is the monitor on which threads wait when the current level has
    /// been handed over entirely but is not complete yet. Whenever the last
    /// ongoing chunk of a level is finished, all parked threads are woken up.
    monitor: Condvar,
}

/// The workload a thread can get from the shared state
enum WorkLoad {
    /// There is no work left to be done: you can safely terminate
    Complete,
    /// There is nothing you can do for now: the current level must be
    /// complete before the next one can be opened.
    Starvation,
    /// The slice of 'order' to process
    WorkItem { from: usize, to: usize },
}

/// This is the structure implementing a multi-threaded path finder. Unlike
/// the sequential one, it is eager: the first question asked triggers the
/// computation of the best path of every node.
///
/// # Example
/// ```
/// # use descent::*;
/// let grid   = Grid::from_rows(&[vec![4, 3], vec![2, 1]]).unwrap();
/// let graph  = Graph::new(&grid);
/// let finder = ParallelPathFinder::new(&graph).with_nb_threads(2);
///
/// let best = finder.find_best_path().unwrap();
/// assert_eq!(3, best.steps());
/// assert_eq!(3, best.descent());
/// ```
pub struct ParallelPathFinder<'a> {
    /// The graph being explored
    graph: &'a Graph,
    /// The write-once slot of each node (indexed by node id)
    memo: Vec<OnceLock<BestLink>>,
    /// Set once all the slots have been filled
    evaluated: OnceLock<()>,
    /// This is a configuration parameter that tunes the number of threads that
    /// will be spawned to compute the best paths. By default, this value is set
    /// to the number of hardware threads available on the machine.
    nb_threads: usize,
    /// The maximum number of nodes a worker processes before it goes back to
    /// the critical section
    chunk_size: usize,
}

impl<'a> ParallelPathFinder<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self::custom(graph, num_cpus::get())
    }

    pub fn custom(graph: &'a Graph, nb_threads: usize) -> Self {
        let mut memo = Vec::with_capacity(graph.nb_nodes());
        memo.resize_with(graph.nb_nodes(), OnceLock::new);
        ParallelPathFinder {
            graph,
            memo,
            evaluated: OnceLock::new(),
            nb_threads: nb_threads.max(1),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Sets the number of threads used by the path finder
    pub fn with_nb_threads(mut self, nb_threads: usize) -> Self {
        self.nb_threads = nb_threads.max(1);
        self
    }
    /// Sets the maximum number of nodes processed by a worker at once
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }
    /// The number of worker threads
    pub fn nb_threads(&self) -> usize {
        self.nb_threads
    }

    /// Returns the memoized link of `node`, evaluating the whole graph first
    /// if that has not been done yet.
    fn link(&self, node: NodeId) -> BestLink {
        assert!(node.0 < self.memo.len(), "{:?} is out of bounds ({} nodes)", node, self.memo.len());
        self.evaluated.get_or_init(|| self.evaluate());
        self.resolve(node)
    }

    /// Fills the slot of `node` (unless already done). When called from a
    /// worker, all the neighbours of `node` live in a lower level and have
    /// therefore been resolved already.
    fn resolve(&self, node: NodeId) -> BestLink {
        *self.memo[node.0].get_or_init(|| {
            select_best_link(self.graph, node, |next| self.resolve(next).value)
        })
    }

    /// Spawns the workers and waits until all nodes have been resolved.
    fn evaluate(&self) {
        let mut order = self.graph.nodes().iter().map(|n| n.id).collect::<Vec<_>>();
        order.sort_by_key(|id| self.graph.node(*id).altitude);
        let altitudes = order.iter().map(|id| self.graph.node(*id).altitude).collect();

        let shared = Shared {
            order,
            altitudes,
            critical: Mutex::new(Critical { next: 0, level_end: 0, ongoing: 0, levels: 0 }),
            monitor: Condvar::new(),
        };

        std::thread::scope(|s| {
            for _ in 0..self.nb_threads {
                s.spawn(|| self.work(&shared));
            }
        });

        let levels = shared.critical.lock().levels;
        debug!(nodes = self.graph.nb_nodes(), levels, threads = self.nb_threads, "parallel evaluation complete");
    }

    /// The loop of one worker thread
    fn work(&self, shared: &Shared) {
        loop {
            match self.get_workload(shared) {
                WorkLoad::Complete => break,
                WorkLoad::Starvation => continue,
                WorkLoad::WorkItem { from, to } => {
                    for &node in &shared.order[from..to] {
                        self.resolve(node);
                    }
                    Self::notify_chunk_finished(shared);
                }
            }
        }
    }

    /// Consults the shared state to fetch a workload. Depending on the current
    /// state, the workload can either be:
    ///
    ///   + Complete, when all nodes have been resolved and all threads should stop
    ///   + Starvation, when the current level has been handed over entirely but
    ///     some of its chunks are still being processed (the thread parks
    ///     until they are done).
    ///   + WorkItem, when the thread successfully obtained a chunk to process.
    fn get_workload(&self, shared: &Shared) -> WorkLoad {
        let mut critical = shared.critical.lock();

        if critical.next == critical.level_end {
            if critical.ongoing > 0 {
                shared.monitor.wait(&mut critical);
                return WorkLoad::Starvation;
            }
            if critical.next == shared.order.len() {
                return WorkLoad::Complete;
            }
            // open the next level
            let altitude = shared.altitudes[critical.next];
            let remaining = &shared.altitudes[critical.next..];
            critical.level_end = critical.next + remaining.partition_point(|a| *a == altitude);
            critical.levels += 1;
        }

        let from = critical.next;
        let to = critical.level_end.min(from + self.chunk_size);
        critical.next = to;
        critical.ongoing += 1;
        WorkLoad::WorkItem { from, to }
    }

    /// Acknowledges that a thread finished processing its chunk.
    fn notify_chunk_finished(shared: &Shared) {
        let mut critical = shared.critical.lock();
        critical.ongoing -= 1;
        if critical.ongoing == 0 {
            shared.monitor.notify_all();
        }
    }
}

impl PathFinder for ParallelPathFinder<'_> {
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
