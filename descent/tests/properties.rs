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

//! This module checks the properties that must hold for any grid whatsoever:
//! the shape of the paths, their optimality and the agreement of the engines.

use compare::Compare;
use descent::*;
use proptest::prelude::*;

/// Small grids with a narrow altitude range so that plateaus and ties are
/// frequent.
fn grids(max_side: usize) -> impl Strategy<Value = Grid> {
    (0..=max_side, 0..=max_side).prop_flat_map(|(width, height)| {
        prop::collection::vec(-4isize..=4, width * height)
            .prop_map(move |altitudes| Grid::new(width, height, altitudes).unwrap())
    })
}

/// Plain exhaustive search of the best value from `node`, without any memo.
fn brute_force(graph: &Graph, node: NodeId) -> PathValue {
    let altitude = graph.node(node).altitude;
    graph.neighbours(node).iter()
        .map(|next| {
            let tail = brute_force(graph, *next);
            PathValue {
                steps: tail.steps + 1,
                descent: tail.descent + altitude.abs_diff(graph.node(*next).altitude),
            }
        })
        .max_by(|a, b| a.compare(b))
        .unwrap_or(PathValue::SINGLE_NODE)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn every_edge_goes_strictly_down_to_an_adjacent_node(grid in grids(8)) {
        let graph = Graph::new(&grid);
        for node in graph.nodes() {
            for next in graph.neighbours(node.id) {
                let next = graph.node(*next);
                prop_assert!(next.altitude < node.altitude);
                prop_assert!(node.is_adjacent_to(&next));
            }
        }
    }

    #[test]
    fn best_paths_are_well_formed(grid in grids(8)) {
        let graph = Graph::new(&grid);
        let finder = SequentialPathFinder::new(&graph);
        for node in graph.nodes() {
            let path = finder.best_path_from(node.id);
            prop_assert_eq!(node.id, path.start().id);
            prop_assert!(path.nodes().windows(2).all(|w| w[0].altitude > w[1].altitude));
            prop_assert!(path.nodes().windows(2).all(|w| w[0].is_adjacent_to(&w[1])));
            prop_assert_eq!((path.start().altitude - path.end().altitude) as usize, path.descent());
            prop_assert_eq!(path.steps() - 1, path.directions().count());
            prop_assert!(graph.neighbours(path.end().id).is_empty());
            prop_assert_eq!(finder.best_value_from(node.id), path.value());
        }
    }

    #[test]
    fn best_paths_are_optimal(grid in grids(5)) {
        let graph = Graph::new(&grid);
        let finder = SequentialPathFinder::new(&graph);
        for node in graph.nodes() {
            prop_assert_eq!(brute_force(&graph, node.id), finder.best_value_from(node.id));
        }
    }

    #[test]
    fn asking_twice_yields_the_same_answer(grid in grids(8)) {
        let graph = Graph::new(&grid);
        let finder = SequentialPathFinder::new(&graph);
        let first = finder.find_best_path();
        prop_assert_eq!(first, finder.find_best_path());
        for node in graph.nodes() {
            prop_assert_eq!(finder.best_path_from(node.id), finder.best_path_from(node.id));
        }
    }

    #[test]
    fn the_global_best_is_the_first_maximum_in_row_major_order(grid in grids(8)) {
        let graph = Graph::new(&grid);
        let finder = SequentialPathFinder::new(&graph);
        match finder.find_best_path() {
            None => prop_assert!(graph.is_empty()),
            Some(best) => {
                let winner = best.start().id;
                for node in graph.nodes() {
                    let value = finder.best_value_from(node.id);
                    prop_assert!(!PathRanking.compares_gt(&value, &best.value()));
                    if node.id < winner {
                        prop_assert!(PathRanking.compares_lt(&value, &best.value()));
                    }
                }
            }
        }
    }

    #[test]
    fn both_engines_agree(grid in grids(10), threads in 1usize..=4, chunk in 1usize..=8) {
        let graph = Graph::new(&grid);
        let sequential = SequentialPathFinder::new(&graph);
        let parallel = ParallelPathFinder::new(&graph)
            .with_nb_threads(threads)
            .with_chunk_size(chunk);
        prop_assert_eq!(sequential.find_best_path(), parallel.find_best_path());
        for node in graph.nodes() {
            prop_assert_eq!(sequential.best_path_from(node.id), parallel.best_path_from(node.id));
        }
    }

    #[test]
    fn the_best_value_does_not_depend_on_the_scan_order(
        (grid, order) in grids(8).prop_flat_map(|grid| {
            let nb_cells = grid.width() * grid.height();
            (Just(grid), Just((0..nb_cells).collect::<Vec<_>>()).prop_shuffle())
        })
    ) {
        let graph = Graph::new(&grid);
        let finder = SequentialPathFinder::new(&graph);
        let shuffled = order.iter()
            .map(|id| finder.best_value_from(NodeId(*id)))
            .max_by(|a, b| PathRanking.compare(a, b));
        prop_assert_eq!(finder.find_best_path().map(|p| p.value()), shuffled);
    }

    #[test]
    fn the_ranking_is_transitive(
        a in (1usize..4, 0usize..4),
        b in (1usize..4, 0usize..4),
        c in (1usize..4, 0usize..4)
    ) {
        let a = PathValue { steps: a.0, descent: a.1 };
        let b = PathValue { steps: b.0, descent: b.1 };
        let c = PathValue { steps: c.0, descent: c.1 };
        if PathRanking.compares_ge(&a, &b) && PathRanking.compares_ge(&b, &c) {
            prop_assert!(PathRanking.compares_ge(&a, &c));
        }
        if PathRanking.compares_gt(&a, &b) && PathRanking.compares_gt(&b, &c) {
            prop_assert!(PathRanking.compares_gt(&a, &c));
        }
    }

    #[test]
    fn the_ranking_is_a_total_order(a in (1usize..5, 0usize..5), b in (1usize..5, 0usize..5)) {
        let a = PathValue { steps: a.0, descent: a.1 };
        let b = PathValue { steps: b.0, descent: b.1 };
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        prop_assert_eq!(a.compare(&b).is_eq(), a == b);
    }
}
