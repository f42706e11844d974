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

//! This module is meant to tests the correctness of our skiing example

use std::path::PathBuf;

use descent::*;

use crate::{io_utils::{read_instance, Error}, report, solve};

fn locate(id: &str) -> PathBuf {
    PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("../resources/skiing/")
        .join(id)
}

pub fn solve_id(id: &str, parallel: bool) -> Option<Path> {
    let fname = locate(id);
    let grid = read_instance(fname).unwrap();
    let graph = Graph::new(&grid);
    solve(&graph, parallel, None)
}

pub fn report_id(id: &str) -> String {
    report(solve_id(id, false).as_ref(), true)
}

fn directions(path: &Path) -> Vec<Direction> {
    path.directions().collect()
}

#[test]
fn small() {
    let best = solve_id("small.txt", false).unwrap();
    assert_eq!(5, best.steps());
    assert_eq!(8, best.descent());
    assert_eq!((2, 1), (best.start().x, best.start().y));
    assert_eq!(
        vec![Direction::West, Direction::North, Direction::East, Direction::North],
        directions(&best)
    );
}

#[test]
fn small_report() {
    let expected = "Best path has 5 steps with a descent of 8\n\
        Starts at 2,1 and follows these directions:\n\
        West\n\
        North\n\
        East\n\
        North\n";
    assert_eq!(expected, report_id("small.txt"));
}

#[test]
fn small_report_without_directions() {
    let best = solve_id("small.txt", false);
    assert_eq!(
        "Best path has 5 steps with a descent of 8\nStarts at 2,1\n",
        report(best.as_ref(), false)
    );
}

#[test]
fn flat() {
    let best = solve_id("flat.txt", false).unwrap();
    assert_eq!(1, best.steps());
    assert_eq!(0, best.descent());
    assert_eq!((0, 0), (best.start().x, best.start().y));
    assert_eq!("Best path has 1 steps with a descent of 0\nStarts at 0,0 and follows these directions:\n", report_id("flat.txt"));
}

#[test]
fn empty() {
    assert!(solve_id("empty.txt", false).is_none());
    assert!(solve_id("empty.txt", true).is_none());
    assert_eq!("Failed to find best path\n", report_id("empty.txt"));
}

#[test]
fn single() {
    let best = solve_id("single.txt", false).unwrap();
    assert_eq!(1, best.steps());
    assert_eq!(0, best.descent());
}

#[test]
fn tie() {
    let best = solve_id("tie.txt", false).unwrap();
    assert_eq!(3, best.steps());
    assert_eq!(3, best.descent());
    assert_eq!(vec![Direction::East, Direction::North], directions(&best));
}

#[test]
fn steep() {
    let best = solve_id("steep.txt", false).unwrap();
    assert_eq!(5, best.steps());
    assert_eq!(4, best.descent());
}

#[test]
fn snake() {
    let best = solve_id("snake.txt", false).unwrap();
    assert_eq!(400, best.steps());
    assert_eq!(399, best.descent());
    let dirs = directions(&best);
    assert_eq!(190, dirs.iter().filter(|d| **d == Direction::East).count());
    assert_eq!(190, dirs.iter().filter(|d| **d == Direction::West).count());
    assert_eq!(19, dirs.iter().filter(|d| **d == Direction::North).count());
}

#[test]
fn both_engines_agree_on_all_maps() {
    for id in ["small.txt", "flat.txt", "single.txt", "tie.txt", "steep.txt", "snake.txt"] {
        assert_eq!(solve_id(id, false), solve_id(id, true), "{id}");
    }
}

#[test]
fn ragged() {
    assert!(matches!(
        read_instance(locate("ragged.txt")),
        Err(Error::WrongValueCount { line: 3, expected: 3, actual: 2 })
    ));
}

#[test]
fn extra() {
    assert!(matches!(read_instance(locate("extra.txt")), Err(Error::ExtraLine(3))));
}

#[test]
fn garbage() {
    assert!(matches!(read_instance(locate("garbage.txt")), Err(Error::BadValue { line: 2, column: 2, .. })));
}

#[test]
fn short() {
    assert!(matches!(read_instance(locate("short.txt")), Err(Error::TooFewLines { expected: 3, actual: 2 })));
}

#[test]
fn missing_file() {
    assert!(matches!(read_instance(locate("does_not_exist.txt")), Err(Error::Io(_))));
}
