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

//! This module contains everything that is necessary to parse a map file
//! and turn it into a `Grid` usable by the descent library. The expected
//! format is:
//!
//! ```plain
//! <width> <height>
//! <altitude (0, 0)> <altitude (1, 0)> ... <altitude (width-1, 0)>
//! ...
//! <altitude (0, height-1)>            ... <altitude (width-1, height-1)>
//! ```
//!
//! Values are separated by any amount of spaces or tabs. Lines are numbered
//! from 1 (the header) and columns from 1 in the error messages.

use std::{fs::File, io::{BufRead, BufReader}, num::ParseIntError, path::Path, sync::OnceLock};

use descent::Grid;
use regex::Regex;

/// This enumeration simply groups the kind of errors that might occur when parsing a
/// map from file. There can be io errors (file unavailable ?), format errors (e.g. the
/// file is not a map but contains the text of your next paper), or errors raised when
/// the announced dimensions cannot describe a grid at all.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected to read something that was an integer but got some garbage
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    /// The dimensions do not describe a valid grid
    #[error("invalid grid {0}")]
    Grid(#[from] descent::Error),
    /// The file does not start with a header
    #[error("line 1 is empty")]
    EmptyHeader,
    /// The header is not made of the width and height of the map
    #[error("unable to parse width and height of map ({0})")]
    BadHeader(String),
    /// A line of the grid is empty
    #[error("line {0} is empty")]
    EmptyLine(usize),
    /// A line of the grid does not have exactly 'width' values
    #[error("line {line} has {actual} altitude values where {expected} were expected")]
    WrongValueCount { line: usize, expected: usize, actual: usize },
    /// One value of the grid is not an integer
    #[error("unable to parse value {column} on line {line} ({value})")]
    BadValue { line: usize, column: usize, value: String },
    /// The file ends before all rows of the grid have been read
    #[error("expected {expected} lines of altitudes but only {actual} were found")]
    TooFewLines { expected: usize, actual: usize },
    /// There is something after the last row of the grid
    #[error("unexpected content at the end of file (line {0})")]
    ExtraLine(usize),
}

/// This function is used to read a map from file. It returns either a grid
/// if everything went on well or an error describing the problem.
pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<Grid, Error> {
    let f = File::open(fname)?;
    let f = BufReader::new(f);
    parse(f)
}

/// The most altitudes reserved up front. The header is not trusted: the rest
/// of the grid grows as the rows are read.
const MAX_PREALLOCATION: usize = 1 << 20;

/// The header regex, compiled once. Only ascii digits are accepted.
fn header_regex() -> Result<&'static Regex, Error> {
    static HEADER: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    HEADER.get_or_init(|| Regex::new(r"^\s*(?P<width>[0-9]+)\s+(?P<height>[0-9]+)\s*$"))
        .as_ref()
        .map_err(|e| Error::BadHeader(e.to_string()))
}

/// Parses a map from any buffered source.
pub fn parse<R: BufRead>(source: R) -> Result<Grid, Error> {
    let header = header_regex()?;

    let mut lines = source.lines();

    let first = lines.next().transpose()?.unwrap_or_default();
    if first.trim().is_empty() {
        return Err(Error::EmptyHeader);
    }
    let caps = header.captures(&first).ok_or_else(|| Error::BadHeader(first.trim().to_string()))?;
    let width = caps["width"].parse::<usize>()?;
    let height = caps["height"].parse::<usize>()?;

    let expected = width.checked_mul(height).ok_or(descent::Error::TooLarge { width, height })?;
    let mut altitudes = Vec::with_capacity(expected.min(MAX_PREALLOCATION));

    // the first line of the grid is the second line of the file
    for row in 0..height {
        let lc = row + 2;
        let line = match lines.next().transpose()? {
            Some(line) => line,
            None => return Err(Error::TooFewLines { expected: height, actual: row }),
        };
        if line.trim().is_empty() {
            return Err(Error::EmptyLine(lc));
        }

        let values = line.split_whitespace().collect::<Vec<_>>();
        if values.len() != width {
            return Err(Error::WrongValueCount { line: lc, expected: width, actual: values.len() });
        }
        for (column, value) in values.iter().enumerate() {
            let altitude = value.parse::<isize>().map_err(|_| Error::BadValue {
                line: lc,
                column: column + 1,
                value: value.to_string(),
            })?;
            altitudes.push(altitude);
        }
    }

    // trailing blank lines are tolerated, nothing else is
    for (i, line) in lines.enumerate() {
        if !line?.trim().is_empty() {
            return Err(Error::ExtraLine(height + 2 + i));
        }
    }

    Ok(Grid::new(width, height, altitudes)?)
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
