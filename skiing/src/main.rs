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

//! This example uses descent to find the best ski run on a map: the longest
//! strictly descending path, and among those, the steepest one.
//! It prints the length and the descent of the run, where it starts and the
//! directions to follow. Optionally, it exports a heat-map of the terrain
//! with the run painted on top of it.

use std::{fs, time::Instant};

use clap::Parser;
use descent::*;
use descent_viz::{Heatmap, HeatmapConfigBuilder, HeatmapConfigBuilderError};
use tracing::{info, subscriber::{set_global_default, SetGlobalDefaultError}};
use tracing_subscriber::{prelude::*, registry::Registry, EnvFilter};

use crate::io_utils::read_instance;

mod io_utils;

#[cfg(test)]
mod tests;

/// This structure uses `clap-derive` annotations and define the arguments that can
/// be passed on to the executable.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to the map file
    fname: String,
    /// Use the parallel path finder
    #[clap(short, long)]
    parallel: bool,
    /// The number of concurrent threads (implies --parallel)
    #[clap(short, long)]
    threads: Option<usize>,
    /// Write an altitude heat-map of the map (plain PPM) to this file
    #[clap(long)]
    heatmap: Option<String>,
    /// The size (in pixels) of one cell of the heat-map (at most 256)
    #[clap(long, default_value = "1")]
    scale: usize,
    /// Only print the length and descent of the best run
    #[clap(long)]
    no_directions: bool,
}

/// The things that can go wrong when running this program
#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("could not read the map: {0}")]
    Map(#[from] io_utils::Error),
    #[error("could not write the heat-map: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid heat-map configuration: {0}")]
    Heatmap(#[from] HeatmapConfigBuilderError),
    #[error("could not render the heat-map: {0}")]
    Render(#[from] descent_viz::Error),
    #[error("could not install the logger: {0}")]
    Logger(#[from] SetGlobalDefaultError),
}

/// Logs go to stderr so that the report is the only thing written on stdout.
/// The verbosity defaults to 'info' and can be tuned with RUST_LOG.
fn init_logger() -> Result<(), SetGlobalDefaultError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = Registry::default()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    set_global_default(subscriber)
}

/// Finds the best run with the engine selected on the command line
fn solve(graph: &Graph, parallel: bool, threads: Option<usize>) -> Option<Path> {
    if parallel || threads.is_some() {
        let finder = ParallelPathFinder::new(graph);
        let finder = match threads {
            Some(n) => finder.with_nb_threads(n),
            None => finder,
        };
        info!(threads = finder.nb_threads(), "searching with the parallel path finder");
        finder.find_best_path()
    } else {
        info!("searching with the sequential path finder");
        SequentialPathFinder::new(graph).find_best_path()
    }
}

/// Formats the report of the best run (if there is one)
fn report(best: Option<&Path>, with_directions: bool) -> String {
    match best {
        None => "Failed to find best path\n".to_string(),
        Some(path) => {
            let start = path.start();
            let mut out = format!("Best path has {} steps with a descent of {}\n", path.steps(), path.descent());
            if with_directions {
                out.push_str(&format!("Starts at {},{} and follows these directions:\n", start.x, start.y));
                for direction in path.directions() {
                    out.push_str(&format!("{direction}\n"));
                }
            } else {
                out.push_str(&format!("Starts at {},{}\n", start.x, start.y));
            }
            out
        }
    }
}

/// This is your executable's entry point. It is the place where all the pieces are put together
/// to find the best run on some map.
fn main() -> Result<(), Error> {
    init_logger()?;
    let args = Args::parse();

    let start = Instant::now();
    let grid = read_instance(&args.fname)?;
    info!(width = grid.width(), height = grid.height(), "map loaded");

    let graph = Graph::new(&grid);
    let best = solve(&graph, args.parallel, args.threads);
    info!(elapsed = ?start.elapsed(), "search complete");

    print!("{}", report(best.as_ref(), !args.no_directions));

    if let Some(fname) = &args.heatmap {
        let config = HeatmapConfigBuilder::default().scale(args.scale).build()?;
        let heatmap = match &best {
            Some(path) => Heatmap::new(&grid).with_path(path),
            None => Heatmap::new(&grid),
        };
        fs::write(fname, heatmap.as_ppm(&config)?)?;
        info!(fname = fname.as_str(), "heat-map written");
    }
    Ok(())
}
