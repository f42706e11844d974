//! Project automation: `cargo xtask <task>`

use std::fs;

use clap::Parser;
use xtaskops::{ops::cmd, tasks};

#[derive(Debug, clap::Parser)]
enum Args {
    /// Measure the test coverage of the workspace
    Coverage{
        /// Generate html report
        #[clap(short, long)]
        dev_mode: bool
    },
    /// Format, lint and test the whole workspace
    Ci,
    /// Show what takes up the room in the binary of a package
    BloatDeps{package: String},
    /// Show what takes up the compilation time of a package
    BloatTime{package: String},
    /// Build and open the documentation
    Docs,
    /// Run the skiing binary on every map of the resources folder, with both
    /// path finders
    Maps{
        /// Only print the summary of each run
        #[clap(short, long)]
        quiet: bool
    },
}

fn maps(quiet: bool) -> Result<(), anyhow::Error> {
    let mut files = fs::read_dir("resources/skiing")?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    files.sort();

    for file in files {
        let fname = file.to_string_lossy().to_string();
        println!("---- {fname} ----");
        for engine in ["--threads=1", "--parallel"] {
            let mut args = vec!["run", "-q", "-p", "skiing", "--release", "--", fname.as_str(), engine];
            if quiet {
                args.push("--no-directions");
            }
            // some maps are meant to be rejected
            if let Err(e) = cmd("cargo", args).run() {
                println!("{e}");
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    match args {
        Args::Coverage{dev_mode} => tasks::coverage(dev_mode),
        Args::Ci                 => tasks::ci(),
        Args::BloatDeps{package} => tasks::bloat_deps(&package),
        Args::BloatTime{package} => tasks::bloat_time(&package),
        Args::Docs               => tasks::docs(),
        Args::Maps{quiet}        => maps(quiet),
    }
}
