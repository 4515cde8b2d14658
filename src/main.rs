//! sortplot - Benchmark and plot hybrid mergesort threshold sweeps.
//!
//! Reads `results.csv` (columns `s` and `time_ms`), renders a line chart of
//! sort time against the insertion threshold, and saves it as a 300 DPI PNG.
//! With `--bench`, first produces that CSV itself by timing a hybrid
//! mergesort over an evenly-sampled range of threshold values.

mod bench;
mod data;
mod plot;
mod viewer;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Plot hybrid mergesort benchmark results (threshold s vs time)
#[derive(Parser, Debug)]
#[command(name = "sortplot")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV file with `s` and `time_ms` columns
    #[arg(short, long, default_value = "results.csv")]
    input: PathBuf,

    /// Output PNG file (overwritten if it exists)
    #[arg(short, long, default_value = "hybrid_sort_plot.png")]
    output: PathBuf,

    /// Open the saved chart in the system image viewer
    #[arg(long)]
    show: bool,

    /// Run the benchmark sweep and write its results to the input path
    #[arg(long)]
    bench: bool,

    /// Benchmark array length (elements to sort per run)
    #[arg(long, default_value = "1000000")]
    size: usize,

    /// Number of threshold values to sample between 1 and the array length
    #[arg(long, default_value = "40")]
    samples: usize,

    /// Seed for the benchmark's random array, fixed so data is repeatable
    #[arg(long, default_value = "123456789")]
    seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Bench mode: generate the results file instead of plotting it
    if args.bench {
        let records = bench::run_sweep(args.size, args.samples, args.seed);
        bench::write_results(&records, &args.input)?;
        println!("Wrote {}", args.input.display());
        return Ok(());
    }

    let points = data::load_results(&args.input)?;
    plot::render_chart(&points, &args.output)?;

    println!("Saved {}", args.output.display());

    if args.show {
        if let Err(e) = viewer::open(&args.output) {
            eprintln!("Warning: could not open viewer: {}", e);
        }
    }

    Ok(())
}
