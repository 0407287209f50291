use std::io::{self, BufWriter, Write};

use clap::Parser;

use gradesort::bench::{TRIALS, as_ms, run_benchmark};
use gradesort::common::reset_sigpipe;

#[derive(Parser)]
#[command(
    name = "gbench",
    about = "Benchmark bubble vs merge sort across a fixed ladder of input sizes"
)]
struct Cli {
    /// Random seed for reproducible dataset generation
    #[arg(long = "seed")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    reset_sigpipe();
    let cli = Cli::parse();

    let report = run_benchmark(cli.seed);

    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);
    writeln!(out, "{:>8}  {:>12}  {:>12}", "size", "bubble ms", "merge ms")?;
    for run in &report.runs {
        writeln!(
            out,
            "{:>8}  {:>12.4}  {:>12.4}",
            run.size,
            as_ms(run.bubble),
            as_ms(run.merge)
        )?;
    }
    match report.crossover {
        Some(n) => writeln!(out, "crossover: merge <= bubble from n = {n}")?,
        None => writeln!(out, "crossover: not found in the tested sizes")?,
    }
    writeln!(
        out,
        "note: medians of {TRIALS} trials; absolute times depend on hardware and load"
    )?;
    out.flush()?;

    Ok(())
}
