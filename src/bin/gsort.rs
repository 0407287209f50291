use std::fs;
use std::io::{self, BufWriter, Read, Write};

use anyhow::Context;
use clap::Parser;

use gradesort::common::reset_sigpipe;
use gradesort::sort::{Algorithm, sort_and_summarize};

#[derive(Parser)]
#[command(
    name = "gsort",
    about = "Sort name,score records and tally their grades"
)]
struct Cli {
    /// Sorting algorithm: bubble or merge
    #[arg(short = 'a', long = "algorithm", default_value = "merge")]
    algorithm: String,

    /// Print the per-grade summary after the records
    #[arg(long = "summary")]
    summary: bool,

    /// Print the sort wall-clock time to stderr
    #[arg(long = "time")]
    time: bool,

    /// Input file (reads stdin if omitted or '-')
    file: Option<String>,
}

fn main() -> anyhow::Result<()> {
    reset_sigpipe();
    let cli = Cli::parse();

    let algorithm: Algorithm = cli.algorithm.parse()?;

    let raw = match cli.file.as_deref() {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut buf)
                .context("cannot read standard input")?;
            buf
        }
        Some(path) => fs::read_to_string(path).with_context(|| format!("cannot read {path}"))?,
    };

    let outcome = sort_and_summarize(&raw, algorithm)?;

    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);
    for record in &outcome.sorted {
        writeln!(out, "{},{},{}", record.name(), record.score(), record.grade())?;
    }
    if cli.summary {
        for (grade, count) in outcome.summary.iter() {
            writeln!(out, "{grade}: {count}")?;
        }
    }
    out.flush()?;

    if cli.time {
        eprintln!(
            "{}: sorted {} records in {} us",
            outcome.algorithm,
            outcome.sorted.len(),
            outcome.elapsed_micros()
        );
    }

    Ok(())
}
