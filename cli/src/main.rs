//! tribench CLI - JSON library benchmark runner
//!
//! Times parse and export across serde_json, simd-json, and sonic-rs
//! against a fixed input file.

use clap::Parser;
use colored::*;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tribench::DriverReport;

/// Input file, read from the working directory.
const INPUT_FILE: &str = "dummy_data.json";

/// Root of the per-library output directories. Must exist before the run,
/// along with one subdirectory per library.
const OUTPUT_ROOT: &str = "outputs";

/// JSON parse/export benchmark across serde_json, simd-json, and sonic-rs
#[derive(Parser)]
#[command(
    name = "tribench",
    version,
    about = "Benchmark JSON parse and export across serde_json, simd-json, and sonic-rs",
    long_about = "tribench - JSON library benchmark harness.\n\n\
                  Reads dummy_data.json from the working directory, runs each \
                  library's parse and export steps with per-step wall-clock \
                  timing, and writes raw, pretty, and single-line exports \
                  under outputs/<library>/."
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = run() {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let input = tribench::load_input(INPUT_FILE)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let reports = tribench::run_all(&input, OUTPUT_ROOT, &mut out)?;
    out.flush()?;

    write_summary(&reports)?;
    print_summary(&reports);

    Ok(())
}

/// Drops a machine-readable copy of the run next to the outputs.
fn write_summary(reports: &[DriverReport]) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(reports)?;
    fs::write(Path::new(OUTPUT_ROOT).join("summary.json"), json)?;
    Ok(())
}

fn print_summary(reports: &[DriverReport]) {
    println!();
    println!("{}", "Benchmark Complete".green().bold());
    println!("{}", "─".repeat(40));
    println!("{}: {}", "Input".bold(), INPUT_FILE);
    println!("{}: {}", "Output".bold(), OUTPUT_ROOT);

    for report in reports {
        println!(
            "  {} {} ({} ms total)",
            "✓".green(),
            report.library,
            report.total().as_millis()
        );
    }
}
