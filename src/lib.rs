//! # tribench
//!
//! A benchmark harness that times three JSON parsing/serialization
//! libraries against a single input file.
//!
//! For each library the harness times four steps: parse, compact ("raw")
//! export, indented ("pretty") export, and a single-line export that puts
//! each top-level array element on its own line. Every export lands in its
//! own file under a per-library output directory, and every step reports a
//! `<label> time = <N>[ms]` line as it completes.
//!
//! ## Libraries
//!
//! - **serde_json**: always compiled
//! - **simd-json**: `simd` feature (default)
//! - **sonic-rs**: `sonic` feature (default)
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::io;
//!
//! fn main() -> tribench::Result<()> {
//!     let mut stdout = io::stdout();
//!     let reports = tribench::benchmark_file("dummy_data.json", "outputs", &mut stdout)?;
//!
//!     for report in &reports {
//!         println!("{}: {} ms total", report.library, report.total().as_millis());
//!     }
//!     Ok(())
//! }
//! ```

pub mod drivers;
pub mod error;
pub mod loader;
pub mod report;
pub mod timing;

// Re-exports
pub use drivers::{run_driver, Library, PRETTY_FILE, RAW_FILE, SINGLE_LINE_FILE};
pub use error::{Error, Result};
pub use loader::load_input;
pub use report::DriverReport;
pub use timing::StepTiming;

use std::io::Write;
use std::path::{Path, PathBuf};

/// Runs every enabled driver, in order, against an already-loaded input.
///
/// Each driver reads the same buffer by shared reference and writes its
/// exports into `<output_root>/<library dir>`. Console lines go to `out` as
/// steps complete.
pub fn run_all<W: Write>(
    input: &str,
    output_root: impl AsRef<Path>,
    out: &mut W,
) -> Result<Vec<DriverReport>> {
    Harness::new()
        .with_output_root(output_root.as_ref())
        .run(input, out)
}

/// Loads the input file and runs every enabled driver.
///
/// The input is loaded before any driver starts, so a missing file fails
/// the run before any output file is created.
pub fn benchmark_file<W: Write>(
    path: impl AsRef<Path>,
    output_root: impl AsRef<Path>,
    out: &mut W,
) -> Result<Vec<DriverReport>> {
    let input = loader::load_input(path)?;
    run_all(&input, output_root, out)
}

/// Builder for configuring a benchmark run.
///
/// # Example
///
/// ```no_run
/// use tribench::{Harness, Library};
///
/// let mut out = Vec::new();
/// let reports = Harness::new()
///     .with_output_root("target/bench-out")
///     .with_libraries([Library::SerdeJson])
///     .run("[1,2,3]", &mut out)?;
/// # Ok::<(), tribench::Error>(())
/// ```
pub struct Harness {
    output_root: PathBuf,
    libraries: Vec<Library>,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    /// Creates a harness targeting `outputs/` with every enabled library.
    pub fn new() -> Self {
        Self {
            output_root: PathBuf::from("outputs"),
            libraries: Library::enabled(),
        }
    }

    /// Sets the directory holding the per-library output directories.
    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    /// Restricts the run to the given libraries, in the given order.
    pub fn with_libraries(mut self, libraries: impl IntoIterator<Item = Library>) -> Self {
        self.libraries = libraries.into_iter().collect();
        self
    }

    /// Runs the selected drivers in sequence.
    ///
    /// The per-library output directories are expected to exist; the
    /// harness does not create them.
    pub fn run<W: Write>(&self, input: &str, out: &mut W) -> Result<Vec<DriverReport>> {
        let mut reports = Vec::with_capacity(self.libraries.len());

        for &library in &self.libraries {
            let output_dir = self.output_root.join(library.dir_name());
            reports.push(run_driver(library, input, &output_dir, out)?);
        }

        Ok(reports)
    }
}
