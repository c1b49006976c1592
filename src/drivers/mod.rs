//! Per-library benchmark drivers.
//!
//! Each driver parses the shared input into its library's document tree,
//! then runs the three export modes against an output directory, timing
//! every step. All drivers write the same trio of files: [`RAW_FILE`],
//! [`PRETTY_FILE`], and [`SINGLE_LINE_FILE`].

mod serde;

#[cfg(feature = "simd")]
mod simd;

#[cfg(feature = "sonic")]
mod sonic;

use crate::error::{Error, Result};
use crate::report::DriverReport;
use crate::timing::{self, StepTiming};
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Compact-serialization output filename.
pub const RAW_FILE: &str = "raw.json";

/// Indented-serialization output filename.
pub const PRETTY_FILE: &str = "pretty.json";

/// One-element-per-line output filename.
pub const SINGLE_LINE_FILE: &str = "single_line.json";

/// The JSON libraries under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Library {
    /// The serde ecosystem's baseline `Value` document model.
    SerdeJson,
    /// SIMD-accelerated in-place parser.
    SimdJson,
    /// SIMD-accelerated parser with a serde-compatible surface.
    SonicRs,
}

impl Library {
    /// Every library this crate knows about, in driver execution order.
    pub const ALL: [Library; 3] = [Library::SerdeJson, Library::SimdJson, Library::SonicRs];

    /// The libraries whose drivers are compiled in, in execution order.
    pub fn enabled() -> Vec<Library> {
        let mut libraries = vec![Library::SerdeJson];

        #[cfg(feature = "simd")]
        libraries.push(Library::SimdJson);

        #[cfg(feature = "sonic")]
        libraries.push(Library::SonicRs);

        libraries
    }

    /// Display name used in dividers and step labels.
    pub fn name(&self) -> &'static str {
        match self {
            Library::SerdeJson => "serde_json",
            Library::SimdJson => "simd-json",
            Library::SonicRs => "sonic-rs",
        }
    }

    /// Per-library output directory name under the output root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Library::SerdeJson => "serde_json",
            Library::SimdJson => "simd_json",
            Library::SonicRs => "sonic_rs",
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs one library's driver: parse, then the three exports, each timed.
///
/// The divider and one line per completed step are written to `out` as the
/// run progresses; the collected timings come back as a [`DriverReport`].
/// The output directory is expected to exist.
pub fn run_driver<W: Write>(
    library: Library,
    input: &str,
    output_dir: &Path,
    out: &mut W,
) -> Result<DriverReport> {
    writeln!(out, "{}", timing::divider(library.name()))?;

    match library {
        Library::SerdeJson => serde::benchmark(input, output_dir, out),

        #[cfg(feature = "simd")]
        Library::SimdJson => simd::benchmark(input, output_dir, out),

        #[cfg(feature = "sonic")]
        Library::SonicRs => sonic::benchmark(input, output_dir, out),

        #[cfg(not(feature = "simd"))]
        Library::SimdJson => Err(Error::UnsupportedLibrary(
            "simd-json support requires the 'simd' feature".into(),
        )),

        #[cfg(not(feature = "sonic"))]
        Library::SonicRs => Err(Error::UnsupportedLibrary(
            "sonic-rs support requires the 'sonic' feature".into(),
        )),
    }
}

/// Times one driver step, reports its line to `out`, and records the timing.
fn timed_step<W: Write, T>(
    out: &mut W,
    steps: &mut Vec<StepTiming>,
    label: String,
    f: impl FnOnce() -> Result<T>,
) -> Result<T> {
    let (result, step) = timing::time(label, f);
    let value = result?;

    writeln!(out, "{step}")?;
    steps.push(step);

    Ok(value)
}

/// Writes one serialized document followed by a trailing newline.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|e| Error::output_write(path, e))?;
    writeln!(file, "{content}").map_err(|e| Error::output_write(path, e))?;
    Ok(())
}
