//! Input loading for the benchmark harness.

use crate::error::{Error, Result};
use std::io::Read;
use std::path::Path;

/// Reads the whole input file into memory as a string.
///
/// Every driver consumes this one buffer by shared reference, so the read
/// happens exactly once per run.
pub fn load_input(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| Error::InputRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the whole input from a reader.
pub fn load_reader<R: Read>(mut reader: R) -> Result<String> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}
