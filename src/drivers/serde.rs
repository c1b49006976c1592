//! serde_json driver.

use super::{timed_step, write_output, PRETTY_FILE, RAW_FILE, SINGLE_LINE_FILE};
use crate::error::{Error, Result};
use crate::report::DriverReport;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const NAME: &str = "serde_json";

pub(super) fn benchmark<W: Write>(
    input: &str,
    output_dir: &Path,
    out: &mut W,
) -> Result<DriverReport> {
    let mut steps = Vec::with_capacity(4);

    let value = timed_step(out, &mut steps, format!("{NAME} parse"), || {
        serde_json::from_str::<Value>(input).map_err(|e| Error::parse(NAME, e))
    })?;

    timed_step(out, &mut steps, format!("{NAME} export raw"), || {
        export_raw(&value, output_dir)
    })?;
    timed_step(out, &mut steps, format!("{NAME} export pretty"), || {
        export_pretty(&value, output_dir)
    })?;
    timed_step(out, &mut steps, format!("{NAME} export single line"), || {
        export_single_line(&value, output_dir)
    })?;

    Ok(DriverReport::new(NAME, steps))
}

fn export_raw(value: &Value, output_dir: &Path) -> Result<()> {
    let text = serde_json::to_string(value).map_err(|e| Error::serialize(NAME, e))?;
    write_output(&output_dir.join(RAW_FILE), &text)
}

fn export_pretty(value: &Value, output_dir: &Path) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(|e| Error::serialize(NAME, e))?;
    write_output(&output_dir.join(PRETTY_FILE), &text)
}

fn export_single_line(value: &Value, output_dir: &Path) -> Result<()> {
    let elements = value.as_array().ok_or(Error::NotAnArray)?;

    let path = output_dir.join(SINGLE_LINE_FILE);
    let file = File::create(&path).map_err(|e| Error::output_write(&path, e))?;
    let mut writer = BufWriter::new(file);

    for element in elements {
        let line = serde_json::to_string(element).map_err(|e| Error::serialize(NAME, e))?;
        writeln!(writer, "{line}").map_err(|e| Error::output_write(&path, e))?;
    }

    writer.flush().map_err(|e| Error::output_write(&path, e))?;
    Ok(())
}
