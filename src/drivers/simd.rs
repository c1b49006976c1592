//! simd-json driver.

use super::{timed_step, write_output, PRETTY_FILE, RAW_FILE, SINGLE_LINE_FILE};
use crate::error::{Error, Result};
use crate::report::DriverReport;
use simd_json::prelude::*;
use simd_json::OwnedValue;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const NAME: &str = "simd-json";

pub(super) fn benchmark<W: Write>(
    input: &str,
    output_dir: &Path,
    out: &mut W,
) -> Result<DriverReport> {
    let mut steps = Vec::with_capacity(4);

    // simd-json parses in place, so this driver works on its own copy of
    // the shared input buffer.
    let mut bytes = input.as_bytes().to_vec();
    let value = timed_step(out, &mut steps, format!("{NAME} parse"), move || {
        simd_json::to_owned_value(&mut bytes).map_err(|e| Error::parse(NAME, e))
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

fn export_raw(value: &OwnedValue, output_dir: &Path) -> Result<()> {
    let text = simd_json::to_string(value).map_err(|e| Error::serialize(NAME, e))?;
    write_output(&output_dir.join(RAW_FILE), &text)
}

fn export_pretty(value: &OwnedValue, output_dir: &Path) -> Result<()> {
    let text = simd_json::to_string_pretty(value).map_err(|e| Error::serialize(NAME, e))?;
    write_output(&output_dir.join(PRETTY_FILE), &text)
}

fn export_single_line(value: &OwnedValue, output_dir: &Path) -> Result<()> {
    let elements = value.as_array().ok_or(Error::NotAnArray)?;

    let path = output_dir.join(SINGLE_LINE_FILE);
    let file = File::create(&path).map_err(|e| Error::output_write(&path, e))?;
    let mut writer = BufWriter::new(file);

    for element in elements {
        let line = simd_json::to_string(element).map_err(|e| Error::serialize(NAME, e))?;
        writeln!(writer, "{line}").map_err(|e| Error::output_write(&path, e))?;
    }

    writer.flush().map_err(|e| Error::output_write(&path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const INPUT: &str = r#"[{"a":1},{"b":2}]"#;

    #[test]
    fn test_benchmark_writes_all_exports() {
        let dir = tempdir().unwrap();
        let mut out = Vec::new();

        let report = benchmark(INPUT, dir.path(), &mut out).unwrap();
        assert_eq!(report.library, NAME);
        assert_eq!(report.steps.len(), 4);

        for name in [RAW_FILE, PRETTY_FILE, SINGLE_LINE_FILE] {
            let contents = std::fs::read_to_string(dir.path().join(name)).unwrap();
            assert!(!contents.is_empty());
        }

        let console = String::from_utf8(out).unwrap();
        assert!(console.contains("simd-json parse time = "));
    }

    #[test]
    fn test_raw_round_trips_through_reference_parser() {
        let dir = tempdir().unwrap();
        benchmark(INPUT, dir.path(), &mut Vec::new()).unwrap();

        let raw = std::fs::read_to_string(dir.path().join(RAW_FILE)).unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let original: serde_json::Value = serde_json::from_str(INPUT).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn test_pretty_matches_raw() {
        let dir = tempdir().unwrap();
        benchmark(INPUT, dir.path(), &mut Vec::new()).unwrap();

        let raw = std::fs::read_to_string(dir.path().join(RAW_FILE)).unwrap();
        let pretty = std::fs::read_to_string(dir.path().join(PRETTY_FILE)).unwrap();
        let from_raw: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let from_pretty: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(from_pretty, from_raw);
    }

    #[test]
    fn test_single_line_one_row_per_element() {
        let dir = tempdir().unwrap();
        benchmark(INPUT, dir.path(), &mut Vec::new()).unwrap();

        let single = std::fs::read_to_string(dir.path().join(SINGLE_LINE_FILE)).unwrap();
        let lines: Vec<&str> = single.lines().collect();
        assert_eq!(lines.len(), 2);

        let original: serde_json::Value = serde_json::from_str(INPUT).unwrap();
        for (line, element) in lines.iter().zip(original.as_array().unwrap()) {
            let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(&parsed, element);
        }
    }

    #[test]
    fn test_parse_error_names_library() {
        let dir = tempdir().unwrap();
        let err = benchmark("{not json", dir.path(), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, Error::Parse { library: NAME, .. }));
    }

    #[test]
    fn test_non_array_input_fails_single_line() {
        let dir = tempdir().unwrap();
        let err = benchmark(r#"{"a":1}"#, dir.path(), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, Error::NotAnArray));
    }

    #[test]
    fn test_input_buffer_is_untouched() {
        let dir = tempdir().unwrap();
        let input = String::from(INPUT);
        benchmark(&input, dir.path(), &mut Vec::new()).unwrap();
        assert_eq!(input, INPUT);
    }
}
