// File: crates/phase-core/src/parser.rs
// Summary: Line-oriented reader for `temperature pressure phase_name energy` tables.
// Notes:
// - `#` starts a comment anywhere on a line; blank lines are ignored.
// - Lines with fewer than four fields are skipped without error.
// - A line with four or more fields must carry numeric T, P and energy.

use std::io::BufRead;
use std::path::Path;

use crate::error::{Error, Result};
use crate::sample::{Dataset, PhaseSample};

/// Read and parse the dataset stored at `path`.
pub fn read_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let dataset = parse_dataset(std::io::BufReader::new(file)).map_err(|e| match e {
        Error::Data(msg) => Error::Data(format!("{}: {}", path.display(), msg)),
        other => other,
    })?;
    log::info!("Loaded {} samples from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Parse an in-memory table.
pub fn parse_str(text: &str) -> Result<Dataset> {
    parse_dataset(text.as_bytes())
}

/// Parse a dataset from any buffered reader, preserving line order.
pub fn parse_dataset<R: BufRead>(reader: R) -> Result<Dataset> {
    let mut out = Vec::new();
    let mut skipped = 0usize;

    for (idx, raw) in reader.split(b'\n').enumerate() {
        let line_no = idx + 1;
        let line = String::from_utf8(raw?)
            .map_err(|_| Error::Data(format!("line {}: invalid UTF-8", line_no)))?;
        let content = strip_comment(&line).trim();
        if content.is_empty() {
            continue;
        }

        let fields: Vec<&str> = content.split_whitespace().collect();
        if fields.len() < 4 {
            skipped += 1;
            log::warn!("line {}: expected 4 columns, found {}; skipping", line_no, fields.len());
            continue;
        }

        let temperature = parse_float(fields[0], "temperature", line_no)?;
        let pressure = parse_float(fields[1], "pressure", line_no)?;
        let energy = parse_float(fields[3], "energy", line_no)?;
        out.push(PhaseSample::new(temperature, pressure, fields[2], energy));
    }

    if out.is_empty() {
        return Err(Error::Data("no phase data found".into()));
    }
    if skipped > 0 {
        log::debug!("skipped {} short line(s)", skipped);
    }
    Ok(Dataset::new(out))
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_float(field: &str, what: &str, line_no: usize) -> Result<f64> {
    field
        .parse::<f64>()
        .map_err(|_| Error::Data(format!("line {}: invalid {} value '{}'", line_no, what, field)))
}
