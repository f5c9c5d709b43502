//! Profile store: temperature runs as plain `x, y` text records.
//!
//! One record per line, `"<x>, <y>\n"`, no header. Numbers are written with
//! Rust's shortest round-trip float formatting, so reading a saved file back
//! reproduces the values exactly.

use std::io::Write;
use std::path::Path;

use crate::data::segments::PlotPoint;

/// A single profile record: x is the time index, y the temperature.
pub type ProfileRecord = PlotPoint;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected two comma separated fields")]
    MissingField { line: usize },
    #[error("line {line}: invalid number {value:?}")]
    InvalidNumber { line: usize, value: String },
}

/// Write records as `x, y` lines.
pub fn write_profile<W: Write>(mut w: W, records: &[ProfileRecord]) -> std::io::Result<()> {
    for r in records {
        writeln!(w, "{}, {}", r.x, r.y)?;
    }
    Ok(())
}

/// Render records to text.
pub fn serialize(records: &[ProfileRecord]) -> String {
    let mut out = String::new();
    for r in records {
        out.push_str(&format!("{}, {}\n", r.x, r.y));
    }
    out
}

/// Parse profile text.
///
/// Blank lines are skipped. Any other malformed line fails the whole load so
/// that a broken file never yields a partial overlay. Fields past the second
/// are ignored.
pub fn deserialize(text: &str) -> Result<Vec<ProfileRecord>, ProfileError> {
    let mut records = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        if raw.trim().is_empty() {
            continue;
        }
        let mut fields = raw.split(',');
        let (Some(x), Some(y)) = (fields.next(), fields.next()) else {
            return Err(ProfileError::MissingField { line });
        };
        records.push(PlotPoint::new(parse_field(x, line)?, parse_field(y, line)?));
    }
    Ok(records)
}

fn parse_field(field: &str, line: usize) -> Result<f64, ProfileError> {
    let field = field.trim();
    field.parse::<f64>().map_err(|_| ProfileError::InvalidNumber {
        line,
        value: field.to_string(),
    })
}

/// Read and parse a profile file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Vec<ProfileRecord>, ProfileError> {
    let text = std::fs::read_to_string(path)?;
    deserialize(&text)
}

/// Write records to a file, replacing it.
pub fn save_profile<P: AsRef<Path>>(path: P, records: &[ProfileRecord]) -> Result<(), ProfileError> {
    let f = std::fs::File::create(path)?;
    let mut w = std::io::BufWriter::new(f);
    write_profile(&mut w, records)?;
    w.flush()?;
    Ok(())
}
