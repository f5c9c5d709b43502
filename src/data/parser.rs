//! Line parser for the thermocouple feed.
//!
//! The probe emits one reading per second as a line of whitespace separated
//! fields, e.g. `";\t:\t23.50\t22.00\t1s"`. Only the third field carries the
//! thermocouple temperature in centigrade; the fourth is most likely the
//! reference junction and is ignored.

/// Index of the field holding the thermocouple temperature.
pub const TEMPERATURE_FIELD: usize = 2;

/// Outcome of parsing one line of the feed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedLine {
    /// The line carried a temperature reading.
    Temperature(f64),
    /// Too few fields; the line was cut off mid-transmission and is dropped.
    Rejected,
}

/// The line had enough fields but the temperature field is not a number.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LineError {
    #[error("invalid temperature field {token:?}")]
    InvalidTemperature { token: String },
}

/// Parse a single line (without its terminating newline).
///
/// Lines with fewer than three fields are rejected silently. A line with
/// enough fields whose temperature field does not parse is an error.
pub fn parse_line(line: &str) -> Result<ParsedLine, LineError> {
    let Some(token) = line.split_whitespace().nth(TEMPERATURE_FIELD) else {
        return Ok(ParsedLine::Rejected);
    };
    token
        .parse::<f64>()
        .map(ParsedLine::Temperature)
        .map_err(|_| LineError::InvalidTemperature {
            token: token.to_string(),
        })
}
