use memchr::memchr;
use thiserror::Error;

use super::core::Record;

/// Field delimiter within a record line.
pub const DELIMITER: u8 = b',';

/// Validation failures raised while parsing raw input.
///
/// All of these are caller-input errors, detected before any sorting
/// happens, and reported for the first offending line in input order.
/// Line numbers are 1-based and count every input line, blank ones
/// included.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The line does not split into exactly two fields.
    #[error("line {line}: expected exactly two fields \"name,score\"")]
    MalformedLine { line: usize },

    /// The name field is empty after trimming.
    #[error("line {line}: name must not be empty")]
    EmptyName { line: usize },

    /// The score field is not an integer.
    #[error("line {line}: score must be an integer")]
    InvalidScore { line: usize },

    /// The score is an integer but falls outside 0..=100.
    #[error("line {line}: score must be between 0 and 100")]
    ScoreOutOfRange { line: usize },

    /// No line held a record at all.
    #[error("input contains no records; need at least one \"name,score\" line")]
    EmptyDataset,
}

/// Parse raw delimited text into records, preserving input line order.
///
/// One record per line as `name,score`. Whitespace around the line and
/// around each field is ignored; blank lines are skipped silently. Stops
/// at the first violation.
pub fn parse_records(raw: &str) -> Result<Vec<Record>, ParseError> {
    let mut records = Vec::new();

    for (idx, line) in raw.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // The delimiter is ASCII, so the byte offset is a char boundary.
        let bytes = line.as_bytes();
        let sep = match memchr(DELIMITER, bytes) {
            Some(pos) => pos,
            None => return Err(ParseError::MalformedLine { line: line_no }),
        };
        if memchr(DELIMITER, &bytes[sep + 1..]).is_some() {
            return Err(ParseError::MalformedLine { line: line_no });
        }

        let name = line[..sep].trim();
        let score_field = line[sep + 1..].trim();

        if name.is_empty() {
            return Err(ParseError::EmptyName { line: line_no });
        }

        let score: i64 = score_field
            .parse()
            .map_err(|_| ParseError::InvalidScore { line: line_no })?;
        if !(0..=100).contains(&score) {
            return Err(ParseError::ScoreOutOfRange { line: line_no });
        }

        records.push(Record::new(name, score as u8));
    }

    if records.is_empty() {
        return Err(ParseError::EmptyDataset);
    }
    Ok(records)
}
