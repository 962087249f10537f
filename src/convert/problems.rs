//! `problems.csv` → `problems.json`
//!
//! Every row is data (no header). Columns 3, 4 and 5 become `dialogs`,
//! `options` and `ans`; the options cell holds one option per line.

use super::lines::split_lines;
use crate::domain::Problem;
use crate::output::write_output;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

const DIALOGS_COLUMN: usize = 3;
const OPTIONS_COLUMN: usize = 4;
const ANSWER_COLUMN: usize = 5;
const MIN_COLUMNS: usize = ANSWER_COLUMN + 1;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed reading CSV input")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV input")]
    Csv(#[from] csv::Error),

    #[error("Row {row} has {columns} column(s), expected at least 6")]
    ShortRow { row: usize, columns: usize },

    #[error("Failed serializing problems as JSON")]
    Json(#[from] serde_json::Error),
}

fn is_terminator(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

/// Line breaks in `bytes`, counting `\r\n` once.
fn count_breaks(bytes: &[u8]) -> usize {
    let mut breaks = 0;
    let mut i = 0;
    while i < bytes.len() {
        i += if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
        breaks += 1;
    }
    breaks
}

/// Blank lines the CSV reader skipped when it consumed `input[start..end]`.
///
/// `start` sits right after the previous record, whose terminator is the
/// byte before it. The reader may consume the `\n` of a `\r\n` pair on either
/// side of `start`, so that terminator byte is counted with the run.
fn skipped_blank_lines(input: &[u8], start: usize, end: usize) -> usize {
    let after_terminator = start > 0 && is_terminator(input[start - 1]);
    let from = if after_terminator { start - 1 } else { start };
    let run = input[start..end].iter().take_while(|b| is_terminator(**b)).count();
    count_breaks(&input[from..start + run]).saturating_sub(usize::from(after_terminator))
}

/// Read every CSV row into a [`Problem`]. Fails on the first short row.
///
/// Blank lines are rows with no columns, so they abort the conversion too.
pub fn parse_problems<R: Read>(mut reader: R) -> Result<Vec<Problem>, ConvertError> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input.as_slice());

    let mut problems = Vec::new();
    let mut record = csv::StringRecord::new();
    let mut consumed = 0;
    let mut row = 0;
    while csv_reader.read_record(&mut record)? {
        let end = csv_reader.position().byte() as usize;
        if skipped_blank_lines(&input, consumed, end) > 0 {
            return Err(ConvertError::ShortRow { row: row + 1, columns: 0 });
        }
        consumed = end;
        row += 1;

        if record.len() < MIN_COLUMNS {
            return Err(ConvertError::ShortRow { row, columns: record.len() });
        }
        problems.push(Problem {
            dialogs: record[DIALOGS_COLUMN].to_string(),
            options: split_lines(&record[OPTIONS_COLUMN]),
            ans: record[ANSWER_COLUMN].to_string(),
        });
    }

    if skipped_blank_lines(&input, consumed, input.len()) > 0 {
        return Err(ConvertError::ShortRow { row: row + 1, columns: 0 });
    }
    Ok(problems)
}

/// JSON array with 4-space indentation, as UTF-8 bytes. Non-ASCII text is
/// written as-is.
pub fn render_problems_json(problems: &[Problem]) -> Result<Vec<u8>, ConvertError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    problems.serialize(&mut serializer)?;
    Ok(buf)
}

/// Convert `input` to `output`. Output is only written once every row parsed.
///
/// Returns the number of problems written.
pub fn convert_file(input: &Path, output: &Path) -> Result<usize> {
    let file = File::open(input)
        .with_context(|| format!("Failed opening CSV file: {}", input.display()))?;
    let problems =
        parse_problems(file).with_context(|| format!("Failed converting {}", input.display()))?;
    let json = render_problems_json(&problems)?;
    write_output(output, &json)?;

    tracing::info!("Converted {} problem(s) to {}", problems.len(), output.display());
    Ok(problems.len())
}
