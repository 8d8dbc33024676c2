//! CSV readers for files and inline table text

use csv::ReaderBuilder;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::helpers::decode_entities;

/// Errors raised while reading CSV files
#[derive(Error, Debug)]
pub enum TableError {
    #[error("File not found or not readable: {0:?}")]
    NotFound(PathBuf),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Read a local CSV file into rows of fields
///
/// The file has no header row; rows may have differing lengths.
pub fn csv_to_array<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Vec<Vec<String>>, TableError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(TableError::NotFound(path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    tracing::debug!("Read {} rows from {:?}", rows.len(), path);
    Ok(rows)
}

/// Parse CSV text pasted into a field into rows of fields
///
/// Each line is trimmed and entity-decoded before parsing, so encoded
/// quotes (`&quot;`) act as CSV quotes. Blank lines are dropped, and empty
/// text (including a bare `"0"`) yields no rows.
pub fn csv_to_table(text: &str) -> Vec<Vec<String>> {
    if text.is_empty() || text == "0" {
        return Vec::new();
    }

    text.split('\n')
        .map(|line| decode_entities(line.trim()))
        .filter(|line| !line.is_empty())
        .filter_map(|line| parse_line(&line))
        .collect()
}

fn parse_line(line: &str) -> Option<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    match reader.records().next()? {
        Ok(record) => Some(record.iter().map(str::to_string).collect()),
        Err(e) => {
            tracing::warn!("Skipping malformed CSV line {:?}: {}", line, e);
            None
        }
    }
}
