//! Print CSV files as JSON rows

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::tables::{csv_to_array, csv_to_table};
use crate::Site;

/// Read a CSV file with the given (or configured) delimiter
pub fn run_file(site: &Site, file: &Path, delimiter: Option<char>) -> Result<()> {
    let delimiter = delimiter.unwrap_or(site.config.csv_delimiter);
    let delimiter = u8::try_from(delimiter)
        .with_context(|| format!("Delimiter must be a single-byte character: {:?}", delimiter))?;

    let rows = csv_to_array(site.resolve_path(file), delimiter)?;
    tracing::info!("Read {} rows", rows.len());
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

/// Parse a file holding pasted table text
pub fn run_text(site: &Site, file: &Path) -> Result<()> {
    let path = site.resolve_path(file);
    let text = fs::read_to_string(&path).with_context(|| format!("Failed to read {:?}", path))?;

    let table = csv_to_table(&text);
    println!("{}", serde_json::to_string_pretty(&table)?);
    Ok(())
}
