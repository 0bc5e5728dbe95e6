//! Subscriber export (CSV) reader
//!
//! Expected columns: `name, subscribed_at (RFC 3339), tier`. The first record
//! is a header. Excluded names are dropped before the record is parsed.
//! Records that cannot be turned into an entry are skipped and reported;
//! syntax or I/O errors in the file itself abort the run.

use anyhow::{Context, Result};
use chrono::DateTime;
use credits_data::{Entry, ExcludeList, Tier};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Why a single record was dropped
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Invalid row {0:?}: expected 3 fields")]
    MissingFields(Vec<String>),

    #[error("Invalid row: empty name")]
    EmptyName,

    #[error("Invalid timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        source: chrono::ParseError,
    },
}

/// A record that was dropped, with its line in the input
#[derive(Debug)]
pub struct SkippedRecord {
    pub line: u64,
    pub error: RecordError,
}

/// Entries read from an export
#[derive(Debug, Default)]
pub struct LoadedEntries {
    pub entries: Vec<Entry>,
    pub skipped: Vec<SkippedRecord>,
    /// Records dropped by the exclude list
    pub excluded: usize,
}

/// Turn one CSV record into an entry
pub fn parse_record(record: &StringRecord) -> Result<Entry, RecordError> {
    if record.len() < 3 {
        return Err(RecordError::MissingFields(
            record.iter().map(str::to_string).collect(),
        ));
    }

    let name = &record[0];
    if name.is_empty() {
        return Err(RecordError::EmptyName);
    }

    let since = DateTime::parse_from_rfc3339(&record[1]).map_err(|source| {
        RecordError::Timestamp {
            value: record[1].to_string(),
            source,
        }
    })?;

    Ok(Entry::new(name, Tier::from_marker(&record[2])).with_since(since))
}

/// Read entries from CSV data, leaving out excluded names
pub fn read_entries<R: Read>(reader: R, exclude: &ExcludeList) -> Result<LoadedEntries> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut loaded = LoadedEntries::default();
    for result in reader.records() {
        let record = result.context("Unable to read subscriber list")?;
        if record.get(0).is_some_and(|name| exclude.contains(name)) {
            loaded.excluded += 1;
            continue;
        }

        let line = record.position().map(|p| p.line()).unwrap_or_default();

        match parse_record(&record) {
            Ok(entry) => loaded.entries.push(entry),
            Err(error) => loaded.skipped.push(SkippedRecord { line, error }),
        }
    }

    Ok(loaded)
}

/// Read entries from a CSV file
pub fn load_entries(path: &Path, exclude: &ExcludeList) -> Result<LoadedEntries> {
    let file = File::open(path)
        .with_context(|| format!("Unable to open subscriber list: {}", path.display()))?;
    read_entries(file, exclude).with_context(|| format!("Failed to parse {}", path.display()))
}
