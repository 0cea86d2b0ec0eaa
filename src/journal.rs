// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! CSV-backed journal of trade records.
//!
//! The whole file is read on every `load` and rewritten on every `append`.
//! There is no locking: with two writers the last full rewrite wins.

use crate::error::StorageError;
use crate::models::{TIMESTAMP_FORMAT, TradeRecord, journal_timestamp};
use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

pub const COLUMNS: [&str; 11] = [
    "Timestamp",
    "Symbol",
    "Direction",
    "Strategy",
    "EntryPrice",
    "ExitPrice",
    "Outcome",
    "PnL",
    "Emotion",
    "Notes",
    "ImagePath",
];

#[derive(Debug, Clone)]
pub struct JournalStore {
    path: PathBuf,
}

impl JournalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JournalStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Column set of a well-formed journal, in file order.
    pub fn columns() -> &'static [&'static str] {
        &COLUMNS
    }

    /// Reads every record in file order. A missing file yields no records;
    /// a file written before `ImagePath` existed loads with no attachments.
    pub fn load(&self) -> Result<Vec<TradeRecord>, StorageError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "journal not found, starting empty");
            return Ok(Vec::new());
        }
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .map_err(|source| self.csv_error(source))?;
        let headers = rdr
            .headers()
            .map_err(|source| self.csv_error(source))?
            .clone();
        let layout = Layout::from_headers(&headers, &self.path)?;
        if !layout.has_image_path() {
            warn!(path = %self.path.display(), "journal has no ImagePath column, treating as empty");
        }

        let mut out = Vec::new();
        for result in rdr.records() {
            let rec = result.map_err(|source| self.csv_error(source))?;
            out.push(layout.record(&rec)?);
        }
        debug!(rows = out.len(), path = %self.path.display(), "journal loaded");
        Ok(out)
    }

    /// Adds `record` at the end and rewrites the whole file. The timestamp
    /// is stored to the minute; seconds are dropped here, not at load.
    pub fn append(&self, mut record: TradeRecord) -> Result<(), StorageError> {
        record.timestamp = journal_timestamp(record.timestamp);
        let mut records = self.load()?;
        records.push(record);
        self.write_all(&records)?;
        debug!(rows = records.len(), path = %self.path.display(), "journal rewritten");
        Ok(())
    }

    fn write_all(&self, records: &[TradeRecord]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::write(parent, e))?;
        }
        let mut wtr = WriterBuilder::new()
            .from_path(&self.path)
            .map_err(|e| StorageError::write(&self.path, e))?;
        wtr.write_record(COLUMNS)
            .map_err(|e| StorageError::write(&self.path, e))?;
        for r in records {
            wtr.write_record(row_for(r))
                .map_err(|e| StorageError::write(&self.path, e))?;
        }
        wtr.flush().map_err(|e| StorageError::write(&self.path, e))?;
        Ok(())
    }

    fn csv_error(&self, source: csv::Error) -> StorageError {
        if matches!(source.kind(), csv::ErrorKind::Io(_)) {
            StorageError::Read {
                path: self.path.clone(),
                source: source.into(),
            }
        } else {
            StorageError::Csv {
                path: self.path.clone(),
                source,
            }
        }
    }
}

pub fn row_for(r: &TradeRecord) -> [String; 11] {
    [
        r.timestamp_str(),
        r.symbol.clone(),
        r.direction.to_string(),
        r.strategy.to_string(),
        r.entry_price.to_string(),
        r.exit_price.to_string(),
        r.outcome.to_string(),
        r.pnl.to_string(),
        r.emotion.to_string(),
        r.notes.clone(),
        r.image_path.clone().unwrap_or_default(),
    ]
}

/// Column positions found in a journal header. Columns are matched by
/// name; every column but `ImagePath` must be present.
struct Layout {
    required: [usize; 10],
    image_path: Option<usize>,
}

impl Layout {
    fn from_headers(headers: &StringRecord, path: &Path) -> Result<Self, StorageError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let mut required = [0; 10];
        for (slot, name) in required.iter_mut().zip(&COLUMNS[..10]) {
            *slot = find(name).ok_or_else(|| StorageError::MissingColumn {
                path: path.to_path_buf(),
                column: *name,
            })?;
        }
        Ok(Layout {
            required,
            image_path: find(COLUMNS[10]),
        })
    }

    fn has_image_path(&self) -> bool {
        self.image_path.is_some()
    }

    fn cell<'r>(&self, rec: &'r StringRecord, idx: usize) -> &'r str {
        rec.get(self.required[idx]).unwrap_or("")
    }

    fn record(&self, rec: &StringRecord) -> Result<TradeRecord, StorageError> {
        let line = rec.position().map(|p| p.line()).unwrap_or(0);
        let image_path = self
            .image_path
            .and_then(|p| rec.get(p))
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(TradeRecord {
            timestamp: parse_cell(line, COLUMNS[0], self.cell(rec, 0), |s| {
                NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()
            })?,
            symbol: self.cell(rec, 1).to_string(),
            direction: parse_cell(line, COLUMNS[2], self.cell(rec, 2), |s| s.parse().ok())?,
            strategy: parse_cell(line, COLUMNS[3], self.cell(rec, 3), |s| s.parse().ok())?,
            entry_price: parse_cell(line, COLUMNS[4], self.cell(rec, 4), parse_decimal_cell)?,
            exit_price: parse_cell(line, COLUMNS[5], self.cell(rec, 5), parse_decimal_cell)?,
            outcome: parse_cell(line, COLUMNS[6], self.cell(rec, 6), |s| s.parse().ok())?,
            pnl: parse_cell(line, COLUMNS[7], self.cell(rec, 7), parse_decimal_cell)?,
            emotion: parse_cell(line, COLUMNS[8], self.cell(rec, 8), |s| s.parse().ok())?,
            notes: self.cell(rec, 9).to_string(),
            image_path,
        })
    }
}

fn parse_cell<T>(
    line: u64,
    column: &'static str,
    raw: &str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<T, StorageError> {
    parse(raw.trim()).ok_or_else(|| StorageError::Malformed {
        line,
        column,
        value: raw.to_string(),
    })
}

// Spreadsheet edits can leave prices in scientific notation.
fn parse_decimal_cell(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}
