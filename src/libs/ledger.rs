//! Ledger storage: the persisted sheet of weekly results.
//!
//! ## Row layout
//!
//! | Column | Content                                 |
//! |--------|-----------------------------------------|
//! | 0      | week label (`M/D/YYYY` of the Monday)   |
//! | 1      | employee                                |
//! | 2      | category                                |
//! | 3      | hours of one billable entry             |
//! | 4      | notes of that entry                     |
//! | 7      | over/under balance after the week       |
//! | 8      | paid time off                           |
//! | 9      | non-billable hours                      |
//!
//! Each billable entry gets its own row. Columns 7-9 are filled on the last
//! row written for the week, which makes column 7 of the last row the carried
//! balance for the next week.
//!
//! ## Access pattern
//!
//! A [`Ledger`] hands out [`Sheet`] snapshots with [`Ledger::fetch`]. Cells are
//! changed on the snapshot and committed with [`Ledger::synchronize`]. The
//! reconciler fetches a fresh snapshot for every week.

use super::balance::{parse_previous, WeekRecord};
use super::error::AppError;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const COL_LABEL: usize = 0;
pub const COL_EMPLOYEE: usize = 1;
pub const COL_CATEGORY: usize = 2;
pub const COL_HOURS: usize = 3;
pub const COL_NOTES: usize = 4;
pub const COL_OVER_UNDER: usize = 7;
pub const COL_PTO: usize = 8;
pub const COL_NON_BILLABLE: usize = 9;

/// Persistent backing store for the ledger sheet.
pub trait Ledger {
    /// Reads the current state of the ledger.
    fn fetch(&mut self) -> Result<Sheet, AppError>;

    /// Commits every cell of `sheet` to storage.
    fn synchronize(&mut self, sheet: &Sheet) -> Result<(), AppError>;
}

/// In-memory snapshot of the ledger rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn last_row(&self) -> Option<&[String]> {
        self.rows.last().map(|row| row.as_slice())
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(column)).map(|cell| cell.as_str())
    }

    /// Sets a cell, growing the sheet with empty cells as needed.
    pub fn update(&mut self, row: usize, column: usize, value: &str) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= column {
            cells.resize(column + 1, String::new());
        }
        cells[column] = value.to_string();
    }

    /// Over/under carried by the last row, zero when absent or unreadable.
    pub fn previous_balance(&self) -> f64 {
        parse_previous(self.last_row().and_then(|row| row.get(COL_OVER_UNDER)).map(|cell| cell.as_str()))
    }

    /// Appends a week after the current last row and returns the index of the
    /// row holding its summary cells.
    ///
    /// A week without billable entries still gets a row of its own so the
    /// previous week's summary is never overwritten.
    pub fn append_week(&mut self, record: &WeekRecord) -> usize {
        let mut row = self.rows.len();

        if record.entries.is_empty() {
            self.update(row, COL_LABEL, &record.label);
            self.update(row, COL_EMPLOYEE, &record.employee);
            self.update(row, COL_CATEGORY, &record.category);
        } else {
            for (offset, entry) in record.entries.iter().enumerate() {
                let index = row + offset;
                self.update(index, COL_LABEL, &entry.label);
                self.update(index, COL_EMPLOYEE, &entry.employee);
                self.update(index, COL_CATEGORY, &entry.category);
                self.update(index, COL_HOURS, &entry.hours);
                self.update(index, COL_NOTES, &entry.notes);
            }
            row += record.entries.len() - 1;
        }

        self.update(row, COL_OVER_UNDER, &record.summary.over_under);
        self.update(row, COL_PTO, &record.summary.pto);
        self.update(row, COL_NON_BILLABLE, &record.summary.non_billable_hours);
        row
    }
}

/// Ledger kept as a headerless CSV file.
///
/// A missing file reads as an empty sheet and is created on the first
/// synchronize.
#[derive(Debug, Clone)]
pub struct CsvLedger {
    path: PathBuf,
}

impl CsvLedger {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes a new version of the ledger file through `write`.
    ///
    /// Content is staged in a temporary file next to the ledger and renamed
    /// over it only once `write` succeeds. On error the previous file is left
    /// as it was and the staged file is removed.
    pub fn replace_with<F>(&self, write: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut File) -> Result<(), AppError>,
    {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => parent,
            None => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut staged = NamedTempFile::new_in(dir)?;
        write(staged.as_file_mut())?;
        staged.as_file().sync_all()?;
        staged.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl Ledger for CsvLedger {
    fn fetch(&mut self) -> Result<Sheet, AppError> {
        if !self.path.exists() {
            return Ok(Sheet::default());
        }

        let mut reader = ReaderBuilder::new().has_headers(false).flexible(true).from_path(&self.path)?;
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }
        Ok(Sheet::new(rows))
    }

    fn synchronize(&mut self, sheet: &Sheet) -> Result<(), AppError> {
        self.replace_with(|file| {
            let mut writer = WriterBuilder::new().has_headers(false).flexible(true).from_writer(file);
            for row in sheet.rows() {
                writer.write_record(row)?;
            }
            writer.flush()?;
            Ok(())
        })
    }
}
