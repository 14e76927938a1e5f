//! The append-only registration table.
//!
//! Backed by a CSV file whose first row is the header; every later row
//! is one registration in arrival order. Deduplication is by exact,
//! case-sensitive match on the email column, served from a `HashSet`
//! index built at open time: first writer wins, duplicates are
//! rejected, nothing is ever rewritten.

use crate::error::Result;
use std::collections::HashSet;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use waitlist_core::{Error as CoreError, RegistrationRecord};

/// Column headers of the registration table, in storage order.
pub const HEADER: [&str; 3] = ["Email", "Timestamp", "User Agent"];

/// An append-only table of registrations over a CSV file.
///
/// Rows are never updated or deleted; the only mutation is
/// [`SheetTable::append`], which performs the duplicate check and the
/// write as one call.
#[derive(Debug)]
pub struct SheetTable {
    path: PathBuf,
    rows: Vec<Vec<String>>,
    emails: HashSet<String>,
}

impl SheetTable {
    /// Opens the table at `path`, loading any existing rows.
    ///
    /// A missing or empty file is an empty table; the header row is
    /// written lazily by the first [`append`](SheetTable::append).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut rows = Vec::new();
        let mut emails = HashSet::new();

        if path.exists() {
            let mut reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_path(&path)?;
            for record in reader.records() {
                let record = record?;
                let row: Vec<String> = record.iter().map(str::to_string).collect();
                // Row 1 is the header; data rows key on column 1.
                if !rows.is_empty()
                    && let Some(email) = row.first()
                {
                    emails.insert(email.clone());
                }
                rows.push(row);
            }
        }

        tracing::debug!(
            path = %path.display(),
            rows = rows.len(),
            "sheet table opened"
        );

        Ok(Self { path, rows, emails })
    }

    /// Appends a registration, enforcing email uniqueness.
    ///
    /// Writes the header row first if the table has no rows yet. On a
    /// duplicate nothing is written and the table is unchanged. Returns
    /// the stored email.
    pub fn append(&mut self, record: RegistrationRecord) -> Result<String> {
        if self.emails.contains(&record.email) {
            tracing::warn!(email = %record.email, "duplicate registration rejected");
            return Err(CoreError::duplicate(record.email).into());
        }

        if self.rows.is_empty() {
            let header: Vec<String> = HEADER.iter().map(|h| h.to_string()).collect();
            self.persist_row(&header)?;
            self.rows.push(header);
        }

        let row = vec![
            record.email.clone(),
            record.timestamp,
            record.user_agent,
        ];
        self.persist_row(&row)?;
        self.rows.push(row);
        self.emails.insert(record.email.clone());

        tracing::info!(email = %record.email, "registration appended");
        Ok(record.email)
    }

    /// Every row including the header, in arrival order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Total row count including the header row.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of data rows (header excluded).
    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Whether an email is already registered (exact match).
    pub fn contains(&self, email: &str) -> bool {
        self.emails.contains(email)
    }

    /// Name of the sheet, derived from the file stem.
    pub fn sheet_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "sheet".to_string())
    }

    fn persist_row(&self, row: &[String]) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record(row)?;
        writer.flush()?;
        Ok(())
    }
}
