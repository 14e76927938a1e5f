//! The local backup list.
//!
//! A JSON array of email strings the client has successfully submitted,
//! kept under a single named file. Best-effort and non-authoritative:
//! it only exists so the client can avoid prompting the user to
//! resubmit an address it already sent, and it is never consulted by
//! the sheet store's uniqueness check.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File name the backup list is stored under.
pub const BACKUP_FILE_NAME: &str = "waitlist_emails.json";

/// The client-side list of successfully submitted emails.
#[derive(Debug)]
pub struct BackupList {
    path: PathBuf,
    emails: Vec<String>,
}

impl BackupList {
    /// Loads the list from `path`. A missing file is an empty list.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let emails = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            Vec::new()
        };
        Ok(Self { path, emails })
    }

    /// Default location: `waitlist/waitlist_emails.json` under the
    /// platform data directory, falling back to the current directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("waitlist")
            .join(BACKUP_FILE_NAME)
    }

    /// Records an email, inserting only if it is not already present
    /// (exact string match). Returns whether anything was inserted; the
    /// file is rewritten only on insertion.
    pub fn record<S: Into<String>>(&mut self, email: S) -> Result<bool> {
        let email = email.into();
        if self.emails.contains(&email) {
            return Ok(false);
        }
        self.emails.push(email);
        self.save()?;
        Ok(true)
    }

    /// Whether an email was already recorded (exact match).
    pub fn contains(&self, email: &str) -> bool {
        self.emails.iter().any(|e| e == email)
    }

    /// The recorded emails, in submission order.
    pub fn emails(&self) -> &[String] {
        &self.emails
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string(&self.emails)?)?;
        Ok(())
    }
}
