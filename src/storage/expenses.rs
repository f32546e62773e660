//! Expense store backed by a single JSON file
//!
//! The file holds a pretty-printed JSON array of records in insertion order.
//! Every append rewrites the whole array atomically. There is no locking:
//! one process is expected to own the file at a time.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, ExpenseRecord};

use super::file_io::{read_file, read_json, sibling_path, write_json_atomic};

/// Health of the backing file as seen by the last read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreStatus {
    /// No backing file yet
    Missing,
    /// File parsed (or was blank)
    Ok,
    /// File exists but could not be parsed; treated as empty
    Corrupt { reason: String },
}

impl StoreStatus {
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}

/// Records read from the store together with the store's health
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    pub records: Vec<ExpenseRecord>,
    pub status: StoreStatus,
}

/// Append-only persistence for expense records
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store over the given backing file; nothing is touched on disk
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all records along with the store's health
    ///
    /// A missing file is an empty store. A corrupt file is also read as empty,
    /// with the parse failure reported in the status and logged as a warning.
    /// A well-formed file with an amount outside the decimal range is not
    /// corrupt: it fails with `UnrepresentableAmount` so that no append can
    /// replace the records around it. Read failures are returned as errors.
    pub fn snapshot(&self) -> TrackerResult<StoreSnapshot> {
        match read_json::<Vec<ExpenseRecord>, _>(&self.path) {
            Ok(Some(records)) => {
                tracing::debug!(
                    path = %self.path.display(),
                    count = records.len(),
                    "loaded expense records"
                );
                Ok(StoreSnapshot {
                    records,
                    status: StoreStatus::Ok,
                })
            }
            Ok(None) => {
                let status = if self.path.exists() {
                    StoreStatus::Ok
                } else {
                    StoreStatus::Missing
                };
                Ok(StoreSnapshot {
                    records: Vec::new(),
                    status,
                })
            }
            Err(TrackerError::CorruptStore { path, reason }) => {
                if let Some((index, value)) = self.unrepresentable_amount()? {
                    tracing::error!(
                        path = %path.display(),
                        index,
                        %value,
                        "expense store holds an amount outside the supported range"
                    );
                    return Err(TrackerError::UnrepresentableAmount { path, index, value });
                }

                tracing::warn!(
                    path = %path.display(),
                    %reason,
                    "expense store is corrupt; treating it as empty"
                );
                Ok(StoreSnapshot {
                    records: Vec::new(),
                    status: StoreStatus::Corrupt { reason },
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Read all records in insertion order
    pub fn load_all(&self) -> TrackerResult<Vec<ExpenseRecord>> {
        Ok(self.snapshot()?.records)
    }

    /// Append a record and persist the full sequence
    ///
    /// The record is validated first; an invalid record leaves the file
    /// untouched. If the current file is corrupt its bytes are copied to
    /// `<file>.corrupt` before being replaced.
    pub fn append(&self, record: ExpenseRecord) -> TrackerResult<()> {
        record.validate()?;

        let StoreSnapshot {
            mut records,
            status,
        } = self.snapshot()?;

        if status.is_corrupt() {
            self.quarantine()?;
        }

        records.push(record);
        write_json_atomic(&self.path, &records)?;

        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "appended expense record"
        );
        Ok(())
    }

    /// Number of stored records
    pub fn count(&self) -> TrackerResult<usize> {
        Ok(self.load_all()?.len())
    }

    /// Where a corrupt backing file is copied before it is overwritten
    pub fn quarantine_path(&self) -> PathBuf {
        sibling_path(&self.path, "corrupt")
    }

    /// First record whose amount is a JSON number `Amount` cannot hold
    fn unrepresentable_amount(&self) -> TrackerResult<Option<(usize, String)>> {
        let Some(bytes) = read_file(&self.path)? else {
            return Ok(None);
        };
        let Ok(value) = serde_json::from_slice::<serde_json::Value>(&bytes) else {
            return Ok(None);
        };

        let found = value.as_array().and_then(|entries| {
            entries.iter().enumerate().find_map(|(index, entry)| {
                let amount = entry.get("amount").filter(|a| a.is_number())?;
                let text = amount.to_string();
                Amount::parse(&text).is_err().then_some((index, text))
            })
        });
        Ok(found)
    }

    fn quarantine(&self) -> TrackerResult<()> {
        let target = self.quarantine_path();
        fs::copy(&self.path, &target).map_err(|e| {
            TrackerError::Persistence(format!(
                "Failed to preserve corrupt store at {}: {}",
                target.display(),
                e
            ))
        })?;
        tracing::info!(
            path = %target.display(),
            "preserved corrupt expense store before overwriting"
        );
        Ok(())
    }
}
