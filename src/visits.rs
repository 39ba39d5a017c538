//! Persisted visit counter.
//!
//! The only durable state of the player: how many times it has been
//! activated. Repeat visitors skip activation gating and get a skip control.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::Config;

const VISITS_FILE: &str = "visits.json";

/// On-disk visit record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    /// Number of activations so far
    pub visits: u64,
    /// RFC 3339 timestamp of the latest activation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_visit: Option<String>,
}

/// JSON file holding a `VisitRecord`.
#[derive(Debug, Clone)]
pub struct VisitStore {
    path: PathBuf,
}

impl VisitStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location under the data directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Config::data_dir()?.join(VISITS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record; a missing file is a first visit.
    pub fn load(&self) -> Result<VisitRecord> {
        if !self.path.exists() {
            return Ok(VisitRecord::default());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Corrupt visit file {}", self.path.display()))
    }

    /// Write the record, creating the parent directory if needed.
    pub fn save(&self, record: &VisitRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    /// Forget all visits.
    pub fn reset(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }
}

/// Visit count owned by a session, optionally backed by a store.
///
/// Persistence failures are logged and never interrupt playback.
#[derive(Debug, Clone)]
pub struct VisitLedger {
    record: VisitRecord,
    store: Option<VisitStore>,
}

impl VisitLedger {
    /// Ledger that never touches disk.
    pub fn in_memory(visits: u64) -> Self {
        Self {
            record: VisitRecord {
                visits,
                last_visit: None,
            },
            store: None,
        }
    }

    /// Ledger backed by `store`. An unreadable file counts as no visits.
    pub fn from_store(store: VisitStore) -> Self {
        let record = store.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring unreadable visit file");
            VisitRecord::default()
        });
        Self {
            record,
            store: Some(store),
        }
    }

    /// Visits recorded so far.
    pub fn count(&self) -> u64 {
        self.record.visits
    }

    pub fn last_visit(&self) -> Option<&str> {
        self.record.last_visit.as_deref()
    }

    /// Count one more visit and persist it. Returns the new count.
    pub fn record_visit(&mut self) -> u64 {
        self.record.visits += 1;
        self.record.last_visit = Some(chrono::Local::now().to_rfc3339());
        if let Some(store) = &self.store {
            if let Err(e) = store.save(&self.record) {
                tracing::warn!(error = %e, "failed to persist visit count");
            }
        }
        tracing::debug!(visits = self.record.visits, "visit recorded");
        self.record.visits
    }
}
