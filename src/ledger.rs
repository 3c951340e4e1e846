use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;

use crate::error::{HudError, HudResult};

/// The persisted per-day record. `date` is the local calendar day the hours
/// were accumulated on, serialized as `YYYY-MM-DD`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LedgerRecord {
    pub date: NaiveDate,
    pub hours: f64,
}

impl LedgerRecord {
    pub fn empty(date: NaiveDate) -> Self {
        Self { date, hours: 0.0 }
    }
}

/// Date-keyed focus-hours accumulator backed by a single JSON document.
///
/// Access is plain read-modify-write with no locking: two callers racing
/// within the same instant can lose one write (last writer wins). Accepted
/// for a single-user, low-frequency workload.
#[derive(Clone, Debug)]
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Hours accumulated for `today`. A missing, unreadable, or unparsable
    /// store — and any record dated to a different day, past or future —
    /// reinitializes to zero. The dashboard must always render, so failures
    /// to persist the fresh record are logged, not propagated.
    pub fn read_hours(&self, today: NaiveDate) -> f64 {
        let record = match self.load() {
            Some(r) if r.date == today => return r.hours,
            _ => LedgerRecord::empty(today),
        };

        if let Err(err) = self.store(&record) {
            tracing::warn!(path = %self.path.display(), %err, "ledger reinit write failed");
        }
        0.0
    }

    /// Adds `delta` hours to today's total, resetting first if the stored
    /// record belongs to another day. Returns the new total.
    pub fn add_hours(&self, today: NaiveDate, delta: f64) -> HudResult<f64> {
        if !(delta > 0.0) {
            return Err(HudError::validation("ledger delta must be > 0"));
        }

        let mut record = match self.load() {
            Some(r) if r.date == today => r,
            _ => LedgerRecord::empty(today),
        };
        record.hours += delta;
        self.store(&record)?;
        Ok(record.hours)
    }

    fn load(&self) -> Option<LedgerRecord> {
        let f = File::open(&self.path).ok()?;
        match serde_json::from_reader(BufReader::new(f)) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %err,
                    "ledger payload unreadable, treating as absent"
                );
                None
            }
        }
    }

    fn store(&self, record: &LedgerRecord) -> HudResult<()> {
        let json = serde_json::to_string(record)
            .map_err(|e| HudError::serde(format!("encode ledger record: {e}")))?;
        std::fs::write(&self.path, json).map_err(|e| {
            HudError::ledger(format!("write '{}': {e}", self.path.display()))
        })
    }
}
