//! Startup seeding of pre-built payload records
//!
//! Loads every `*.json` file in the payload directory into the store,
//! skipping records whose id is already present. One file is one record.
//! The same code path backs service startup and the standalone
//! `import_payloads` binary.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::store::{Error, MessageRecord, MessageStore, Result};

/// Outcome counts for one seeding run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// Records written to the store
    pub inserted: usize,

    /// Files skipped (id already present, or record without an id)
    pub skipped: usize,

    /// Files that could not be read or parsed
    pub failed: usize,
}

/// Load every `*.json` payload in `dir` into the store
///
/// Partial-failure policy is skip-and-continue: a malformed file or a
/// record without an id is logged and skipped, and processing moves on to
/// the remaining files. Store-level failures propagate, except a duplicate
/// id lost to a concurrent writer, which counts as a skip.
///
/// A missing or unreadable payload directory is not an error; it yields an
/// empty report.
///
/// Processing order follows directory listing order. Running the seeder
/// twice over the same directory inserts nothing the second time.
pub async fn seed_payload_dir(store: &dyn MessageStore, dir: &Path) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("payload directory {} not readable: {}", dir.display(), e);
            return Ok(report);
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("unreadable entry in {}: {}", dir.display(), e);
                report.failed += 1;
                continue;
            }
        };

        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }

        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) => {
                warn!("failed to read {}: {}", path.display(), e);
                report.failed += 1;
                continue;
            }
        };

        let record: MessageRecord = match serde_json::from_str(&data) {
            Ok(record) => record,
            Err(e) => {
                warn!("skipping {}: invalid JSON: {}", path.display(), e);
                report.failed += 1;
                continue;
            }
        };

        let id = match record.id() {
            Some(id) => id.to_string(),
            None => {
                warn!("skipping {}: record has no id", path.display());
                report.skipped += 1;
                continue;
            }
        };

        if store.find_message(&id).await?.is_some() {
            info!("skipping {}: id {} already exists", path.display(), id);
            report.skipped += 1;
            continue;
        }

        match store.insert_message(&record).await {
            Ok(()) => {
                info!("inserted {} ({})", path.display(), id);
                report.inserted += 1;
            }
            // Lost a race with another writer; same outcome as the lookup
            Err(Error::DuplicateId(_)) => {
                info!("skipping {}: id {} already exists", path.display(), id);
                report.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}
