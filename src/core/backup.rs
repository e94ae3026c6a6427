//! Backup export/import: a single JSON document holding both collections,
//! shaped to round-trip with the original web app's backup files.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{DailyLog, Habit};

pub const BACKUP_VERSION: &str = "1.0";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BackupDocument<'a> {
    habits: &'a [Habit],
    logs: &'a [DailyLog],
    version: &'static str,
    exported_at: String,
}

// Import only insists on the `habits` and `logs` keys; a version stamp or
// anything else extra is ignored.
#[derive(Deserialize)]
struct ImportDocument {
    habits: Vec<Habit>,
    logs: Vec<DailyLog>,
}

/// Serialize the full state as a pretty-printed backup document.
pub fn export_json(habits: &[Habit], logs: &[DailyLog]) -> Result<String> {
    let doc = BackupDocument {
        habits,
        logs,
        version: BACKUP_VERSION,
        exported_at: Utc::now().to_rfc3339(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Default backup filename, stamped with the current date.
pub fn default_filename(today: NaiveDate) -> String {
    format!("zenith-backup-{}.json", today)
}

/// Parse a backup document. Rejects payloads missing the `habits` or `logs`
/// collections as malformed; performs no merge or de-duplication, the caller
/// wholesale-replaces its state with the result.
pub fn import_json(json_str: &str) -> Result<(Vec<Habit>, Vec<DailyLog>)> {
    let doc: ImportDocument = serde_json::from_str(json_str)
        .map_err(|e| anyhow::anyhow!("invalid backup file: {}", e))?;
    Ok((doc.habits, doc.logs))
}
