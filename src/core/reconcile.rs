//! Daily-log reconciliation: derives the single mutable "today" row from the
//! append-only log history and merges partial field updates into it.

use chrono::NaiveDate;

use crate::models::{DailyLog, LogPatch};

/// The stored row for `today`, or a synthesized default when absent. The
/// default is never inserted into the history by this read.
pub fn today_log(history: &[DailyLog], today: NaiveDate) -> DailyLog {
    history
        .iter()
        .find(|log| log.date == today)
        .cloned()
        .unwrap_or_else(|| DailyLog::empty(today))
}

/// Field-wise merge of `patch` into the row for `today`, inserting a new row
/// built from the synthesized default when none exists. Idempotent under
/// repeated identical patches; rows for other dates are never touched.
pub fn apply_update(history: &mut Vec<DailyLog>, today: NaiveDate, patch: &LogPatch) {
    match history.iter_mut().find(|log| log.date == today) {
        Some(log) => patch.apply(log),
        None => {
            let mut log = DailyLog::empty(today);
            patch.apply(&mut log);
            history.push(log);
        }
    }
}
