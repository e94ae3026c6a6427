pub mod completions;
pub mod config;
pub mod export;
pub mod habit;
pub mod init;
pub mod insights;
pub mod log;
pub mod reset;
pub mod status;

use chrono::{Local, NaiveDate};

/// The current calendar date, unless overridden via the global `--date` flag.
pub fn resolve_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

/// Report a benign miss (stale habit id) without failing the command.
pub fn report_not_found(command: &str, id: &str, human: bool) {
    if human {
        println!("No habit with id {}", id);
    } else {
        let out = zenith::output::error(command, "not_found", &format!("no habit with id {}", id));
        println!("{}", serde_json::to_string(&out).expect("envelope serializes"));
    }
}
