use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use zenith::core::backup;
use zenith::core::tracker::Tracker;
use zenith::db::Store;
use zenith::models::config::Config;
use zenith::output;

use super::resolve_today;

pub fn run_export(
    output_path: Option<&str>,
    date: Option<NaiveDate>,
    human_flag: bool,
) -> Result<()> {
    let today = resolve_today(date);
    let store = Store::open(&Config::db_path())?;
    let tracker = Tracker::load(&store)?;

    let content = backup::export_json(&tracker.habits, &tracker.logs)?;
    let path = output_path
        .map(str::to_string)
        .unwrap_or_else(|| backup::default_filename(today));
    std::fs::write(&path, &content)?;

    if human_flag {
        println!("Exported {} habits and {} logs to {}", tracker.habits.len(), tracker.logs.len(), path);
    } else {
        let out = output::success(
            "export",
            json!({
                "path": path,
                "habits": tracker.habits.len(),
                "logs": tracker.logs.len(),
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_import(file_path: &str, human_flag: bool) -> Result<()> {
    let store = Store::open(&Config::db_path())?;
    let mut tracker = Tracker::load(&store)?;

    let content = std::fs::read_to_string(file_path)?;
    let (habits, logs) = backup::import_json(&content)?;
    let (habit_count, log_count) = (habits.len(), logs.len());
    tracker.import(habits, logs);
    tracker.commit(&store)?;

    if human_flag {
        println!("Restored {} habits and {} logs from {}", habit_count, log_count, file_path);
    } else {
        let out = output::success(
            "import",
            json!({
                "file": file_path,
                "habits": habit_count,
                "logs": log_count,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
