#![allow(dead_code)]

use chrono::NaiveDate;
use tempfile::TempDir;
use zenith::db::Store;
use zenith::models::{Category, DailyLog, Habit};

/// Create a temporary store for testing.
pub fn setup_store() -> (TempDir, Store) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let store = Store::open(&db_path).unwrap();
    (dir, store)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_habit(name: &str, category: Category, goal: Option<&str>) -> Habit {
    Habit::new(
        name.to_string(),
        category,
        None,
        goal.map(str::to_string),
        None,
    )
}

pub fn make_log(log_date: NaiveDate) -> DailyLog {
    DailyLog::empty(log_date)
}
