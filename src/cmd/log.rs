use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use zenith::core::tracker::Tracker;
use zenith::db::Store;
use zenith::models::config::Config;
use zenith::models::{LogPatch, Mood};
use zenith::output;
use zenith::output::human;

use super::resolve_today;

pub enum LogField {
    Mood(Mood),
    Stress(i64),
    Water(u32),
    Sleep(u32),
    Exercise(u32),
    Journal(String),
}

impl LogField {
    /// Out-of-range stress is clamped here, at the producer, per the
    /// permissive-input policy; the merge layer accepts values as-is.
    fn into_patch(self) -> LogPatch {
        let mut patch = LogPatch::default();
        match self {
            Self::Mood(mood) => patch.mood = Some(mood),
            Self::Stress(level) => patch.stress_level = Some(level.clamp(0, 10) as u8),
            Self::Water(cups) => patch.water_intake = Some(cups),
            Self::Sleep(hours) => patch.sleep_hours = Some(hours),
            Self::Exercise(minutes) => patch.exercise_minutes = Some(minutes),
            Self::Journal(text) => patch.journal = Some(text),
        }
        patch
    }
}

pub fn run_update(field: LogField, date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let today = resolve_today(date);
    let store = Store::open(&Config::db_path())?;
    let mut tracker = Tracker::load(&store)?;

    tracker.update_log(today, &field.into_patch());
    tracker.commit(&store)?;

    let log = tracker.today_log(today);
    if human_flag {
        println!("{}", human::format_log(&log));
    } else {
        let out = output::success("log", json!({ "log": log }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_show(date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let today = resolve_today(date);
    let store = Store::open(&Config::db_path())?;
    let tracker = Tracker::load(&store)?;

    // Synthesized when no row exists; showing it does not persist it.
    let log = tracker.today_log(today);
    if human_flag {
        println!("{}", human::format_log(&log));
    } else {
        let out = output::success("log.show", json!({ "log": log }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
