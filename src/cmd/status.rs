use anyhow::Result;
use chrono::{Local, NaiveDate, Timelike};
use serde_json::json;

use zenith::core::stats;
use zenith::core::tracker::Tracker;
use zenith::db::Store;
use zenith::models::config::Config;
use zenith::output;
use zenith::output::human;

use super::resolve_today;

pub fn run(date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let today = resolve_today(date);
    let store = Store::open(&Config::db_path())?;
    let tracker = Tracker::load(&store)?;
    let today_log = tracker.today_log(today);

    let summary = stats::completion_summary(&tracker.habits, today);
    let best_streak = tracker
        .habits
        .iter()
        .map(|h| stats::streak(h, today))
        .max()
        .unwrap_or(0);
    let nudge = stats::hydration_nudge(&today_log, Local::now().hour());
    let quote = human::quote_of_the_day(today);

    if human_flag {
        println!(
            "{}",
            human::format_status(today, &summary, best_streak, nudge, quote)
        );
    } else {
        let out = output::success(
            "status",
            json!({
                "date": today,
                "completed": summary.completed,
                "total": summary.total,
                "ratio": summary.ratio,
                "best_streak": best_streak,
                "hydration_nudge": nudge,
                "quote": quote,
                "log": today_log,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
