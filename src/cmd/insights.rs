use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use zenith::core::{achievements, stats};
use zenith::core::tracker::Tracker;
use zenith::db::Store;
use zenith::models::config::Config;
use zenith::output;
use zenith::output::human;

use super::resolve_today;

pub fn run_balance(date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let today = resolve_today(date);
    let store = Store::open(&Config::db_path())?;
    let tracker = Tracker::load(&store)?;

    let balance = stats::category_balance(&tracker.habits, today);
    if human_flag {
        println!("{}", human::format_balance(&balance));
    } else {
        let out = output::success("insights.balance", json!({ "balance": balance }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_trend(date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let today = resolve_today(date);
    let store = Store::open(&Config::db_path())?;
    let tracker = Tracker::load(&store)?;

    let series = stats::trend_series(&tracker.habits, &tracker.logs, today);
    if human_flag {
        println!("{}", human::format_trend(&series));
    } else {
        let out = output::success("insights.trend", json!({ "series": series }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_averages(human_flag: bool) -> Result<()> {
    let store = Store::open(&Config::db_path())?;
    let tracker = Tracker::load(&store)?;

    let averages = stats::averages(&tracker.logs);
    if human_flag {
        println!("{}", human::format_averages(&averages));
    } else {
        let out = output::success("insights.averages", json!({ "averages": averages }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_achievements(human_flag: bool) -> Result<()> {
    let store = Store::open(&Config::db_path())?;
    let tracker = Tracker::load(&store)?;

    let badges = achievements::evaluate(&tracker.habits, &tracker.logs);
    if human_flag {
        println!("{}", human::format_achievements(&badges));
    } else {
        let out = output::success("insights.achievements", json!({ "achievements": badges }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
