//! Habit progress tracking: interprets a habit's free-text goal, records
//! partial progress for the day, and keeps the per-habit completion set and
//! the day's progress map mutually consistent.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use regex::Regex;

use crate::models::{DailyLog, Habit, LogPatch};

/// The numeric target a habit's daily progress must reach to count as
/// completed: the first integer appearing in the goal text. Goals with no
/// digits ("Daily", "Every hour") and absent goals are binary habits with
/// target 1. A parsed 0 is coerced to 1, so a habit can never be
/// permanently complete.
pub fn parse_target(goal: Option<&str>) -> u32 {
    let Some(goal) = goal else {
        return 1;
    };
    let re = Regex::new(r"\d+").expect("valid literal regex");
    let target = re
        .find(goal)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(1);
    target.max(1)
}

/// Build the log patch carrying today's progress map with `habit_id` set to
/// `value`. Entries for other habits are preserved from the current log.
fn progress_patch(today_log: &DailyLog, habit_id: &str, value: u32) -> LogPatch {
    let mut progress: BTreeMap<String, u32> = today_log.habit_progress.clone();
    progress.insert(habit_id.to_string(), value);
    LogPatch {
        habit_progress: Some(progress),
        ..LogPatch::default()
    }
}

/// Mark a habit fully complete or not complete for `today`. Updates the
/// habit's completion set and returns the log patch to merge via
/// [`super::reconcile::apply_update`]. Idempotent.
pub fn toggle_completion(
    habit: &mut Habit,
    today_log: &DailyLog,
    today: NaiveDate,
    completed: bool,
) -> LogPatch {
    let target = parse_target(habit.goal.as_deref());
    let value = if completed {
        habit.completed_dates.insert(today);
        target
    } else {
        habit.completed_dates.remove(&today);
        0
    };
    progress_patch(today_log, &habit.id, value)
}

/// Record a numeric progress value for `today`, clamped to `[0, target]`.
/// Membership of `today` in the completion set follows from whether the
/// clamped value reaches the target; it is only mutated when the state
/// actually changes. Returns the clamped value and the log patch.
pub fn set_progress(
    habit: &mut Habit,
    today_log: &DailyLog,
    today: NaiveDate,
    raw_value: u32,
) -> (u32, LogPatch) {
    let target = parse_target(habit.goal.as_deref());
    let value = raw_value.min(target);
    let fully_completed = value == target;
    let already_done = habit.completed_dates.contains(&today);
    if fully_completed && !already_done {
        habit.completed_dates.insert(today);
    } else if !fully_completed && already_done {
        habit.completed_dates.remove(&today);
    }
    (value, progress_patch(today_log, &habit.id, value))
}
