//! Derived statistics: pure, read-only functions over the committed habit
//! list and log history. Nothing here mutates state.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::models::{Category, DailyLog, Habit};

#[derive(Debug, Serialize)]
pub struct CompletionSummary {
    pub completed: usize,
    pub total: usize,
    /// `completed / total` in [0, 1]; 0 when there are no habits.
    pub ratio: f64,
}

/// How many habits are fully complete for `today`, over all habits.
pub fn completion_summary(habits: &[Habit], today: NaiveDate) -> CompletionSummary {
    let completed = habits
        .iter()
        .filter(|h| h.completed_dates.contains(&today))
        .count();
    let total = habits.len();
    let ratio = if total > 0 {
        completed as f64 / total as f64
    } else {
        0.0
    };
    CompletionSummary {
        completed,
        total,
        ratio,
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryBalance {
    pub category: Category,
    /// Completions over the trailing 7 days as a percentage of the possible
    /// `habits_in_category * 7`, in [0, 100]. A category with no habits
    /// yields 0.
    pub percent: f64,
}

/// Rolling 7-day completion balance per category (trailing window including
/// `today`).
pub fn category_balance(habits: &[Habit], today: NaiveDate) -> Vec<CategoryBalance> {
    let window_start = today - Duration::days(6);
    Category::ALL
        .iter()
        .map(|&category| {
            let in_category: Vec<&Habit> =
                habits.iter().filter(|h| h.category == category).collect();
            let possible = in_category.len() * 7;
            let actual: usize = in_category
                .iter()
                .map(|h| {
                    h.completed_dates
                        .iter()
                        .filter(|d| **d >= window_start && **d <= today)
                        .count()
                })
                .sum();
            let percent = if possible > 0 {
                actual as f64 / possible as f64 * 100.0
            } else {
                0.0
            };
            CategoryBalance { category, percent }
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub stress_level: u8,
    pub water_intake: u32,
    pub sleep_hours: u32,
    pub habits_completed: usize,
}

/// One point per trailing calendar day (oldest first, 7 days ending at
/// `today`). Days with no log contribute zeros.
pub fn trend_series(habits: &[Habit], logs: &[DailyLog], today: NaiveDate) -> Vec<TrendPoint> {
    (0..7)
        .map(|i| {
            let date = today - Duration::days(6 - i);
            let log = logs.iter().find(|l| l.date == date);
            let habits_completed = habits
                .iter()
                .filter(|h| h.completed_dates.contains(&date))
                .count();
            TrendPoint {
                date,
                stress_level: log.map(|l| l.stress_level).unwrap_or(0),
                water_intake: log.map(|l| l.water_intake).unwrap_or(0),
                sleep_hours: log.map(|l| l.sleep_hours).unwrap_or(0),
                habits_completed,
            }
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct Averages {
    pub water_intake: f64,
    pub sleep_hours: f64,
    pub logged_days: usize,
}

/// Mean water intake and sleep hours across all recorded logs; zeros when
/// the history is empty.
pub fn averages(logs: &[DailyLog]) -> Averages {
    if logs.is_empty() {
        return Averages {
            water_intake: 0.0,
            sleep_hours: 0.0,
            logged_days: 0,
        };
    }
    let n = logs.len() as f64;
    let water: u32 = logs.iter().map(|l| l.water_intake).sum();
    let sleep: u32 = logs.iter().map(|l| l.sleep_hours).sum();
    Averages {
        water_intake: water as f64 / n,
        sleep_hours: sleep as f64 / n,
        logged_days: logs.len(),
    }
}

/// Consecutive fully-completed days ending at `today` or `yesterday`. A habit
/// not completed yesterday or today has a streak of 0.
pub fn streak(habit: &Habit, today: NaiveDate) -> u32 {
    let mut day = if habit.completed_dates.contains(&today) {
        today
    } else if habit.completed_dates.contains(&(today - Duration::days(1))) {
        today - Duration::days(1)
    } else {
        return 0;
    };

    let mut streak = 0u32;
    while habit.completed_dates.contains(&day) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}

/// Completions summed across all habits and all dates.
pub fn total_completions(habits: &[Habit]) -> usize {
    habits.iter().map(|h| h.completed_dates.len()).sum()
}

/// Past-noon reminder that today's water intake is still zero. Informational
/// only.
pub fn hydration_nudge(today_log: &DailyLog, current_hour: u32) -> bool {
    current_hour >= 12 && today_log.water_intake == 0
}
