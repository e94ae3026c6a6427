use chrono::{Datelike, NaiveDate};
use colored::Colorize;
use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};

use crate::core::achievements::Achievement;
use crate::core::progress::parse_target;
use crate::core::stats::{Averages, CategoryBalance, CompletionSummary, TrendPoint, streak};
use crate::models::{DailyLog, Habit};

const QUOTES: [&str; 7] = [
    "Your direction is more important than your speed.",
    "Small daily improvements are the key to staggering long-term results.",
    "Be stubborn about your goals but flexible about your methods.",
    "Growth is often a quiet, slow process.",
    "Self-care is not a luxury, it's a necessity.",
    "You don't have to be perfect to be amazing.",
    "Success is the sum of small efforts repeated day in and day out.",
];

/// Quote of the day, rotating with the day of the year.
pub fn quote_of_the_day(date: NaiveDate) -> &'static str {
    QUOTES[date.ordinal0() as usize % QUOTES.len()]
}

/// Habit list as a table, with today's progress per habit.
pub fn format_habit_list(habits: &[Habit], today_log: &DailyLog, today: NaiveDate) -> String {
    if habits.is_empty() {
        return "No habits yet. Add one with `zenith habit add`.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(["ID", "Habit", "Category", "Goal", "Today", "Streak"]);
    for habit in habits {
        let target = parse_target(habit.goal.as_deref());
        let progress = today_log.habit_progress.get(&habit.id).copied().unwrap_or(0);
        let today_cell = if habit.completed_dates.contains(&today) {
            "✓ done".to_string()
        } else {
            format!("{}/{}", progress, target)
        };
        table.add_row([
            Cell::new(&habit.id),
            Cell::new(format!("{} {}", habit.icon(), habit.name)),
            Cell::new(habit.category),
            Cell::new(habit.goal.as_deref().unwrap_or("Daily")),
            Cell::new(today_cell),
            Cell::new(streak(habit, today)),
        ]);
    }
    table.to_string()
}

/// Today's wellness check-in.
pub fn format_log(log: &DailyLog) -> String {
    let mood = match log.mood {
        Some(m) => format!("{} {}", m.emoji(), m),
        None => "not recorded".to_string(),
    };
    let mut out = format!("=== Check-in — {} ===\n", log.date);
    out.push_str(&format!("Mood:     {}\n", mood));
    out.push_str(&format!("Stress:   {}/10\n", log.stress_level));
    out.push_str(&format!("Water:    {} cups\n", log.water_intake));
    out.push_str(&format!("Sleep:    {} hrs\n", log.sleep_hours));
    out.push_str(&format!("Exercise: {} min\n", log.exercise_minutes));
    if !log.journal.is_empty() {
        out.push_str(&format!("Journal:  {}\n", log.journal));
    }
    out
}

pub fn format_status(
    today: NaiveDate,
    summary: &CompletionSummary,
    best_streak: u32,
    nudge: bool,
    quote: &str,
) -> String {
    let mut out = format!("=== Zenith — {} ===\n\n", today);
    let percent = (summary.ratio * 100.0).round();
    let progress = format!(
        "{} of {} habits complete ({}%)",
        summary.completed, summary.total, percent
    );
    if summary.total > 0 && summary.completed == summary.total {
        out.push_str(&format!("{}\n", progress.green().bold()));
    } else {
        out.push_str(&format!("{}\n", progress));
    }
    out.push_str(&format!("Best streak: {} days\n", best_streak));
    if nudge {
        out.push_str(&format!(
            "{}\n",
            "💧 Past noon and no water logged yet.".blue()
        ));
    }
    out.push_str(&format!("\n\"{}\"\n", quote.italic()));
    out
}

pub fn format_balance(balance: &[CategoryBalance]) -> String {
    let mut out = String::from("=== 7-day balance ===\n");
    for b in balance {
        let bars = (b.percent / 10.0).round() as usize;
        out.push_str(&format!(
            "{:<16} {:>5.1}%  {}\n",
            b.category.to_string(),
            b.percent,
            "█".repeat(bars)
        ));
    }
    out
}

pub fn format_trend(series: &[TrendPoint]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(["Date", "Stress", "Water", "Sleep", "Habits done"]);
    for point in series {
        table.add_row([
            Cell::new(point.date),
            Cell::new(point.stress_level),
            Cell::new(point.water_intake),
            Cell::new(point.sleep_hours),
            Cell::new(point.habits_completed),
        ]);
    }
    table.to_string()
}

pub fn format_averages(avg: &Averages) -> String {
    format!(
        "Across {} logged days: {:.1} cups water, {:.1} hrs sleep on average\n",
        avg.logged_days, avg.water_intake, avg.sleep_hours
    )
}

pub fn format_achievements(achievements: &[Achievement]) -> String {
    let mut out = String::from("=== Achievements ===\n");
    for a in achievements {
        let line = format!("{} {} — {}", a.icon, a.title, a.description);
        if a.unlocked {
            out.push_str(&format!("{}\n", line.green()));
        } else {
            out.push_str(&format!("{} (locked)\n", line.dimmed()));
        }
    }
    out
}
