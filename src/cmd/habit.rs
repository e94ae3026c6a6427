use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use zenith::core::progress::parse_target;
use zenith::core::stats::streak;
use zenith::core::tracker::{HabitEdit, Tracker};
use zenith::db::Store;
use zenith::models::config::Config;
use zenith::models::{Category, Habit};
use zenith::output;
use zenith::output::human;

use super::{report_not_found, resolve_today};

fn habit_json(habit: &Habit, today: NaiveDate) -> serde_json::Value {
    json!({
        "id": habit.id,
        "name": habit.name,
        "category": habit.category.to_string(),
        "icon": habit.icon(),
        "goal": habit.goal,
        "reminder_time": habit.reminder_time,
        "target": parse_target(habit.goal.as_deref()),
        "completed_today": habit.completed_dates.contains(&today),
        "total_completions": habit.completed_dates.len(),
        "streak": streak(habit, today),
    })
}

pub fn run_add(
    name: &str,
    category: Category,
    icon: Option<String>,
    goal: Option<String>,
    reminder: Option<String>,
    date: Option<NaiveDate>,
    human_flag: bool,
) -> Result<()> {
    let today = resolve_today(date);
    let store = Store::open(&Config::db_path())?;
    let mut tracker = Tracker::load(&store)?;

    let habit = tracker
        .create_habit(name, category, icon, goal, reminder)?
        .clone();
    tracker.commit(&store)?;

    if human_flag {
        println!("Added: {} {} ({})", habit.icon(), habit.name, habit.category);
    } else {
        let out = output::success("habit.add", json!({ "habit": habit_json(&habit, today) }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn run_edit(
    id: &str,
    name: Option<String>,
    category: Option<Category>,
    icon: Option<String>,
    goal: Option<String>,
    reminder: Option<String>,
    date: Option<NaiveDate>,
    human_flag: bool,
) -> Result<()> {
    let today = resolve_today(date);
    let store = Store::open(&Config::db_path())?;
    let mut tracker = Tracker::load(&store)?;

    let edit = HabitEdit {
        name,
        category,
        icon,
        goal,
        reminder_time: reminder,
    };
    let Some(habit) = tracker.edit_habit(id, edit).cloned() else {
        report_not_found("habit.edit", id, human_flag);
        return Ok(());
    };
    tracker.commit(&store)?;

    if human_flag {
        println!("Updated: {} {}", habit.icon(), habit.name);
    } else {
        let out = output::success("habit.edit", json!({ "habit": habit_json(&habit, today) }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_rm(id: &str, human_flag: bool) -> Result<()> {
    let store = Store::open(&Config::db_path())?;
    let mut tracker = Tracker::load(&store)?;

    if !tracker.delete_habit(id) {
        report_not_found("habit.rm", id, human_flag);
        return Ok(());
    }
    tracker.commit(&store)?;

    if human_flag {
        println!("Removed habit {}", id);
    } else {
        let out = output::success("habit.rm", json!({ "removed": id }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_list(date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let today = resolve_today(date);
    let store = Store::open(&Config::db_path())?;
    let tracker = Tracker::load(&store)?;
    let today_log = tracker.today_log(today);

    if human_flag {
        println!(
            "{}",
            human::format_habit_list(&tracker.habits, &today_log, today)
        );
    } else {
        let habits: Vec<_> = tracker
            .habits
            .iter()
            .map(|h| habit_json(h, today))
            .collect();
        let out = output::success("habit.list", json!({ "habits": habits }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_toggle(
    id: &str,
    completed: bool,
    date: Option<NaiveDate>,
    human_flag: bool,
) -> Result<()> {
    let today = resolve_today(date);
    let store = Store::open(&Config::db_path())?;
    let mut tracker = Tracker::load(&store)?;

    let command = if completed { "habit.done" } else { "habit.undo" };
    if !tracker.toggle_completion(id, today, completed) {
        report_not_found(command, id, human_flag);
        return Ok(());
    }
    tracker.commit(&store)?;

    let habit = tracker.habit(id).expect("habit just toggled").clone();
    if human_flag {
        if completed {
            println!("✓ {} complete for {}", habit.name, today);
        } else {
            println!("{} no longer complete for {}", habit.name, today);
        }
    } else {
        let out = output::success(command, json!({ "habit": habit_json(&habit, today) }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_progress(
    id: &str,
    value: u32,
    date: Option<NaiveDate>,
    human_flag: bool,
) -> Result<()> {
    let today = resolve_today(date);
    let store = Store::open(&Config::db_path())?;
    let mut tracker = Tracker::load(&store)?;

    let Some(recorded) = tracker.set_progress(id, today, value) else {
        report_not_found("habit.progress", id, human_flag);
        return Ok(());
    };
    tracker.commit(&store)?;

    let habit = tracker.habit(id).expect("habit just updated").clone();
    let target = parse_target(habit.goal.as_deref());
    if human_flag {
        if recorded == target {
            println!("✓ {} complete ({}/{})", habit.name, recorded, target);
        } else {
            println!("{}: {}/{}", habit.name, recorded, target);
        }
    } else {
        let out = output::success(
            "habit.progress",
            json!({
                "habit": habit_json(&habit, today),
                "recorded": recorded,
                "target": target,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
