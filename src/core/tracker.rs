//! The entity model: the single writable source of truth for the habit list
//! and log history. All mutations go through here; every committed mutation
//! is followed by a full re-serialization of both collections.

use anyhow::Result;
use chrono::NaiveDate;

use crate::core::{progress, reconcile};
use crate::db::Store;
use crate::models::habit::seed_habits;
use crate::models::{Category, DailyLog, Habit, LogPatch};

pub struct Tracker {
    pub habits: Vec<Habit>,
    pub logs: Vec<DailyLog>,
}

/// Replacement values for a habit's mutable display/config fields. `None`
/// leaves the field as it was; id, completion history and streak are never
/// editable.
#[derive(Debug, Default)]
pub struct HabitEdit {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub icon: Option<String>,
    pub goal: Option<String>,
    pub reminder_time: Option<String>,
}

impl Tracker {
    /// Hydrate from the store. A store with no persisted habit list gets the
    /// built-in seed set (first run).
    pub fn load(store: &Store) -> Result<Self> {
        let habits = match store.load_habits()? {
            Some(habits) => habits,
            None => seed_habits(),
        };
        let logs = store.load_logs()?;
        Ok(Self { habits, logs })
    }

    /// Persist both collections. Best effort: there is no transaction
    /// spanning the two blobs.
    pub fn commit(&self, store: &Store) -> Result<()> {
        store.save_habits(&self.habits)?;
        store.save_logs(&self.logs)?;
        Ok(())
    }

    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    fn habit_mut(&mut self, id: &str) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|h| h.id == id)
    }

    /// Create a habit with a fresh id. Rejects names that are empty after
    /// trimming.
    pub fn create_habit(
        &mut self,
        name: &str,
        category: Category,
        icon: Option<String>,
        goal: Option<String>,
        reminder_time: Option<String>,
    ) -> Result<&Habit> {
        let name = name.trim();
        if name.is_empty() {
            anyhow::bail!("habit name must not be empty");
        }
        let habit = Habit::new(name.to_string(), category, icon, goal, reminder_time);
        self.habits.push(habit);
        Ok(self.habits.last().expect("habit just pushed"))
    }

    /// Replace a habit's mutable fields in place. An unknown id is a benign
    /// miss: returns `None`, no state changes.
    pub fn edit_habit(&mut self, id: &str, edit: HabitEdit) -> Option<&Habit> {
        let habit = self.habit_mut(id)?;
        if let Some(name) = edit.name {
            habit.name = name;
        }
        if let Some(category) = edit.category {
            habit.category = category;
        }
        if let Some(icon) = edit.icon {
            habit.icon = Some(icon);
        }
        if let Some(goal) = edit.goal {
            habit.goal = Some(goal);
        }
        if let Some(reminder) = edit.reminder_time {
            habit.reminder_time = Some(reminder);
        }
        self.habit(id)
    }

    /// Remove a habit. Historical `habit_progress` entries referencing it are
    /// left in place as tolerated orphans. Returns false for an unknown id.
    pub fn delete_habit(&mut self, id: &str) -> bool {
        let before = self.habits.len();
        self.habits.retain(|h| h.id != id);
        self.habits.len() != before
    }

    /// Today's log: the stored row for `today`, or the synthesized default.
    pub fn today_log(&self, today: NaiveDate) -> DailyLog {
        reconcile::today_log(&self.logs, today)
    }

    /// Merge a partial update into today's log (inserting the row on first
    /// write).
    pub fn update_log(&mut self, today: NaiveDate, patch: &LogPatch) {
        reconcile::apply_update(&mut self.logs, today, patch);
    }

    /// Toggle a habit's completion for `today`, keeping the completion set
    /// and today's progress map consistent. Unknown id is a benign miss.
    pub fn toggle_completion(&mut self, id: &str, today: NaiveDate, completed: bool) -> bool {
        let today_log = self.today_log(today);
        let Some(habit) = self.habit_mut(id) else {
            return false;
        };
        let patch = progress::toggle_completion(habit, &today_log, today, completed);
        self.update_log(today, &patch);
        true
    }

    /// Record numeric progress for `today`, clamped to the habit's target.
    /// Returns the clamped value, or `None` for an unknown id.
    pub fn set_progress(&mut self, id: &str, today: NaiveDate, raw_value: u32) -> Option<u32> {
        let today_log = self.today_log(today);
        let habit = self.habit_mut(id)?;
        let (value, patch) = progress::set_progress(habit, &today_log, today, raw_value);
        self.update_log(today, &patch);
        Some(value)
    }

    /// Wholesale replace of both collections (bulk import). No merge.
    pub fn import(&mut self, habits: Vec<Habit>, logs: Vec<DailyLog>) {
        self.habits = habits;
        self.logs = logs;
    }

    /// Revert to the built-in seed habits and an empty log history.
    pub fn reset(&mut self) {
        self.habits = seed_habits();
        self.logs.clear();
    }
}
