use anyhow::Result;

use crate::models::{DailyLog, Habit};

use super::{HABITS_KEY, LOGS_KEY, Store};

impl Store {
    /// Load the habit list, or `None` if nothing has been persisted yet.
    pub fn load_habits(&self) -> Result<Option<Vec<Habit>>> {
        match self.get(HABITS_KEY)? {
            Some(blob) => Ok(Some(serde_json::from_str(&blob)?)),
            None => Ok(None),
        }
    }

    pub fn save_habits(&self, habits: &[Habit]) -> Result<()> {
        self.set(HABITS_KEY, &serde_json::to_string(habits)?)
    }

    /// Load the log history, or an empty history if none was persisted.
    pub fn load_logs(&self) -> Result<Vec<DailyLog>> {
        match self.get(LOGS_KEY)? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn save_logs(&self, logs: &[DailyLog]) -> Result<()> {
        self.set(LOGS_KEY, &serde_json::to_string(logs)?)
    }
}
