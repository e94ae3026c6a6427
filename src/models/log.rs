use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Normal,
    Sad,
    Stressed,
    Energetic,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Self::Happy,
        Self::Normal,
        Self::Sad,
        Self::Stressed,
        Self::Energetic,
    ];

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Normal => "😐",
            Self::Sad => "😔",
            Self::Stressed => "😫",
            Self::Energetic => "⚡",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Happy => write!(f, "Happy"),
            Self::Normal => write!(f, "Normal"),
            Self::Sad => write!(f, "Sad"),
            Self::Stressed => write!(f, "Stressed"),
            Self::Energetic => write!(f, "Energetic"),
        }
    }
}

impl FromStr for Mood {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(Self::Happy),
            "normal" => Ok(Self::Normal),
            "sad" => Ok(Self::Sad),
            "stressed" => Ok(Self::Stressed),
            "energetic" => Ok(Self::Energetic),
            _ => anyhow::bail!(
                "invalid mood: {} (expected happy/normal/sad/stressed/energetic)",
                s
            ),
        }
    }
}

/// The per-date record of wellness metrics and per-habit numeric progress.
/// At most one log exists per calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    pub date: NaiveDate,
    #[serde(default)]
    pub mood: Option<Mood>,
    pub stress_level: u8,
    #[serde(default)]
    pub journal: String,
    #[serde(default)]
    pub water_intake: u32,
    #[serde(default)]
    pub sleep_hours: u32,
    #[serde(default)]
    pub exercise_minutes: u32,
    /// Habit id -> numeric progress recorded for this date. Keys need not
    /// cover all habits, and may reference habits deleted since.
    #[serde(default)]
    pub habit_progress: BTreeMap<String, u32>,
}

impl DailyLog {
    /// The default row synthesized for a date with no stored log.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            mood: None,
            stress_level: 5,
            journal: String::new(),
            water_intake: 0,
            sleep_hours: 0,
            exercise_minutes: 0,
            habit_progress: BTreeMap::new(),
        }
    }
}

/// A partial update to a [`DailyLog`]: only the named fields change, the rest
/// stay untouched. `habit_progress` replaces the whole map (last write wins).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogPatch {
    #[serde(default)]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub stress_level: Option<u8>,
    #[serde(default)]
    pub journal: Option<String>,
    #[serde(default)]
    pub water_intake: Option<u32>,
    #[serde(default)]
    pub sleep_hours: Option<u32>,
    #[serde(default)]
    pub exercise_minutes: Option<u32>,
    #[serde(default)]
    pub habit_progress: Option<BTreeMap<String, u32>>,
}

impl LogPatch {
    pub fn apply(&self, log: &mut DailyLog) {
        if let Some(mood) = self.mood {
            log.mood = Some(mood);
        }
        if let Some(stress) = self.stress_level {
            log.stress_level = stress;
        }
        if let Some(ref journal) = self.journal {
            log.journal = journal.clone();
        }
        if let Some(water) = self.water_intake {
            log.water_intake = water;
        }
        if let Some(sleep) = self.sleep_hours {
            log.sleep_hours = sleep;
        }
        if let Some(exercise) = self.exercise_minutes {
            log.exercise_minutes = exercise;
        }
        if let Some(ref progress) = self.habit_progress {
            log.habit_progress = progress.clone();
        }
    }
}
