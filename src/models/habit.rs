use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use uuid::Uuid;

pub const DEFAULT_ICON: &str = "🎯";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    #[serde(rename = "Mental Health")]
    MentalHealth,
    #[serde(rename = "Physical Health")]
    PhysicalHealth,
    Study,
    #[serde(rename = "Self-Care")]
    SelfCare,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Self::MentalHealth,
        Self::PhysicalHealth,
        Self::Study,
        Self::SelfCare,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MentalHealth => write!(f, "Mental Health"),
            Self::PhysicalHealth => write!(f, "Physical Health"),
            Self::Study => write!(f, "Study"),
            Self::SelfCare => write!(f, "Self-Care"),
        }
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "mental" | "mental-health" | "mental health" => Ok(Self::MentalHealth),
            "physical" | "physical-health" | "physical health" => Ok(Self::PhysicalHealth),
            "study" => Ok(Self::Study),
            "self-care" | "selfcare" | "self care" => Ok(Self::SelfCare),
            _ => anyhow::bail!(
                "invalid category: {} (expected mental/physical/study/self-care)",
                s
            ),
        }
    }
}

/// A recurring user-defined activity tracked per calendar day.
///
/// Serialized field names match the backup format of the original web app,
/// so exported files round-trip between the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,
    /// Dates on which the habit reached its full target.
    #[serde(default)]
    pub completed_dates: BTreeSet<NaiveDate>,
    /// Carried in the schema for backup compatibility; the live streak is
    /// derived from `completed_dates` on read (see `core::stats::streak`).
    #[serde(default)]
    pub streak: u32,
}

impl Habit {
    pub fn new(
        name: String,
        category: Category,
        icon: Option<String>,
        goal: Option<String>,
        reminder_time: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            category,
            icon,
            goal,
            reminder_time,
            completed_dates: BTreeSet::new(),
            streak: 0,
        }
    }

    pub fn icon(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_ICON)
    }
}

/// Built-in starter habits, used on first run and by `reset`.
pub fn seed_habits() -> Vec<Habit> {
    let seed = |id: &str, name: &str, category: Category, icon: &str| Habit {
        id: id.to_string(),
        name: name.to_string(),
        category,
        icon: Some(icon.to_string()),
        goal: None,
        reminder_time: None,
        completed_dates: BTreeSet::new(),
        streak: 0,
    };
    vec![
        seed("1", "Meditate for 10 mins", Category::MentalHealth, "🧘"),
        seed("2", "Read 10 pages", Category::Study, "📖"),
        seed("3", "Morning walk", Category::PhysicalHealth, "🚶"),
    ]
}
