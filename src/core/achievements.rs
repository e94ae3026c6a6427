//! Achievement badges: stateless threshold predicates over the full history,
//! recomputed on every read.

use serde::Serialize;

use crate::core::stats::total_completions;
use crate::models::{DailyLog, Habit};

#[derive(Debug, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub unlocked: bool,
}

/// Evaluate every badge against the committed history.
pub fn evaluate(habits: &[Habit], logs: &[DailyLog]) -> Vec<Achievement> {
    let total = total_completions(habits);
    let total_water: u32 = logs.iter().map(|l| l.water_intake).sum();
    let meditations = habits
        .iter()
        .find(|h| h.name.contains("Meditate"))
        .map(|h| h.completed_dates.len())
        .unwrap_or(0);

    vec![
        Achievement {
            id: "sprout",
            title: "Sprout",
            description: "Complete your first habit",
            icon: "🌱",
            unlocked: total >= 1,
        },
        Achievement {
            id: "flawless",
            title: "Flawless",
            description: "7 completions in total",
            icon: "💎",
            unlocked: total >= 7,
        },
        Achievement {
            id: "deep-sea",
            title: "Deep Sea",
            description: "More than 40 cups of water logged",
            icon: "🌊",
            unlocked: total_water > 40,
        },
        Achievement {
            id: "zen-master",
            title: "Zen Master",
            description: "5 meditation sessions",
            icon: "🧠",
            unlocked: meditations >= 5,
        },
    ]
}
