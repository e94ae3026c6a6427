use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use zenith::models::{Category, Mood};

#[derive(Parser)]
#[command(name = "zenith", version, about = "Personal habit and wellness tracking CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Override today's date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory and seed habits
    Init {
        /// Your display name
        #[arg(long)]
        name: Option<String>,
    },

    /// Manage habits
    Habit {
        #[command(subcommand)]
        action: HabitAction,
    },

    /// Record today's wellness check-in
    Log {
        #[command(subcommand)]
        action: LogAction,
    },

    /// Today's progress at a glance
    Status,

    /// Trends, balance and achievements
    Insights {
        #[command(subcommand)]
        action: InsightsAction,
    },

    /// Export all data as a JSON backup
    Export {
        /// Output path (default: zenith-backup-<date>.json)
        #[arg(long, short)]
        output: Option<String>,
    },

    /// Restore from a JSON backup (replaces all current data)
    Import {
        /// Backup file path
        file: String,
    },

    /// Delete all data and restore the built-in seed habits
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate for
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum HabitAction {
    /// Add a new habit
    Add {
        /// Display name
        name: String,

        /// Category: mental, physical, study or self-care
        #[arg(long, short)]
        category: Category,

        /// Display glyph
        #[arg(long)]
        icon: Option<String>,

        /// Free-text goal, e.g. "10 pages" (no goal means done/not-done)
        #[arg(long, short)]
        goal: Option<String>,

        /// Reminder time, e.g. "08:00" (stored, not scheduled)
        #[arg(long)]
        reminder: Option<String>,
    },

    /// Edit a habit's display fields
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, short)]
        category: Option<Category>,
        #[arg(long)]
        icon: Option<String>,
        #[arg(long, short)]
        goal: Option<String>,
        #[arg(long)]
        reminder: Option<String>,
    },

    /// Remove a habit
    Rm { id: String },

    /// List habits with today's progress
    List,

    /// Mark a habit complete for today
    Done { id: String },

    /// Unmark a habit for today
    Undo { id: String },

    /// Record partial numeric progress for today
    Progress { id: String, value: u32 },
}

#[derive(Subcommand)]
pub enum LogAction {
    /// Record today's mood
    Mood { mood: Mood },

    /// Record today's stress level (clamped to 0-10)
    Stress { level: i64 },

    /// Record today's water intake in cups
    Water { cups: u32 },

    /// Record last night's sleep in hours
    Sleep { hours: u32 },

    /// Record today's exercise in minutes
    Exercise { minutes: u32 },

    /// Write today's journal entry
    Journal { text: String },

    /// Show today's check-in
    Show,
}

#[derive(Subcommand)]
pub enum InsightsAction {
    /// Rolling 7-day completion balance per category
    Balance,

    /// Last 7 days of stress, water, sleep and completions
    Trend,

    /// Average water and sleep across all logged days
    Averages,

    /// Achievement badges
    Achievements,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value (name, theme)
    Set { key: String, value: String },
}
