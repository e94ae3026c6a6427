pub mod config;
pub mod habit;
pub mod log;

pub use habit::{Category, Habit};
pub use log::{DailyLog, LogPatch, Mood};
