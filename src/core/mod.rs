pub mod achievements;
pub mod backup;
pub mod progress;
pub mod reconcile;
pub mod stats;
pub mod tracker;
