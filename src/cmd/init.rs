use anyhow::Result;
use serde_json::json;

use zenith::core::tracker::Tracker;
use zenith::db::Store;
use zenith::models::config::Config;
use zenith::output;

pub fn run(name: Option<String>, human: bool) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(name) = name {
        config.profile.name = Some(name);
    }
    config.save()?;

    // First open seeds the habit list.
    let store = Store::open(&Config::db_path())?;
    let tracker = Tracker::load(&store)?;
    tracker.commit(&store)?;

    if human {
        println!("Config initialized at {}", Config::path().display());
        println!("{} habits ready to track.", tracker.habits.len());
    } else {
        let out = output::success(
            "init",
            json!({
                "data_dir": Config::data_dir(),
                "habits": tracker.habits.len(),
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
