use anyhow::Result;
use serde_json::json;

use zenith::core::tracker::Tracker;
use zenith::db::Store;
use zenith::models::config::Config;
use zenith::output;

pub fn run(yes: bool, human_flag: bool) -> Result<()> {
    if !yes {
        anyhow::bail!("reset deletes all habits and logs; re-run with --yes to confirm");
    }

    let store = Store::open(&Config::db_path())?;
    let mut tracker = Tracker::load(&store)?;
    store.clear()?;
    tracker.reset();
    tracker.commit(&store)?;

    if human_flag {
        println!("All data cleared. {} seed habits restored.", tracker.habits.len());
    } else {
        let out = output::success("reset", json!({ "habits": tracker.habits.len() }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
