use anyhow::Result;

use zenith::models::config::Config;
use zenith::output;

pub fn run_show(human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    if human_flag {
        println!("name:  {}", config.profile.name.as_deref().unwrap_or("(not set)"));
        println!("theme: {}", config.display.theme);
    } else {
        let out = output::success("config.show", serde_json::to_value(&config)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_set(key: &str, value: &str, human_flag: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    if human_flag {
        println!("Set {} = {}", key, value);
    } else {
        let out = output::success(
            "config.set",
            serde_json::json!({ "key": key, "value": value }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
