use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub display: Display,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Display {
    /// "light" or "dark". Stored preference only; rendering is up to the
    /// consumer.
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String {
    "light".to_string()
}

impl Default for Display {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "name" => self.profile.name = Some(value.to_string()),
            "theme" => match value {
                "light" | "dark" => self.display.theme = value.to_string(),
                _ => anyhow::bail!("invalid theme: {} (expected light/dark)", value),
            },
            _ => anyhow::bail!("unknown config key: {} (expected name/theme)", key),
        }
        Ok(())
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("ZENITH_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .expect("cannot resolve home directory")
            .join(".zenith")
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    pub fn db_path() -> PathBuf {
        Self::data_dir().join("data.db")
    }
}
