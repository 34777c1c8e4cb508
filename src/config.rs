use crate::model::reveal::RevealTiming;
use crate::model::ThemeMode;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme used at startup
    pub theme: ThemeMode,
    /// Event poll timeout, i.e. the UI tick
    pub tick_rate_ms: u64,
    pub char_interval_ms: u64,
    pub item_interval_ms: u64,
    pub particle_count: usize,
    pub show_particles: bool,
    pub show_cursor: bool,
    pub show_splash: bool,
    /// Optional YAML file overriding the built-in profile
    pub content_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            tick_rate_ms: 50,
            char_interval_ms: 50,
            item_interval_ms: 200,
            particle_count: 100,
            show_particles: true,
            show_cursor: true,
            show_splash: true,
            content_path: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".portfolio-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn log_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("portfolio.log"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        Self::parse(&contents)
    }

    pub fn load_or_default() -> Config {
        Self::load().unwrap_or_default()
    }

    fn parse(contents: &str) -> Option<Config> {
        serde_json::from_str(contents).ok()
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    pub fn reveal_timing(&self) -> RevealTiming {
        RevealTiming {
            char_interval: Duration::from_millis(self.char_interval_ms),
            item_interval: Duration::from_millis(self.item_interval_ms),
        }
    }
}
