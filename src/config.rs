/// Configuration module for Pomodoro settings
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::timer::duration_from_minutes;

/// Interval lengths and cycle count for a run. These are compiled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub work_duration: Duration,
    pub short_break: Duration,
    pub long_break: Duration,
    pub cycles: usize,
}

impl Config {
    pub fn new() -> Self {
        Self {
            work_duration: duration_from_minutes(25),
            short_break: duration_from_minutes(5),
            long_break: duration_from_minutes(15),
            cycles: 4,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Presentation settings read from the optional JSON settings file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    pub notifications: NotificationSettings,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NotificationSettings {
    pub enabled: bool,
    pub app_id: String,
    /// Relative paths are joined onto the working directory at notification time.
    pub icon: PathBuf,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            app_id: "Pomodoro Clock".to_string(),
            icon: Path::new("assets").join("clock.png"),
        }
    }
}

impl Settings {
    /// Load settings from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    /// A missing file yields defaults silently. An unreadable or malformed
    /// file is reported and also yields defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not read settings file, using defaults");
                return Self::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "invalid settings format, using defaults");
            Self::default()
        })
    }
}

pub fn settings_path() -> PathBuf {
    if let Some(home) = env::var_os("HOME") {
        PathBuf::from(home)
            .join(".config")
            .join("pomodoro-clock")
            .join("config.json")
    } else {
        PathBuf::from("pomodoro-clock.json")
    }
}
