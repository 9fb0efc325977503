//! TOML configuration: embedded defaults merged with a user override under
//! the platform config directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    defaults: DefaultsConfig,
}

#[derive(Deserialize, Default)]
struct DefaultsConfig {
    generate_delay_ms: Option<u64>,
}

pub struct Config {
    defaults: DefaultsConfig,
}

impl Config {
    /// Load the embedded defaults, merged with the user config if present.
    pub fn load() -> Self {
        Self::load_from(user_config_path().as_deref())
    }

    /// Load with an explicit override path (None = embedded defaults only).
    pub fn load_from(user_path: Option<&Path>) -> Self {
        let mut base: ConfigFile =
            toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml");

        if let Some(path) = user_path {
            if path.exists() {
                match std::fs::read_to_string(path) {
                    Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                        Ok(user) => merge_defaults(&mut base.defaults, user.defaults),
                        Err(e) => {
                            log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                        }
                    },
                    Err(e) => {
                        log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
                    }
                }
            }
        }

        Config {
            defaults: base.defaults,
        }
    }

    /// Artificial generation delay (clamped to 0..=60s, default 2.5s).
    pub fn generate_delay(&self) -> Duration {
        let ms = self.defaults.generate_delay_ms.unwrap_or(2500).min(60_000);
        Duration::from_millis(ms)
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mashcore").join("config.toml"))
}

fn merge_defaults(base: &mut DefaultsConfig, user: DefaultsConfig) {
    if user.generate_delay_ms.is_some() {
        base.generate_delay_ms = user.generate_delay_ms;
    }
}
