use std::fs;
use std::path::Path;

use log::LevelFilter;
use serde::Deserialize;
use wc_logging::LogDestination;
use wordcount_core::{SeparatorSet, DEFAULT_SEPARATORS};
use wordcount_engine::{JobSettings, RenderOptions};

pub(crate) const CONFIG_FILENAME: &str = "wordcount.ron";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub separators: Vec<char>,
    pub escape_html: bool,
    pub log: LogDestination,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            separators: DEFAULT_SEPARATORS.to_vec(),
            escape_html: false,
            log: LogDestination::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Unknown level names fall back to `Info`.
    pub(crate) fn level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    pub(crate) fn job_settings(&self) -> JobSettings {
        JobSettings {
            separators: self.separators.iter().copied().collect::<SeparatorSet>(),
            render: RenderOptions {
                escape_html: self.escape_html,
            },
        }
    }
}

/// Reads the config file. A missing file means defaults; a broken one is
/// reported on stderr (no logger exists yet) and also yields defaults.
pub(crate) fn load_config(path: &Path) -> AppConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppConfig::default();
        }
        Err(err) => {
            eprintln!("Warning: Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Warning: Failed to parse config from {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}
