/// User settings and directory resolution
///
/// Settings live in `settings.json` inside the platform config directory:
/// - Linux: ~/.config/gym-progress-tracker/settings.json
/// - macOS: ~/Library/Application Support/gym-progress-tracker/settings.json
/// - Windows: %APPDATA%\gym-progress-tracker\settings.json
///
/// A missing file means defaults. A malformed file is logged and also
/// falls back to defaults so the app always starts.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::state::navigator::DEFAULT_SWIPE_THRESHOLD;

/// Directory name used under the platform data, cache and config roots
pub const APP_NAME: &str = "gym-progress-tracker";

/// Name of the progress photo directory inside the app data directory
pub const PROGRESS_DIR_NAME: &str = "gym-progress";

/// Environment variable overriding the progress directory
pub const ENV_PROGRESS_DIR: &str = "GYM_PROGRESS_DIR";

const CONFIG_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where progress photos are stored; platform default when unset
    pub progress_dir: Option<PathBuf>,
    /// Horizontal drag distance that pages the calendar
    pub swipe_threshold: f32,
    pub dark_theme: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            progress_dir: None,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            dark_theme: true,
        }
    }
}

impl Config {
    /// Resolve the progress directory.
    ///
    /// Order: `GYM_PROGRESS_DIR`, then `progress_dir` from the settings,
    /// then `<data_dir>/gym-progress-tracker/gym-progress`.
    pub fn resolve_progress_dir(&self) -> PathBuf {
        let env_override = std::env::var(ENV_PROGRESS_DIR)
            .ok()
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        self.resolve_progress_dir_with(env_override)
    }

    fn resolve_progress_dir_with(&self, env_override: Option<PathBuf>) -> PathBuf {
        if let Some(path) = env_override {
            return path;
        }

        if let Some(path) = &self.progress_dir {
            return path.clone();
        }

        let mut path = app_dir(dirs::data_dir());
        path.push(PROGRESS_DIR_NAME);
        path
    }
}

/// Directory where picked photos are staged before upload
pub fn staging_dir() -> PathBuf {
    let mut path = app_dir(dirs::cache_dir());
    path.push("picked");
    path
}

/// `<root>/gym-progress-tracker`, falling back to the home directory and
/// then the working directory when the platform root is unknown
fn app_dir(root: Option<PathBuf>) -> PathBuf {
    let mut path = root
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_NAME);
    path
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Load settings from the default location
pub fn load() -> Config {
    let Some(path) = default_config_path() else {
        return Config::default();
    };

    // Write the defaults on first launch so there is a file to edit
    if !path.exists() {
        let config = Config::default();
        if let Err(err) = save_to_path(&config, &path) {
            tracing::warn!("⚠️  Could not write default settings: {}", err);
        }
        return config;
    }

    match load_from_path(&path) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("⚠️  Ignoring settings at {}: {}", path.display(), err);
            Config::default()
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
