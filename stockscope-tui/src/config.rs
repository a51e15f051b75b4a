//! Startup configuration from an optional TOML file.
//!
//! Lookup order: `./stockscope.toml`, then `<config dir>/stockscope/config.toml`,
//! else built-in defaults. A file that exists but cannot be read, parsed or
//! validated is an error rather than a silent fallback.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::dashboard::ViewSettings;
use crate::view::ViewState;

pub const LOCAL_CONFIG: &str = "stockscope.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub data_path: PathBuf,
    pub instrument: String,
    pub moving_average_window: usize,
    pub acf_lags: usize,
    pub preview_tail: usize,
    pub views: Vec<ViewState>,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let settings = ViewSettings::default();
        Self {
            data_path: PathBuf::from("all_stocks_5yr.csv"),
            instrument: "IBM".to_string(),
            moving_average_window: settings.moving_average_window,
            acf_lags: settings.acf_lags,
            preview_tail: settings.preview_tail,
            views: ViewState::ALL.to_vec(),
            log_path: None,
        }
    }
}

impl Config {
    /// Load from the first config file that exists, else defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let user = dirs::config_dir().map(|dir| dir.join("stockscope").join("config.toml"));
        let candidates = std::iter::once(PathBuf::from(LOCAL_CONFIG)).chain(user);
        Self::load_first(candidates)
    }

    pub fn load_first(
        candidates: impl IntoIterator<Item = PathBuf>,
    ) -> Result<Self, ConfigError> {
        match candidates.into_iter().find(|path| path.is_file()) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.moving_average_window == 0 {
            return Err(ConfigError::Invalid(
                "moving_average_window must be at least 1".into(),
            ));
        }
        if self.acf_lags == 0 {
            return Err(ConfigError::Invalid("acf_lags must be at least 1".into()));
        }
        if self.preview_tail < 2 {
            return Err(ConfigError::Invalid("preview_tail must be at least 2".into()));
        }
        if self.instrument.trim().is_empty() {
            return Err(ConfigError::Invalid("instrument must not be empty".into()));
        }
        if self.views.is_empty() || self.views.len() > ViewState::ALL.len() {
            return Err(ConfigError::Invalid(format!(
                "views must list between 1 and {} views",
                ViewState::ALL.len()
            )));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.views.iter().find(|v| !seen.insert(**v)) {
            return Err(ConfigError::Invalid(format!("view {dup} is listed twice")));
        }
        Ok(())
    }

    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            moving_average_window: self.moving_average_window,
            acf_lags: self.acf_lags,
            preview_tail: self.preview_tail,
        }
    }

    /// Configured log file, or `<cache dir>/stockscope/stockscope.log`.
    pub fn log_path(&self) -> PathBuf {
        self.log_path.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("stockscope")
                .join("stockscope.log")
        })
    }
}
