use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, AppResult, ConfigSourceError};

pub const DEFAULT_PORT: u16 = 8081;

/// Raw configuration before any defaulting or normalization.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub mode: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub feat: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: String::new(),
            port: DEFAULT_PORT,
            data: String::new(),
            feat: String::new(),
        }
    }
}

/// Values from the environment or command line; `None` leaves the lower
/// layer untouched.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SettingsOverrides {
    pub mode: Option<String>,
    pub port: Option<u16>,
    pub data: Option<String>,
    pub feat: Option<String>,
}

impl Settings {
    pub fn apply(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(data) = overrides.data {
            self.data = data;
        }
        if let Some(feat) = overrides.feat {
            self.feat = feat;
        }
        self
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

pub fn load(path: &Path) -> AppResult<Settings> {
    let parse_error = |source: ConfigSourceError| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    };

    let raw = fs::read_to_string(path).map_err(|err| parse_error(err.into()))?;
    let settings = serde_json::from_str(&raw).map_err(|err| parse_error(err.into()))?;
    Ok(settings)
}
