//! Runtime configuration for map and chat collaborators.
//!
//! # Responsibility
//! - Hold the map provider credential and viewport defaults.
//! - Hold the assistant reply delay.
//! - Apply environment overrides and validate ranges.
//!
//! # Invariants
//! - A blank credential is treated as absent.
//! - `validate()` runs on every constructor that reads external input.

use crate::model::location::LatLng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Map provider credential.
pub const ENV_MAPS_API_KEY: &str = "FRA_ATLAS_MAPS_API_KEY";
/// Assistant reply delay override in milliseconds.
pub const ENV_CHAT_REPLY_DELAY_MS: &str = "FRA_ATLAS_CHAT_REPLY_DELAY_MS";

const DEFAULT_CENTER: LatLng = LatLng {
    lat: 20.5937,
    lng: 78.9629,
};
const DEFAULT_ZOOM: u8 = 5;
const MAX_ZOOM: u8 = 21;
const DEFAULT_REPLY_DELAY_MS: u64 = 1_000;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    /// Environment override that cannot be parsed.
    InvalidEnv { key: &'static str, value: String },
    InvalidZoom(u8),
    InvalidCenter(LatLng),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config `{}`: {source}", path.display())
            }
            Self::InvalidEnv { key, value } => write!(f, "invalid value for {key}: `{value}`"),
            Self::InvalidZoom(zoom) => write!(f, "map zoom {zoom} outside 1..={MAX_ZOOM}"),
            Self::InvalidCenter(center) => write!(
                f,
                "map center ({}, {}) is not a valid coordinate",
                center.lat, center.lng
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub api_key: Option<String>,
    pub center: LatLng,
    pub zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl MapConfig {
    /// Returns the credential when present and non-blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub reply_delay_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    pub map: MapConfig,
    pub chat: ChatConfig,
}

impl AtlasConfig {
    /// Defaults with process environment overrides applied.
    pub fn from_env() -> ConfigResult<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Reads a JSON config file; absent fields fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Applies overrides from `lookup` (normally the process environment).
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigResult<Self> {
        if let Some(key) = lookup(ENV_MAPS_API_KEY) {
            let trimmed = key.trim();
            if !trimmed.is_empty() {
                self.map.api_key = Some(trimmed.to_string());
            }
        }
        if let Some(raw) = lookup(ENV_CHAT_REPLY_DELAY_MS) {
            let delay = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidEnv {
                key: ENV_CHAT_REPLY_DELAY_MS,
                value: raw.clone(),
            })?;
            self.chat.reply_delay_ms = delay;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.map.zoom == 0 || self.map.zoom > MAX_ZOOM {
            return Err(ConfigError::InvalidZoom(self.map.zoom));
        }
        let center = self.map.center;
        let lat_ok = (-90.0..=90.0).contains(&center.lat);
        let lng_ok = (-180.0..=180.0).contains(&center.lng);
        if !lat_ok || !lng_ok {
            return Err(ConfigError::InvalidCenter(center));
        }
        Ok(())
    }
}
