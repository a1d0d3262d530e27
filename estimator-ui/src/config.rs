//! Optional TOML configuration.
//!
//! ```toml
//! [geonames]
//! base_url = "http://api.geonames.org"
//! username = "demo"
//! country = "US"
//! timeout_secs = 10   # 0 disables the timeout
//!
//! [weather]
//! cold_bound_f = 34
//! heat_bound_f = 83
//! wind_bound_mph = 15
//!
//! [tax]
//! schedules = "schedules.csv"
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use weather_core::{GeoNamesConfig, PresenterBounds};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxConfig {
    /// CSV file overriding some or all bracket schedules.
    pub schedules: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub geonames: GeoNamesConfig,
    pub weather: PresenterBounds,
    pub tax: TaxConfig,
}

impl AppConfig {
    /// Loads `path`, or returns defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_toml_str(&data)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }
}
