//! Environment-sourced configuration.
//!
//! # Environment Variables
//!
//! - `POLYGON_API_KEY`: Polygon API key. Unset or empty disables live pricing.
//! - `POLYGON_PLAN`: `paid` (minute data), `realtime`, anything else end-of-day.
//! - `POLYGON_BASE_URL`: REST endpoint (default: `https://api.polygon.io`)
//! - `POLYGON_TIMEOUT_SECS`: HTTP timeout in seconds (default: 30)

use std::time::Duration;

use thiserror::Error;

use crate::domain::market::PlanTier;
use crate::infrastructure::polygon::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, PolygonConfig};

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set to an unusable value.
    #[error("Invalid value for {var}: '{value}'")]
    InvalidValue {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Application configuration.
#[derive(Clone)]
pub struct AppConfig {
    /// Polygon API key, if configured.
    pub polygon_api_key: Option<String>,
    /// Polygon plan tier.
    pub plan: PlanTier,
    /// Polygon REST base URL.
    pub polygon_base_url: String,
    /// Polygon HTTP timeout.
    pub polygon_timeout: Duration,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("polygon_api_key", &self.polygon_api_key.as_ref().map(|_| "<redacted>"))
            .field("plan", &self.plan)
            .field("polygon_base_url", &self.polygon_base_url)
            .field("polygon_timeout", &self.polygon_timeout)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            polygon_api_key: None,
            plan: PlanTier::default(),
            polygon_base_url: DEFAULT_BASE_URL.to_string(),
            polygon_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AppConfig {
    /// Load `.env` (current directory or an ancestor), then read the process
    /// environment. Variables already set win over `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let polygon_api_key = lookup("POLYGON_API_KEY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let plan = PlanTier::from_plan(lookup("POLYGON_PLAN").as_deref());

        let polygon_base_url = lookup("POLYGON_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let polygon_timeout = match lookup("POLYGON_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::InvalidValue {
                    var: "POLYGON_TIMEOUT_SECS",
                    value: raw,
                })?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            polygon_api_key,
            plan,
            polygon_base_url,
            polygon_timeout,
        })
    }

    /// Polygon adapter configuration, if a key is configured.
    #[must_use]
    pub fn polygon(&self) -> Option<PolygonConfig> {
        self.polygon_api_key.as_ref().map(|key| {
            PolygonConfig::new(key.clone())
                .with_base_url(self.polygon_base_url.clone())
                .with_timeout(self.polygon_timeout)
        })
    }
}

/// Load `.env` from the current directory or the nearest ancestor that has one.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}
