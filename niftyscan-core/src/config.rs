//! Run configuration: source endpoint, request headers, analysis thresholds.
//!
//! Every field has a default, so an empty (or absent) TOML file reproduces
//! the stock NIFTY 50 run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_URL: &str = "https://www.nseindia.com/api/equity-stockIndices?index=NIFTY%2050";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/91.0.4472.124 Safari/537.36";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
pub const DEFAULT_REFERER: &str = "https://www.nseindia.com/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Complete configuration for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.url.trim().is_empty() {
            return Err(ConfigError::Invalid("source.url must not be empty".into()));
        }
        self.analysis.validate()
    }
}

/// Where the snapshot comes from and which headers the endpoint expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
    pub user_agent: String,
    pub accept_language: String,
    pub referer: String,
    /// Request timeout in seconds. `None` keeps the HTTP client's default.
    pub timeout_secs: Option<u64>,
    /// Additional static headers sent with every request.
    pub extra_headers: BTreeMap<String, String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            timeout_secs: None,
            extra_headers: BTreeMap::new(),
        }
    }
}

impl SourceConfig {
    /// Same headers, different endpoint. Used to point a run at a test server.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// All request headers in send order: the three fixed ones, then extras.
    pub fn headers(&self) -> Vec<(&str, &str)> {
        let mut headers = vec![
            ("User-Agent", self.user_agent.as_str()),
            ("Accept-Language", self.accept_language.as_str()),
            ("Referer", self.referer.as_str()),
        ];
        headers.extend(
            self.extra_headers
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );
        headers
    }
}

/// Thresholds for the derived views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Rows kept by every ranking view.
    pub top_n: usize,
    /// A stock qualifies as "below its 52-week high" when
    /// `lastPrice <= high_discount * yearHigh`.
    pub high_discount: f64,
    /// A stock qualifies as "above its 52-week low" when
    /// `lastPrice >= low_premium * yearLow`.
    pub low_premium: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            high_discount: 0.70,
            low_premium: 1.20,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_n == 0 {
            return Err(ConfigError::Invalid("analysis.top_n must be at least 1".into()));
        }
        for (name, value) in [
            ("analysis.high_discount", self.high_discount),
            ("analysis.low_premium", self.low_premium),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}
