//! Configuration management for Vigil.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Main suite configuration.
///
/// This is loaded from `~/.config/vigil/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Target page settings
    pub pages: PagesConfig,
    /// Browser automation settings
    pub browser: BrowserConfig,
    /// Default wait budgets
    pub waits: WaitDefaults,
}

impl SuiteConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(&config_path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `VIGIL_BASE_URL`: Override the demo site base URL
    /// - `VIGIL_HEADLESS`: Override browser headless mode (true/false)
    /// - `VIGIL_WAIT_TIMEOUT_MS`: Override the default wait timeout
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;

        // Override from environment
        if let Ok(val) = std::env::var("VIGIL_BASE_URL") {
            if !val.is_empty() {
                tracing::debug!("Override pages.base_url from env: {}", val);
                config.pages.base_url = val;
            }
        }

        if let Ok(val) = std::env::var("VIGIL_HEADLESS") {
            if let Ok(headless) = val.parse() {
                config.browser.headless = headless;
                tracing::debug!("Override browser.headless from env: {}", headless);
            }
        }

        if let Ok(val) = std::env::var("VIGIL_WAIT_TIMEOUT_MS") {
            if let Ok(ms) = val.parse() {
                config.waits.timeout_ms = ms;
                tracing::debug!("Override waits.timeout_ms from env: {}", ms);
            }
        }

        Ok(config)
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        let config_path = Self::config_path()?;
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "config_path".to_string(),
                reason: "no parent directory".to_string(),
            })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/vigil/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("dev", "vigil", "vigil").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Target page settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    /// Base URL of the hosted demo site
    pub base_url: String,
    /// Base URL of the exceptions practice page
    pub exceptions_url: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            base_url: "https://the-internet.herokuapp.com".to_string(),
            exceptions_url: "https://practicetestautomation.com/practice-test-exceptions/"
                .to_string(),
        }
    }
}

/// Browser automation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Run browser in headless mode
    pub headless: bool,
    /// Browser window width
    pub window_width: u32,
    /// Browser window height
    pub window_height: u32,
    /// Navigation timeout in seconds
    pub navigation_timeout_secs: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1920,
            window_height: 1080,
            navigation_timeout_secs: 30,
            user_agent: "Vigil/0.1.0 (+https://github.com/vigil-e2e/vigil)".to_string(),
        }
    }
}

/// Default wait budgets for explicit waits.
///
/// These are the suite-wide defaults; individual waits may override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitDefaults {
    /// Maximum time to wait for a condition, in milliseconds
    pub timeout_ms: u64,
    /// Delay between condition probes, in milliseconds
    pub interval_ms: u64,
    /// Extra passive delay granted after a timeout before a final recheck
    pub grace_ms: u64,
}

impl WaitDefaults {
    /// Default wait timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Default probe interval as a [`Duration`].
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Default grace period as a [`Duration`].
    #[must_use]
    pub fn grace(&self) -> Duration {
        Duration::from_millis(self.grace_ms)
    }
}

impl Default for WaitDefaults {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            interval_ms: 250,
            grace_ms: 3_000,
        }
    }
}
