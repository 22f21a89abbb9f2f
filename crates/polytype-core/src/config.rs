//! Configuration management for polytype.
//!
//! Loads configuration from ${POLYTYPE_HOME}/config.toml with sensible defaults.
//! Values are read once at startup and stay fixed for the whole run.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Pacing of the typewriter animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay per Chinese character (words use twice this).
    pub char_delay_ms: u64,
    /// Extra pause after a token containing a comma.
    pub comma_pause_ms: u64,
    /// Pause between two phrases.
    pub phrase_pause_ms: u64,
    /// Pause before the first phrase.
    pub initial_delay_ms: u64,
    /// Pause after the last phrase before looping.
    pub restart_delay_ms: u64,
}

impl TimingConfig {
    pub fn char_delay(&self) -> Duration {
        Duration::from_millis(self.char_delay_ms)
    }

    pub fn comma_pause(&self) -> Duration {
        Duration::from_millis(self.comma_pause_ms)
    }

    pub fn phrase_pause(&self) -> Duration {
        Duration::from_millis(self.phrase_pause_ms)
    }

    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn restart_delay(&self) -> Duration {
        Duration::from_millis(self.restart_delay_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            char_delay_ms: 200,
            comma_pause_ms: 400,
            phrase_pause_ms: 500,
            initial_delay_ms: 10,
            restart_delay_ms: 4000,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content bundle path (relative to the working directory).
    pub content_path: Option<String>,

    /// Flag shown on the main panel until the first phrase starts.
    pub initial_language: String,

    /// Share of the viewport width a line may use before wrapping.
    pub wrap_ratio: f64,

    pub timing: TimingConfig,
}

impl Config {
    const DEFAULT_CONTENT_PATH: &str = "content.json";
    const DEFAULT_INITIAL_LANGUAGE: &str = "es";
    const DEFAULT_WRAP_RATIO: f64 = 0.6667;

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Config = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?
        } else {
            Config::default()
        };

        if !(config.wrap_ratio > 0.0 && config.wrap_ratio <= 1.0) {
            anyhow::bail!(
                "wrap_ratio must be in (0, 1], got {} in {}",
                config.wrap_ratio,
                path.display()
            );
        }
        Ok(config)
    }

    /// Content path to use when the command line doesn't name one.
    pub fn content_path(&self) -> PathBuf {
        PathBuf::from(
            self.content_path
                .as_deref()
                .unwrap_or(Self::DEFAULT_CONTENT_PATH),
        )
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_path: None,
            initial_language: Self::DEFAULT_INITIAL_LANGUAGE.to_string(),
            wrap_ratio: Self::DEFAULT_WRAP_RATIO,
            timing: TimingConfig::default(),
        }
    }
}

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for polytype configuration and logs.
    //!
    //! POLYTYPE_HOME resolution order:
    //! 1. POLYTYPE_HOME environment variable (if set)
    //! 2. ~/.config/polytype (default)
    //! 3. ./.polytype when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the polytype home directory.
    pub fn polytype_home() -> PathBuf {
        if let Ok(home) = std::env::var("POLYTYPE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".polytype"),
            |h| h.join(".config").join("polytype"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        polytype_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        polytype_home().join("logs")
    }
}
