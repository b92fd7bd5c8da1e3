//! Configuration management for swipelist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{CONFIG_GENERATED, DEFAULT_ACTION_WIDTH, DEFAULT_CELL_WIDTH, DEFAULT_THRESHOLD};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub swipe: SwipeConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// How the reveal offset follows the pointer while a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragMode {
    /// Any drag direction moves the offset within `[0, action_width]`, so a
    /// leftward drag on an open row previews closing before release.
    #[default]
    Symmetric,
    /// The offset only ever grows during a drag; closing motion is not
    /// previewed and is decided on release.
    RevealOnly,
}

/// Gesture configuration shared by every row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Minimum final offset, in pixels, for a release to commit to open
    pub threshold: i32,
    /// Width of the action control in pixels. This is also the maximum reveal
    /// offset, and the terminal host renders the action control from this
    /// value, so it is the single source for the action width.
    pub action_width: i32,
    pub drag_mode: DragMode,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Pixels represented by one terminal column
    pub cell_width: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in the data directory
    pub enabled: bool,
    /// Maximum level recorded: off, error, warn, info, debug or trace
    pub level: String,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            action_width: DEFAULT_ACTION_WIDTH,
            drag_mode: DragMode::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level; unknown names fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(&self.level).unwrap_or(log::LevelFilter::Info)
    }
}

impl SwipeConfig {
    /// Check the gesture bounds. Every swipe constructor runs this.
    pub fn validate(&self) -> Result<()> {
        if self.action_width <= 0 {
            anyhow::bail!("action_width must be positive, got {}", self.action_width);
        }
        if self.threshold <= 0 {
            anyhow::bail!("threshold must be positive, got {}", self.threshold);
        }
        // A threshold beyond the maximum offset could never be reached by a drag
        if self.threshold > self.action_width {
            anyhow::bail!(
                "threshold ({}) cannot exceed action_width ({})",
                self.threshold,
                self.action_width
            );
        }
        Ok(())
    }
}

impl UiConfig {
    /// Number of terminal columns needed to render the action control.
    pub fn action_columns(&self, swipe: &SwipeConfig) -> u16 {
        let cell = i32::from(self.cell_width.max(1));
        let columns = swipe.action_width.max(0).saturating_add(cell - 1) / cell;
        u16::try_from(columns).unwrap_or(u16::MAX)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("swipelist.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("swipelist").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.swipe.validate()?;

        if self.ui.cell_width == 0 {
            anyhow::bail!("cell_width must be at least 1 pixel");
        }

        if log::LevelFilter::from_str(&self.logging.level).is_err() {
            anyhow::bail!("Invalid logging level '{}'", self.logging.level);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# swipelist Configuration File\n# Generated on {}\n#\n# swipe.action_width is also the rendered width of the action control.\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("swipelist"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
