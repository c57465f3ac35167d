//! Configuration file support for shapeboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/shapeboard/config.toml`. Settings include the stroke style,
//! the default circle radius, surface dimensions, and shape limits.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, LimitsConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// stroke_color = "black"
/// line_width = 2.0
/// default_radius = 100.0
///
/// [canvas]
/// width = 800
/// height = 600
///
/// [limits]
/// max_shapes = 0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Stroke style and shape defaults
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Drawing surface dimensions
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Resource limits
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `line_width`: 0.5 - 20.0
    /// - `default_radius`: 0.0 - 10000.0
    /// - `canvas.width` / `canvas.height`: 16 - 8192
    ///
    /// Non-finite floats (`nan`, `inf`) are reset to their defaults first.
    pub fn validate_and_clamp(&mut self) {
        if !self.drawing.line_width.is_finite() {
            log::warn!(
                "Invalid line_width {}, using default",
                self.drawing.line_width
            );
            self.drawing.line_width = types::default_line_width();
        }
        if !self.drawing.default_radius.is_finite() {
            log::warn!(
                "Invalid default_radius {}, using default",
                self.drawing.default_radius
            );
            self.drawing.default_radius = types::default_radius();
        }

        // Line width: 0.5 - 20.0
        if !(0.5..=20.0).contains(&self.drawing.line_width) {
            log::warn!(
                "Invalid line_width {:.1}, clamping to 0.5-20.0 range",
                self.drawing.line_width
            );
            self.drawing.line_width = self.drawing.line_width.clamp(0.5, 20.0);
        }

        // Radius: 0.0 - 10000.0
        if !(0.0..=10000.0).contains(&self.drawing.default_radius) {
            log::warn!(
                "Invalid default_radius {:.1}, clamping to 0.0-10000.0 range",
                self.drawing.default_radius
            );
            self.drawing.default_radius = self.drawing.default_radius.clamp(0.0, 10000.0);
        }

        // Surface size: 16 - 8192
        if !(16..=8192).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 16-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(16, 8192);
        }
        if !(16..=8192).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 16-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(16, 8192);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/shapeboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("shapeboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it doesn't exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Serializes the config to TOML and writes it to `config_path`.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Writes the documented example config to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the config file, for editor tooling.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
