//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::domain::{Color, RenderOptions};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Rendering settings for the image exporters
    pub render: RenderConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
}

/// Render configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas color behind and between plots
    pub background: String,
    /// Plot frame color
    pub frame_color: String,
    /// Grid line color
    pub grid_color: String,
    /// Grid lines per axis
    pub grid_lines: u32,
    /// Pixels between a plot's edge and its frame
    pub padding: u32,
    /// Pixels between plots in rows and columns
    pub spacing: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let defaults = RenderOptions::default();
        Self {
            background: defaults.background.to_hex(),
            frame_color: defaults.frame_color.to_hex(),
            grid_color: defaults.grid_color.to_hex(),
            grid_lines: defaults.grid_lines,
            padding: defaults.padding,
            spacing: defaults.spacing,
        }
    }
}

impl RenderConfig {
    /// Convert to validated render options
    pub fn to_render_options(&self) -> Result<RenderOptions, ConfigError> {
        let color = |key: &str, value: &str| {
            Color::parse(value).map_err(|e| ConfigError::InvalidValue {
                key: format!("render.{key}"),
                message: e.to_string(),
            })
        };

        let options = RenderOptions {
            background: color("background", &self.background)?,
            frame_color: color("frame_color", &self.frame_color)?,
            grid_color: color("grid_color", &self.grid_color)?,
            grid_lines: self.grid_lines,
            padding: self.padding,
            spacing: self.spacing,
        };

        options.validate().map_err(|e| ConfigError::InvalidValue {
            key: "render.grid_lines".to_string(),
            message: e.to_string(),
        })?;

        Ok(options)
    }
}
