//! Configuration for choropleth rendering.
//!
//! Configuration is layered with the following precedence:
//! 1. Values set in code on the returned struct (highest priority)
//! 2. JSON config file
//! 3. Default values (lowest priority)
//!
//! Every field has a serde default, so a config file only needs the keys it
//! changes.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::colormaps::get_colormap;
use crate::error::{ChoroplethError, Result};
use crate::normalize::DegenerateRangePolicy;
use crate::region::MissingValuePolicy;
use crate::surface::AspectMode;

/// Canvas size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,
}

/// Complete render configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output canvas size
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Name of the color ramp
    #[serde(default = "default_colormap")]
    pub colormap: String,

    /// Whether to draw the colorbar legend
    #[serde(default = "default_legend")]
    pub legend: bool,

    /// Aspect ratio of the map area
    #[serde(default)]
    pub aspect: AspectMode,

    /// Behaviour when every region has the same value
    #[serde(default)]
    pub degenerate_range: DegenerateRangePolicy,

    /// Behaviour for regions without a finite value
    #[serde(default)]
    pub missing_values: MissingValuePolicy,

    /// Background color as a hex string
    #[serde(default = "default_background")]
    pub background: String,

    /// Log level for [`RenderConfig::init_tracing`]; rendering never installs
    /// a subscriber on its own
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl RenderConfig {
    /// Install the global tracing subscriber at `log_level`
    pub fn init_tracing(&self) -> Result<()> {
        self.validate()?;
        crate::logging::init_tracing(&self.log_level);
        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: RenderConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Parsed background color
    pub fn background_rgba(&self) -> Result<[u8; 4]> {
        parse_hex_color(&self.background)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ChoroplethError::Config {
                message: format!(
                    "Canvas dimensions must be positive, got {}x{}",
                    self.canvas.width, self.canvas.height
                ),
            });
        }

        // Surface the unknown ramp as a config error rather than at render time
        get_colormap(&self.colormap).map_err(|e| ChoroplethError::Config {
            message: e.to_string(),
        })?;

        self.background_rgba().map_err(|e| ChoroplethError::Config {
            message: e.to_string(),
        })?;

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ChoroplethError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` into RGBA
pub fn parse_hex_color(hex: &str) -> Result<[u8; 4]> {
    let digits = hex.trim().trim_start_matches('#');
    let invalid = || ChoroplethError::InvalidParameter {
        param: "color".to_string(),
        message: format!("Invalid hex color: {}", hex),
    };

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

    match digits.len() {
        3 => {
            let mut rgba = [255u8; 4];
            for (i, c) in digits.chars().enumerate() {
                let v = c.to_digit(16).ok_or_else(invalid)? as u8;
                rgba[i] = v * 17;
            }
            Ok(rgba)
        }
        6 => Ok([channel(0)?, channel(2)?, channel(4)?, 255]),
        8 => Ok([channel(0)?, channel(2)?, channel(4)?, channel(6)?]),
        _ => Err(invalid()),
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            colormap: default_colormap(),
            legend: default_legend(),
            aspect: AspectMode::default(),
            degenerate_range: DegenerateRangePolicy::default(),
            missing_values: MissingValuePolicy::default(),
            background: default_background(),
            log_level: default_log_level(),
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

// Default value functions for serde
fn default_width() -> u32 {
    1200
}

fn default_height() -> u32 {
    1200
}

fn default_colormap() -> String {
    "viridis".to_string()
}

fn default_legend() -> bool {
    true
}

fn default_background() -> String {
    "#ffffff".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
