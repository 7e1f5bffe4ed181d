//! Badge configuration loaded from JSON.

use crate::geometry::{StretchParams, BASE_RADIUS, MIN_RADIUS, SHRINK_FACTOR};
use kurbo::Point;
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default anchor position, in surface-local coordinates.
pub const DEFAULT_ANCHOR: Point = Point::new(200.0, 30.0);
/// Default label text.
pub const DEFAULT_LABEL: &str = "99+";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// What a press does once the badge has burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RearmPolicy {
    /// A new press restores the full badge.
    #[default]
    Rearm,
    /// The badge is consumed; presses after a burst are ignored.
    SingleUse,
}

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Colors for the badge and its label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeStyle {
    /// Fill of both circles and the rubber band.
    pub fill: SerializableColor,
    /// Background of the label pill.
    pub label_background: SerializableColor,
    pub label_text: SerializableColor,
    pub label_font_size: f64,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            fill: SerializableColor::new(239, 68, 68, 255),
            label_background: SerializableColor::new(220, 38, 38, 255),
            label_text: SerializableColor::new(255, 255, 255, 255),
            label_font_size: 16.0,
        }
    }
}

/// Everything needed to build a badge controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeConfig {
    pub anchor: Point,
    pub base_radius: f64,
    pub min_radius: f64,
    pub shrink_factor: f64,
    /// Truncate the radius to whole units, like a pixel-integer radius.
    pub quantize_radius: bool,
    pub rearm: RearmPolicy,
    pub label_text: String,
    pub style: BadgeStyle,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            anchor: DEFAULT_ANCHOR,
            base_radius: BASE_RADIUS,
            min_radius: MIN_RADIUS,
            shrink_factor: SHRINK_FACTOR,
            quantize_radius: false,
            rearm: RearmPolicy::default(),
            label_text: DEFAULT_LABEL.to_string(),
            style: BadgeStyle::default(),
        }
    }
}

impl BadgeConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded badge config from {:?}", path.as_ref());
        Self::from_json(&json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the numbers describe a usable badge.
    pub fn validate(&self) -> ConfigResult<()> {
        let numbers = [
            ("anchor.x", self.anchor.x),
            ("anchor.y", self.anchor.y),
            ("base_radius", self.base_radius),
            ("min_radius", self.min_radius),
            ("shrink_factor", self.shrink_factor),
        ];
        if let Some((name, _)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::Invalid(format!("{name} must be finite")));
        }
        if self.min_radius <= 0.0 {
            return Err(ConfigError::Invalid("min_radius must be positive".into()));
        }
        if self.min_radius > self.base_radius {
            return Err(ConfigError::Invalid(format!(
                "min_radius ({}) exceeds base_radius ({})",
                self.min_radius, self.base_radius
            )));
        }
        if self.shrink_factor <= 0.0 {
            return Err(ConfigError::Invalid("shrink_factor must be positive".into()));
        }
        Ok(())
    }

    /// Shrink parameters for the geometry engine.
    pub fn stretch_params(&self) -> StretchParams {
        StretchParams {
            base_radius: self.base_radius,
            min_radius: self.min_radius,
            shrink_factor: self.shrink_factor,
            quantize: self.quantize_radius,
        }
    }
}
