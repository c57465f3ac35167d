//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls how shapes look when the board first opens.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Stroke color - either a named color (red, green, blue, white, black)
    /// or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_stroke_color")]
    pub stroke_color: ColorSpec,

    /// Stroke width in pixels (valid range: 0.5 - 20.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    /// Radius of the circle tool in pixels (valid range: 0.0 - 10000.0)
    #[serde(default = "default_radius")]
    pub default_radius: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            stroke_color: default_stroke_color(),
            line_width: default_line_width(),
            default_radius: default_radius(),
        }
    }
}

/// Drawing surface dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 16 - 8192)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Surface height in pixels (valid range: 16 - 8192)
    #[serde(default = "default_height")]
    pub height: i32,

    /// Background painted behind the shapes when exporting to PNG
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

/// Resource limits.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct LimitsConfig {
    /// Maximum number of shapes kept on the board (0 = unlimited)
    #[serde(default)]
    pub max_shapes: usize,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

pub(super) fn default_line_width() -> f64 {
    2.0
}

pub(super) fn default_radius() -> f64 {
    100.0
}

fn default_width() -> i32 {
    800
}

fn default_height() -> i32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}
