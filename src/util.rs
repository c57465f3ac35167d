//! Utility functions for color names.
//!
//! This module provides the name <-> color mapping shared by the configuration
//! file, the command line, and debug logging.

use crate::draw::{Color, color::*};

/// Maps color name strings to Color values.
///
/// Used by the configuration system and the `--color` flag.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "white", "black"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (threshold-based) to identify colors.
/// Returns "Custom" if the color doesn't match any predefined color.
pub fn color_to_name(color: &Color) -> &'static str {
    if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        "Custom"
    }
}
