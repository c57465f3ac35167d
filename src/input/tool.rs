//! Drawing tool selection.

use clap::ValueEnum;
use std::fmt;

/// Drawing tool selection.
///
/// The active tool determines which shape receives clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Tool {
    /// Circle - each click moves the center
    #[default]
    Circle,
    /// Polygon - each click appends a vertex
    Polygon,
    /// Ruler - measures between the last two clicks
    Ruler,
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tool::Circle => "circle",
            Tool::Polygon => "polygon",
            Tool::Ruler => "ruler",
        };
        f.write_str(name)
    }
}
