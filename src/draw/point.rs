//! 2D coordinate value type.

use super::error::ShapeError;
use std::str::FromStr;

/// A position on the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl FromStr for Point {
    type Err = ShapeError;

    /// Parses `"X,Y"`, allowing whitespace around either component.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ShapeError::InvalidPoint(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse::<f64>().map_err(|_| invalid())?;
        let y = y.trim().parse::<f64>().map_err(|_| invalid())?;
        Ok(Self { x, y })
    }
}
