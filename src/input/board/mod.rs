//! Board session state: working shapes, committed shapes, and redraw tracking.

mod mouse;
mod render;
#[cfg(test)]
mod tests;

use crate::config::Config;
use crate::draw::{Circle, Point, Polygon, Ruler, Shape, ShapeCollection, ShapeError};
use crate::input::tool::Tool;
use log::{debug, info, warn};
use std::fmt;

/// Result of measuring the shape under the active tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    Area(f64),
    Length(f64),
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Area(value) => write!(f, "area: {value:.3}"),
            Measurement::Length(value) => write!(f, "length: {value:.3}"),
        }
    }
}

/// Everything a host UI session needs to drive the drawing surface.
///
/// Each tool owns one working shape that clicks are applied to. Circles and
/// polygons can be committed into the [`ShapeCollection`], which sums their
/// areas; the ruler only measures and is never committed.
///
/// Mutations set [`Self::needs_redraw`]; the host calls [`Self::render`] when
/// it is ready to repaint.
pub struct Board {
    shapes: ShapeCollection,
    circle: Circle,
    polygon: Polygon,
    ruler: Ruler,
    tool: Tool,
    max_shapes: usize,
    needs_redraw: bool,
}

impl Board {
    /// Creates a board with the circle centered on the surface.
    pub fn new(config: &Config) -> Self {
        let center = Point::new(
            config.canvas.width as f64 / 2.0,
            config.canvas.height as f64 / 2.0,
        );
        Self {
            shapes: ShapeCollection::new(),
            circle: Circle::new(center, config.drawing.default_radius),
            polygon: Polygon::new(),
            ruler: Ruler::new(),
            tool: Tool::default(),
            max_shapes: config.limits.max_shapes,
            needs_redraw: true,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            debug!("Switching tool {} -> {}", self.tool, tool);
            self.tool = tool;
            self.needs_redraw = true;
        }
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn shapes(&self) -> &ShapeCollection {
        &self.shapes
    }

    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn ruler(&self) -> &Ruler {
        &self.ruler
    }

    /// Changes the circle radius. Not validated until the area is measured.
    pub fn set_radius(&mut self, radius: f64) {
        self.circle.set_radius(radius);
        self.needs_redraw = true;
    }

    /// Measures the working shape of the active tool.
    pub fn measure(&self) -> Result<Measurement, ShapeError> {
        match self.tool {
            Tool::Circle => self.circle.area().map(Measurement::Area),
            Tool::Polygon => self.polygon.area().map(Measurement::Area),
            Tool::Ruler => Ok(Measurement::Length(self.ruler.length())),
        }
    }

    /// Sum of the areas of all committed shapes.
    pub fn total_area(&self) -> Result<f64, ShapeError> {
        self.shapes.area()
    }

    pub fn ruler_length(&self) -> f64 {
        self.ruler.length()
    }

    /// Moves the working shape of the active tool into the collection.
    ///
    /// The working polygon is reset afterwards; the circle stays in place so it
    /// can be stamped again. Returns `false` when nothing was committed: the
    /// ruler is active, the polygon is empty, or the shape limit is reached.
    pub fn commit(&mut self) -> bool {
        let shape: Box<dyn Shape> = match self.tool {
            Tool::Circle => Box::new(self.circle.clone()),
            Tool::Polygon if !self.polygon.is_empty() => Box::new(self.polygon.clone()),
            Tool::Polygon | Tool::Ruler => return false,
        };

        if !self.shapes.try_add(shape, self.max_shapes) {
            warn!(
                "Shape limit reached ({} max), not committing {}",
                self.max_shapes, self.tool
            );
            return false;
        }

        if self.tool == Tool::Polygon {
            self.polygon.clear();
        }
        info!("Committed {} ({} on board)", self.tool, self.shapes.len());
        self.needs_redraw = true;
        true
    }

    /// Removes a committed shape; out-of-range indices are ignored.
    pub fn remove_shape(&mut self, index: usize) -> bool {
        let removed = self.shapes.remove(index).is_some();
        self.needs_redraw |= removed;
        removed
    }

    /// Resets the working shape of the active tool.
    ///
    /// The circle has no points to clear; its center and radius are kept.
    pub fn clear_active(&mut self) {
        match self.tool {
            Tool::Circle => return,
            Tool::Polygon => self.polygon.clear(),
            Tool::Ruler => self.ruler.clear(),
        }
        self.needs_redraw = true;
    }

    /// Removes committed shapes and resets every working shape.
    pub fn clear_all(&mut self) {
        self.shapes.clear();
        self.polygon.clear();
        self.ruler.clear();
        self.needs_redraw = true;
    }
}
