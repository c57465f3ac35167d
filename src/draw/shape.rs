//! Capability traits shared by all shapes.

use super::context::RenderContext;
use super::error::ShapeError;

/// Something that can be rendered onto a surface and reacts to clicks.
///
/// Clicks arrive already translated into surface-local coordinates.
pub trait Drawable {
    /// Renders the current geometry. Never mutates the shape.
    fn draw(&self, ctx: &mut dyn RenderContext);

    /// Updates the geometry in response to a click at `(x, y)`.
    fn handle_click(&mut self, x: f64, y: f64);
}

/// A drawable that encloses an area.
///
/// Only area-capable shapes can be stored in a
/// [`ShapeCollection`](super::ShapeCollection); measuring-only drawables such as
/// the [`Ruler`](super::Ruler) implement [`Drawable`] alone.
pub trait Shape: Drawable {
    fn area(&self) -> Result<f64, ShapeError>;
}
