//! Circle that follows the pointer.

use super::context::RenderContext;
use super::error::ShapeError;
use super::point::Point;
use super::shape::{Drawable, Shape};
use std::f64::consts::PI;

/// Radius used when the host doesn't pick one.
pub const DEFAULT_RADIUS: f64 = 100.0;

/// Circle outline defined by its center and radius.
///
/// The radius is not validated on construction or mutation; a negative radius
/// is only reported when the area is queried.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(Point::default(), DEFAULT_RADIUS)
    }
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    /// Moves the circle so it is centered on `(x, y)`.
    pub fn set_center(&mut self, x: f64, y: f64) {
        self.center = Point::new(x, y);
    }
}

impl Drawable for Circle {
    fn draw(&self, ctx: &mut dyn RenderContext) {
        ctx.begin_path();
        ctx.arc(self.center.x, self.center.y, self.radius, 0.0, 2.0 * PI);
        ctx.stroke();
    }

    fn handle_click(&mut self, x: f64, y: f64) {
        self.set_center(x, y);
    }
}

impl Shape for Circle {
    fn area(&self) -> Result<f64, ShapeError> {
        if self.radius < 0.0 {
            return Err(ShapeError::NegativeRadius(self.radius));
        }
        Ok(PI * self.radius.powi(2))
    }
}
