//! Closed polygon built one vertex per click.

use super::context::RenderContext;
use super::error::ShapeError;
use super::point::Point;
use super::shape::{Drawable, Shape};

/// Closed polygon whose vertices are kept in insertion order.
///
/// Any vertex count is valid. Fewer than three vertices, or collinear ones,
/// simply enclose no area.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex after the current last one.
    pub fn add_point(&mut self, x: f64, y: f64) {
        self.points.push(Point::new(x, y));
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl Drawable for Polygon {
    fn draw(&self, ctx: &mut dyn RenderContext) {
        let Some((first, rest)) = self.points.split_first() else {
            return;
        };

        ctx.begin_path();
        ctx.move_to(first.x, first.y);
        for p in rest {
            ctx.line_to(p.x, p.y);
        }
        ctx.close_path();
        ctx.stroke();
    }

    fn handle_click(&mut self, x: f64, y: f64) {
        self.add_point(x, y);
    }
}

impl Shape for Polygon {
    /// Unsigned area via the shoelace formula, treating the path as closed.
    fn area(&self) -> Result<f64, ShapeError> {
        let n = self.points.len();
        let mut sum = 0.0;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            sum += a.x * b.y - b.x * a.y;
        }
        Ok(sum.abs() / 2.0)
    }
}
