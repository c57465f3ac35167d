//! Measuring line between the two most recent clicks.

use super::context::RenderContext;
use super::point::Point;
use super::shape::Drawable;

/// Open line that remembers only the last two points it was given.
///
/// Adding a third point evicts the oldest one, so the ruler always measures
/// between the two most recent clicks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ruler {
    older: Option<Point>,
    newer: Option<Point>,
}

impl Ruler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a point, dropping the oldest one once two are held.
    pub fn add_point(&mut self, x: f64, y: f64) {
        if self.newer.is_some() {
            self.older = self.newer;
        }
        self.newer = Some(Point::new(x, y));
    }

    pub fn clear(&mut self) {
        self.older = None;
        self.newer = None;
    }

    /// Current points, oldest first.
    pub fn points(&self) -> Vec<Point> {
        self.older.into_iter().chain(self.newer).collect()
    }

    pub fn len(&self) -> usize {
        self.older.is_some() as usize + self.newer.is_some() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.newer.is_none()
    }

    /// Distance between the two held points, or 0 until both are set.
    pub fn length(&self) -> f64 {
        match (self.older, self.newer) {
            (Some(a), Some(b)) => a.distance_to(&b),
            _ => 0.0,
        }
    }
}

impl Drawable for Ruler {
    fn draw(&self, ctx: &mut dyn RenderContext) {
        let Some(last) = self.newer else {
            return;
        };

        ctx.begin_path();
        match self.older {
            Some(first) => {
                ctx.move_to(first.x, first.y);
                ctx.line_to(last.x, last.y);
            }
            None => ctx.move_to(last.x, last.y),
        }
        ctx.stroke();
    }

    fn handle_click(&mut self, x: f64, y: f64) {
        self.add_point(x, y);
    }
}
