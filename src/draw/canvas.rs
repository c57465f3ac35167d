//! Drawing surface that binds shapes to a render context.

use super::collection::ShapeCollection;
use super::color::Color;
use super::context::RenderContext;
use super::point::Point;
use super::shape::Drawable;
use crate::util;
use log::debug;

/// Stroke width applied when the host doesn't configure one.
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;

/// A render context plus the stroke style shapes are drawn with.
///
/// The canvas also knows where its surface sits in host coordinates, so
/// clicks reported by the host can be translated before reaching a shape.
pub struct Canvas<C: RenderContext> {
    ctx: C,
    origin: Point,
}

impl<C: RenderContext> Canvas<C> {
    /// Binds `ctx` and applies `color` as the stroke color.
    pub fn new(ctx: C, color: Color) -> Self {
        Self::with_origin(ctx, color, Point::default())
    }

    /// Like [`Self::new`], for a surface whose top-left corner sits at
    /// `origin` in host coordinates.
    pub fn with_origin(mut ctx: C, color: Color, origin: Point) -> Self {
        debug!(
            "Binding canvas with {} stroke at origin ({}, {})",
            util::color_to_name(&color),
            origin.x,
            origin.y
        );
        ctx.set_stroke_color(color);
        ctx.set_line_width(DEFAULT_LINE_WIDTH);
        Self { ctx, origin }
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    pub fn draw_shape(&mut self, shape: &dyn Drawable) {
        shape.draw(&mut self.ctx);
    }

    pub fn draw_collection(&mut self, shapes: &ShapeCollection) {
        shapes.draw_all(&mut self.ctx);
    }

    /// Erases the whole surface.
    pub fn clear(&mut self) {
        let (width, height) = self.ctx.size();
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    /// Translates host coordinates into surface-local coordinates.
    pub fn to_surface(&self, x: f64, y: f64) -> Point {
        Point::new(x - self.origin.x, y - self.origin.y)
    }

    /// Forwards a host click to `shape` in surface coordinates.
    pub fn dispatch_click(&self, shape: &mut dyn Drawable, x: f64, y: f64) {
        let local = self.to_surface(x, y);
        shape.handle_click(local.x, local.y);
    }

    pub fn context(&self) -> &C {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;
    use crate::draw::{Circle, DrawCommand, Polygon, RecordingContext};

    #[test]
    fn new_applies_stroke_color() {
        let canvas = Canvas::new(RecordingContext::new(640.0, 480.0), RED);
        assert_eq!(
            canvas.context().commands(),
            &[
                DrawCommand::SetStrokeColor(RED),
                DrawCommand::SetLineWidth(DEFAULT_LINE_WIDTH),
            ]
        );
    }

    #[test]
    fn clear_covers_whole_surface() {
        let mut canvas = Canvas::new(RecordingContext::new(640.0, 480.0), RED);
        canvas.context_mut().take_commands();
        canvas.clear();
        assert_eq!(
            canvas.context().commands(),
            &[DrawCommand::ClearRect {
                x: 0.0,
                y: 0.0,
                width: 640.0,
                height: 480.0,
            }]
        );
    }

    #[test]
    fn draw_shape_delegates_to_shape() {
        let mut canvas = Canvas::new(RecordingContext::new(100.0, 100.0), RED);
        canvas.draw_shape(&Circle::default());
        assert_eq!(canvas.context().stroke_count(), 1);
    }

    #[test]
    fn dispatch_click_translates_by_origin() {
        let canvas = Canvas::with_origin(
            RecordingContext::new(100.0, 100.0),
            RED,
            Point::new(10.0, 20.0),
        );
        let mut circle = Circle::default();
        canvas.dispatch_click(&mut circle, 15.0, 25.0);
        assert_eq!(circle.center(), Point::new(5.0, 5.0));

        let mut polygon = Polygon::new();
        canvas.dispatch_click(&mut polygon, 10.0, 20.0);
        assert_eq!(polygon.points(), &[Point::new(0.0, 0.0)]);
    }
}
