//! The 2D drawing resource that shapes render into.
//!
//! [`RenderContext`] is the small set of path primitives a shape needs. The
//! Cairo-backed implementation lives in [`super::render`]; [`RecordingContext`]
//! keeps the calls as data so hosts and tests can inspect what was drawn.

use super::color::Color;
use super::point::Point;

/// Path-based drawing primitives, modelled on a canvas 2D context.
pub trait RenderContext {
    /// Discards the current path and starts a new one.
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Adds a circular arc from `start` to `end` radians around `(cx, cy)`.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64);
    /// Joins the current point back to the start of the subpath.
    fn close_path(&mut self);
    /// Strokes the current path with the configured color and width.
    fn stroke(&mut self);
    /// Resets the given rectangle to fully transparent.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    /// Surface dimensions as `(width, height)`.
    fn size(&self) -> (f64, f64);
}

/// A single recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
    },
    ClosePath,
    Stroke,
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    SetStrokeColor(Color),
    SetLineWidth(f64),
}

/// Render context that stores every call instead of rasterizing.
#[derive(Debug, Clone)]
pub struct RecordingContext {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// All calls recorded since creation or the last [`Self::take_commands`].
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of `Stroke` calls recorded.
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Stroke))
            .count()
    }
}

impl RenderContext for RecordingContext {
    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo(Point::new(x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo(Point::new(x, y)));
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.commands.push(DrawCommand::Arc {
            center: Point::new(cx, cy),
            radius,
            start,
            end,
        });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetStrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_commands_drains_the_log() {
        let mut ctx = RecordingContext::new(10.0, 10.0);
        ctx.begin_path();
        ctx.stroke();
        assert_eq!(ctx.stroke_count(), 1);

        let taken = ctx.take_commands();
        assert_eq!(taken, vec![DrawCommand::BeginPath, DrawCommand::Stroke]);
        assert!(ctx.commands().is_empty());
    }
}
