//! Cairo-based rendering backend.

use super::color::Color;
use super::context::RenderContext;
use log::debug;

/// [`RenderContext`] backed by a Cairo drawing context.
///
/// Cairo reports failures per call; like the rest of the renderer these are
/// logged and otherwise ignored, so a failed stroke leaves the surface as it was.
pub struct CairoContext {
    ctx: cairo::Context,
    width: f64,
    height: f64,
}

impl CairoContext {
    /// Wraps an existing Cairo context for a surface of the given size.
    pub fn new(ctx: cairo::Context, width: i32, height: i32) -> Self {
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_join(cairo::LineJoin::Round);
        Self {
            ctx,
            width: width as f64,
            height: height as f64,
        }
    }

    /// Creates a context drawing into `surface`.
    pub fn for_image_surface(surface: &cairo::ImageSurface) -> Result<Self, cairo::Error> {
        let ctx = cairo::Context::new(surface)?;
        Ok(Self::new(ctx, surface.width(), surface.height()))
    }

    /// Returns the underlying Cairo context.
    pub fn cairo(&self) -> &cairo::Context {
        &self.ctx
    }
}

impl RenderContext for CairoContext {
    fn begin_path(&mut self) {
        self.ctx.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        // Cairo rejects negative radii; the path is simply skipped.
        if radius < 0.0 {
            debug!("Skipping arc with negative radius {radius}");
            return;
        }
        self.ctx.arc(cx, cy, radius, start, end);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn stroke(&mut self) {
        if let Err(err) = self.ctx.stroke() {
            debug!("Cairo stroke failed: {err}");
        }
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        // Save context state so the clear operator doesn't leak into strokes
        self.ctx.save().ok();
        self.ctx.set_operator(cairo::Operator::Clear);
        self.ctx.rectangle(x, y, width, height);
        if let Err(err) = self.ctx.fill() {
            debug!("Cairo clear failed: {err}");
        }
        self.ctx.restore().ok();
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

/// Paints a background color behind everything already on the surface.
///
/// Used when exporting to PNG so strokes stay visible in image viewers that
/// render transparency as black. Call after the shapes have been drawn.
pub fn fill_background(ctx: &cairo::Context, color: Color, width: i32, height: i32) {
    ctx.save().ok();
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_operator(cairo::Operator::DestOver);
    ctx.rectangle(0.0, 0.0, width as f64, height as f64);
    let _ = ctx.fill();
    ctx.restore().ok();
}
