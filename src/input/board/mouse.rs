use crate::draw::{Canvas, Drawable, RenderContext};
use crate::input::tool::Tool;
use log::trace;

use super::Board;

impl Board {
    /// Applies a click in surface coordinates to the active tool's shape.
    ///
    /// - Circle: moves the center to the click
    /// - Polygon: appends a vertex
    /// - Ruler: pushes an endpoint, keeping the last two
    pub fn on_click(&mut self, x: f64, y: f64) {
        trace!("Click at ({x}, {y}) with {}", self.tool);
        self.active_shape_mut().handle_click(x, y);
        self.needs_redraw = true;
    }

    /// Applies a click reported in host coordinates, translated by `canvas`.
    pub fn on_host_click<C: RenderContext>(&mut self, canvas: &Canvas<C>, x: f64, y: f64) {
        let local = canvas.to_surface(x, y);
        self.on_click(local.x, local.y);
    }

    pub(super) fn active_shape(&self) -> &dyn Drawable {
        match self.tool {
            Tool::Circle => &self.circle,
            Tool::Polygon => &self.polygon,
            Tool::Ruler => &self.ruler,
        }
    }

    fn active_shape_mut(&mut self) -> &mut dyn Drawable {
        match self.tool {
            Tool::Circle => &mut self.circle,
            Tool::Polygon => &mut self.polygon,
            Tool::Ruler => &mut self.ruler,
        }
    }
}
