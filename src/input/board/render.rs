use crate::draw::{Canvas, RenderContext};

use super::Board;

impl Board {
    /// Repaints the whole surface from current state.
    ///
    /// Committed shapes are drawn bottom-up, then the working shape of the
    /// active tool on top. Clears the redraw flag.
    pub fn render<C: RenderContext>(&mut self, canvas: &mut Canvas<C>) {
        canvas.clear();
        canvas.draw_collection(&self.shapes);
        canvas.draw_shape(self.active_shape());
        self.needs_redraw = false;
    }
}
