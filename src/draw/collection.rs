//! Ordered container for area-capable shapes.

use super::context::RenderContext;
use super::error::ShapeError;
use super::shape::Shape;
use log::debug;

/// Container for all measurable shapes on the board.
///
/// Shapes are kept in draw order (first = bottom layer, last = top layer).
/// [`Self::all`] and [`Self::all_mut`] borrow the live list; nothing is copied.
#[derive(Default)]
pub struct ShapeCollection {
    shapes: Vec<Box<dyn Shape>>,
}

impl std::fmt::Debug for ShapeCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeCollection")
            .field("len", &self.shapes.len())
            .finish()
    }
}

impl ShapeCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Creates a collection pre-seeded with `shapes`, keeping their order.
    pub fn with_shapes(shapes: Vec<Box<dyn Shape>>) -> Self {
        Self { shapes }
    }

    pub fn all(&self) -> &[Box<dyn Shape>] {
        &self.shapes
    }

    pub fn all_mut(&mut self) -> &mut [Box<dyn Shape>] {
        &mut self.shapes
    }

    pub fn get(&self, index: usize) -> Option<&dyn Shape> {
        self.shapes.get(index).map(|shape| &**shape)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn Shape + 'static)> {
        self.shapes.get_mut(index).map(|shape| &mut **shape)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Adds a shape on top of the existing ones.
    pub fn add(&mut self, shape: Box<dyn Shape>) {
        self.shapes.push(shape);
    }

    /// Attempts to add a shape, enforcing a maximum shape count when `max` > 0.
    ///
    /// Returns `true` if the shape was added, `false` if the limit would be exceeded.
    pub fn try_add(&mut self, shape: Box<dyn Shape>, max: usize) -> bool {
        if max == 0 || self.shapes.len() < max {
            self.shapes.push(shape);
            true
        } else {
            false
        }
    }

    /// Removes the shape at `index`, keeping the order of the rest.
    ///
    /// An out-of-range index leaves the collection untouched and returns `None`.
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Shape>> {
        if index >= self.shapes.len() {
            debug!(
                "Ignoring remove at index {} (collection holds {})",
                index,
                self.shapes.len()
            );
            return None;
        }
        Some(self.shapes.remove(index))
    }

    /// Removes all shapes.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Sum of all shape areas; the first failing shape aborts the sum.
    pub fn area(&self) -> Result<f64, ShapeError> {
        self.shapes.iter().map(|shape| shape.area()).sum()
    }

    /// Draws every shape in order, bottom layer first.
    pub fn draw_all(&self, ctx: &mut dyn RenderContext) {
        for shape in &self.shapes {
            shape.draw(ctx);
        }
    }
}
