//! Shapes, the drawing surface, and rendering backends.
//!
//! This module defines the core drawing types:
//! - [`Point`]: 2D coordinates in surface space
//! - [`Drawable`] / [`Shape`]: capability traits for rendering and measuring
//! - [`Circle`], [`Polygon`], [`Ruler`]: the interactive shapes
//! - [`ShapeCollection`]: ordered container that sums shape areas
//! - [`Canvas`]: binds a [`RenderContext`] and forwards clicks
//! - [`CairoContext`] / [`RecordingContext`]: render context implementations

pub mod canvas;
pub mod circle;
pub mod collection;
pub mod color;
pub mod context;
pub mod error;
pub mod point;
pub mod polygon;
pub mod render;
pub mod ruler;
pub mod shape;

// Re-export commonly used types at module level
pub use canvas::Canvas;
pub use circle::Circle;
pub use collection::ShapeCollection;
pub use color::Color;
pub use context::{DrawCommand, RecordingContext, RenderContext};
pub use error::ShapeError;
pub use point::Point;
pub use polygon::Polygon;
pub use render::{CairoContext, fill_background};
pub use ruler::Ruler;
pub use shape::{Drawable, Shape};
