//! Interactive drawing surface with measurable shapes.
//!
//! Exposes the shape types, the drawing surface, and the board session state so
//! host UIs can route clicks into shapes and read back areas and lengths.

pub mod config;
pub mod draw;
pub mod input;
pub mod util;

pub use config::Config;
