//! Click handling and board session state.
//!
//! This module routes host clicks to the shape being edited, tracks the active
//! tool, and decides when the surface needs to be redrawn.

pub mod board;
pub mod tool;

// Re-export commonly used types at module level
pub use board::{Board, Measurement};
pub use tool::Tool;
