//! Error types for shape queries.

use thiserror::Error;

/// Errors that can occur when measuring shapes or parsing coordinates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShapeError {
    #[error("radius cannot be negative (got {0})")]
    NegativeRadius(f64),

    #[error("invalid point '{0}', expected X,Y")]
    InvalidPoint(String),
}

impl ShapeError {
    /// Returns true for errors caused by a value outside its valid range.
    pub fn is_range_error(&self) -> bool {
        matches!(self, ShapeError::NegativeRadius(_))
    }
}
