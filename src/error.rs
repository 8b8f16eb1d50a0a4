use thiserror::Error;

/// Errors raised by [PathingGrid](crate::pathing_grid::PathingGrid) mutators and constructors.
/// An unreachable goal is not an error; searches signal it with an empty path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("coordinate ({x}, {y}) lies outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}
