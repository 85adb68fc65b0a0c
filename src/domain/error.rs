use thiserror::Error;

/// Failures surfaced by the grid store and the transition engine.
/// All of them are recoverable; callers decide whether to log or bail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    #[error("grid dimensions differ: current is {current:?}, next is {next:?}")]
    DimensionMismatch {
        current: (usize, usize),
        next: (usize, usize),
    },
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_coordinates() {
        let err = GridError::OutOfBounds { x: -1, y: 3, width: 5, height: 5 };
        assert_eq!(err.to_string(), "cell (-1, 3) is outside the 5x5 grid");

        let err = GridError::InvalidDimensions { width: 0, height: 4 };
        assert_eq!(err.to_string(), "invalid grid dimensions 0x4");
    }
}
