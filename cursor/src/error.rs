use derive_more::Display;

pub type Result<T> = std::result::Result<T, SpaceError>;

/// The direction of a whole-position step.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum Direction {
    #[display("forward")]
    Forward,
    #[display("backward")]
    Backward,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SpaceError {
    #[error("size {size} of dimension {dimension} is negative")]
    NegativeSize { dimension: usize, size: i64 },

    #[error("min has {min_len} dimensions, but max has {max_len}")]
    MismatchedBounds { min_len: usize, max_len: usize },

    #[error("dimension {dimension}: min {min} is greater than max {max}")]
    InvalidBounds { dimension: usize, min: i64, max: i64 },

    /// `i64::MIN` is reserved to mark coordinates of an invalid position.
    #[error("dimension {dimension}: min must be greater than i64::MIN")]
    UnrepresentableMin { dimension: usize },

    #[error("number of elements does not fit into 64 bits")]
    TooManyElements,

    #[error("position is invalid")]
    InvalidPosition,

    #[error("dimension {dimension}: coordinate {value} is outside of {min}..={max}")]
    CoordinateOutOfBounds {
        dimension: usize,
        value: i128,
        min: i64,
        max: i64,
    },

    #[error("index {index} is outside of 0..{num_elements}")]
    IndexOutOfRange { index: i128, num_elements: i64 },

    #[error("dimension {dimension} out of range for {num_dimensions}-dimensional extents")]
    DimensionOutOfRange {
        dimension: usize,
        num_dimensions: usize,
    },

    #[error("expected {expected} dimensions, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("dimension {dimension}: coordinate {value} does not fit into the requested type")]
    CoordinateOverflow { dimension: usize, value: i64 },

    #[error("cannot step {direction}, no positions left")]
    Exhausted { direction: Direction },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_names_the_direction() {
        let error = SpaceError::Exhausted {
            direction: Direction::Backward,
        };
        assert_eq!(error.to_string(), "cannot step backward, no positions left");
    }

    #[test]
    fn out_of_bounds_reports_the_range() {
        let error = SpaceError::CoordinateOutOfBounds {
            dimension: 1,
            value: 7,
            min: 0,
            max: 3,
        };
        assert_eq!(
            error.to_string(),
            "dimension 1: coordinate 7 is outside of 0..=3"
        );
    }
}
