use crate::{Result, SpaceError};

/// A numeric type a position's coordinates can be read out as.
pub trait Coordinate: Copy {
    /// Convert the coordinate of `dimension`. Fails if `value` can not be represented.
    fn from_coordinate(dimension: usize, value: i64) -> Result<Self>;
}

impl Coordinate for i64 {
    fn from_coordinate(_dimension: usize, value: i64) -> Result<Self> {
        Ok(value)
    }
}

impl Coordinate for i32 {
    fn from_coordinate(dimension: usize, value: i64) -> Result<Self> {
        i32::try_from(value).map_err(|_| SpaceError::CoordinateOverflow { dimension, value })
    }
}

// Floats round to the nearest representable value, like the integer to float casts do.

impl Coordinate for f32 {
    fn from_coordinate(_dimension: usize, value: i64) -> Result<Self> {
        Ok(value as f32)
    }
}

impl Coordinate for f64 {
    fn from_coordinate(_dimension: usize, value: i64) -> Result<Self> {
        Ok(value as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrowing_to_i32_fails_outside_its_range() {
        assert_eq!(i32::from_coordinate(0, -5), Ok(-5));
        assert_eq!(
            i32::from_coordinate(2, i64::from(i32::MAX) + 1),
            Err(SpaceError::CoordinateOverflow {
                dimension: 2,
                value: i64::from(i32::MAX) + 1
            })
        );
    }

    #[test]
    fn widening_never_fails() {
        assert_eq!(i64::from_coordinate(0, i64::MAX), Ok(i64::MAX));
        assert_eq!(f64::from_coordinate(0, 42), Ok(42.0));
        assert_eq!(f32::from_coordinate(0, -3), Ok(-3.0));
    }
}
