use std::fmt;

use log::trace;

use crate::{Contains, Coordinate, Direction, Extents, Result, SpaceError};

/// Marks the coordinates of an invalid position. Extents reject it as a minimum, so it never
/// passes a bounds check.
const INVALID_COORDINATE: i64 = i64::MIN;

/// A cursor over an [`Extents`].
///
/// A position is either invalid (not yet positioned) or valid, in which case every coordinate lies
/// within the bounds of its extents. New positions start out invalid. From there, [`fwd`] moves to
/// the first and [`bck`] to the last position, so a fresh or [`reset`] position can be stepped
/// through all elements without a separate start marker.
///
/// Linear indices are mixed-radix encoded: dimension 0 varies fastest.
///
/// [`fwd`]: Self::fwd
/// [`bck`]: Self::bck
/// [`reset`]: Self::reset
#[derive(Debug, Clone)]
pub struct Position<'a> {
    extents: &'a Extents,
    // All `INVALID_COORDINATE` after construction and `reset()`, but may be partially set while
    // `valid` is false.
    coordinates: Vec<i64>,
    valid: bool,
}

impl<'a> Position<'a> {
    pub(crate) fn new(extents: &'a Extents) -> Self {
        Self {
            extents,
            coordinates: vec![INVALID_COORDINATE; extents.num_dimensions()],
            valid: false,
        }
    }

    pub fn extents(&self) -> &'a Extents {
        self.extents
    }

    pub fn num_dimensions(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Invalidate the position.
    pub fn reset(&mut self) {
        self.coordinates.fill(INVALID_COORDINATE);
        self.valid = false;
    }

    pub fn first(&mut self) {
        self.coordinates.copy_from_slice(self.extents.mins());
        self.valid = true;
    }

    pub fn last(&mut self) {
        self.coordinates.copy_from_slice(self.extents.maxs());
        self.valid = true;
    }

    /// Whether [`fwd`](Self::fwd) would succeed.
    ///
    /// An invalid position counts as being before the first one. Zero-dimensional extents have
    /// nothing to traverse.
    pub fn has_next(&self) -> bool {
        if !self.valid {
            return self.num_dimensions() > 0;
        }
        self.coordinates
            .iter()
            .zip(self.extents.maxs())
            .any(|(coordinate, max)| coordinate < max)
    }

    /// Whether [`bck`](Self::bck) would succeed.
    ///
    /// An invalid position counts as being behind the last one.
    pub fn has_prev(&self) -> bool {
        if !self.valid {
            return self.num_dimensions() > 0;
        }
        self.coordinates
            .iter()
            .zip(self.extents.mins())
            .any(|(coordinate, min)| coordinate > min)
    }

    /// Step to the next position in linear-index order, or to the first position if invalid.
    ///
    /// # Errors
    ///
    /// Fails at the last position, which it stays at.
    pub fn fwd(&mut self) -> Result<()> {
        if !self.valid {
            self.first();
            return Ok(());
        }
        if !self.has_next() {
            trace!("Stepped forward from the last position of {}", self.extents);
            self.last();
            return Err(SpaceError::Exhausted {
                direction: Direction::Forward,
            });
        }

        let extents = self.extents;
        for (d, coordinate) in self.coordinates.iter_mut().enumerate() {
            if *coordinate < extents.max(d) {
                *coordinate += 1;
                break;
            }
            *coordinate = extents.min(d);
        }
        Ok(())
    }

    /// Step to the previous position in linear-index order, or to the last position if invalid.
    ///
    /// # Errors
    ///
    /// Fails at the first position, which it stays at.
    pub fn bck(&mut self) -> Result<()> {
        if !self.valid {
            self.last();
            return Ok(());
        }
        if !self.has_prev() {
            trace!("Stepped backward from the first position of {}", self.extents);
            self.first();
            return Err(SpaceError::Exhausted {
                direction: Direction::Backward,
            });
        }

        let extents = self.extents;
        for (d, coordinate) in self.coordinates.iter_mut().enumerate() {
            if *coordinate > extents.min(d) {
                *coordinate -= 1;
                break;
            }
            *coordinate = extents.max(d);
        }
        Ok(())
    }

    /// Increment the coordinate of dimension `d` without carrying into other dimensions.
    ///
    /// # Errors
    ///
    /// Fails if the position is invalid or the coordinate would leave its bounds.
    pub fn fwd_dim(&mut self, d: usize) -> Result<()> {
        self.move_dim(d, 1)
    }

    /// Decrement the coordinate of dimension `d` without carrying into other dimensions.
    ///
    /// # Errors
    ///
    /// Fails if the position is invalid or the coordinate would leave its bounds.
    pub fn bck_dim(&mut self, d: usize) -> Result<()> {
        self.move_dim(d, -1)
    }

    /// Move `steps` positions forward in linear-index order. An invalid position starts from the
    /// first one.
    ///
    /// # Errors
    ///
    /// Fails without moving if the resulting index is outside of the extents.
    pub fn jump_fwd(&mut self, steps: i64) -> Result<()> {
        let start = if self.valid { self.get_index()? } else { 0 };
        self.jump_to(i128::from(start) + i128::from(steps))
    }

    /// Move `steps` positions backward in linear-index order. An invalid position starts from the
    /// last one.
    ///
    /// # Errors
    ///
    /// Fails without moving if the resulting index is outside of the extents.
    pub fn jump_bck(&mut self, steps: i64) -> Result<()> {
        let start = if self.valid {
            self.get_index()?
        } else {
            self.extents.num_elements() - 1
        };
        self.jump_to(i128::from(start) - i128::from(steps))
    }

    fn jump_to(&mut self, index: i128) -> Result<()> {
        let index = i64::try_from(index).map_err(|_| self.index_out_of_range(index))?;
        self.set_index(index)
    }

    /// Add `delta` to the coordinate of dimension `d`.
    ///
    /// # Errors
    ///
    /// Fails without moving if the position is invalid or the coordinate would leave its bounds.
    pub fn move_dim(&mut self, d: usize, delta: i64) -> Result<()> {
        self.extents.check_dimension(d)?;
        self.ensure_valid()?;
        let moved = i128::from(self.coordinates[d]) + i128::from(delta);
        self.coordinates[d] = self.checked_coordinate(d, moved)?;
        Ok(())
    }

    /// Add `deltas[d]` to the coordinate of every dimension `d`.
    ///
    /// All deltas are checked before any coordinate changes.
    ///
    /// # Errors
    ///
    /// Fails without moving if the position is invalid, `deltas` does not match the number of
    /// dimensions, or any coordinate would leave its bounds.
    pub fn move_by(&mut self, deltas: &[i64]) -> Result<()> {
        self.extents.check_len(deltas.len())?;
        self.ensure_valid()?;
        let moved = self
            .coordinates
            .iter()
            .zip(deltas)
            .enumerate()
            .map(|(d, (&coordinate, &delta))| {
                self.checked_coordinate(d, i128::from(coordinate) + i128::from(delta))
            })
            .collect::<Result<Vec<_>>>()?;
        self.coordinates = moved;
        Ok(())
    }

    /// Move by the coordinates of `other`, interpreted as deltas.
    ///
    /// # Errors
    ///
    /// Fails if `other` is invalid, or for the same reasons [`move_by`](Self::move_by) does.
    pub fn move_by_position(&mut self, other: &Position<'_>) -> Result<()> {
        self.move_by(other.coordinates()?)
    }

    /// Set the coordinate of dimension `d`.
    ///
    /// An invalid position becomes valid as soon as all of its coordinates are within bounds.
    ///
    /// # Errors
    ///
    /// Fails without changes if `value` is outside of the bounds of `d`.
    pub fn set_position(&mut self, d: usize, value: i64) -> Result<()> {
        self.extents.check_dimension(d)?;
        let value = self.checked_coordinate(d, value.into())?;
        self.coordinates[d] = value;
        if !self.valid {
            self.valid = self.extents.contains(&self.coordinates[..]);
        }
        Ok(())
    }

    /// Set the coordinates of all dimensions, validating the position.
    ///
    /// # Errors
    ///
    /// Fails without changes if `values` does not match the number of dimensions or a value is out
    /// of bounds. The first offending dimension is reported.
    pub fn set_positions(&mut self, values: &[i64]) -> Result<()> {
        self.extents.check_len(values.len())?;
        for (d, &value) in values.iter().enumerate() {
            self.checked_coordinate(d, value.into())?;
        }
        self.coordinates.copy_from_slice(values);
        self.valid = true;
        Ok(())
    }

    /// Take over the coordinates of `other`.
    ///
    /// # Errors
    ///
    /// Fails if `other` is invalid, or for the same reasons [`set_positions`](Self::set_positions)
    /// does.
    pub fn set_from(&mut self, other: &Position<'_>) -> Result<()> {
        self.set_positions(other.coordinates()?)
    }

    /// Move to the position with the linear index `index`.
    ///
    /// # Errors
    ///
    /// Fails without changes if `index` is outside of `0..num_elements`.
    pub fn set_index(&mut self, index: i64) -> Result<()> {
        if index < 0 || index >= self.extents.num_elements() {
            return Err(self.index_out_of_range(index.into()));
        }

        let mut rest = index;
        for (d, coordinate) in self.coordinates.iter_mut().enumerate() {
            let size = self.extents.dimension(d);
            *coordinate = rest % size + self.extents.min(d);
            rest /= size;
        }
        self.valid = true;
        Ok(())
    }

    /// The linear index of the position.
    ///
    /// # Errors
    ///
    /// Fails if the position is invalid.
    pub fn get_index(&self) -> Result<i64> {
        self.ensure_valid()?;
        let mut index = 0;
        let mut offset = 1;
        for (d, &coordinate) in self.coordinates.iter().enumerate() {
            index += (coordinate - self.extents.min(d)) * offset;
            offset *= self.extents.dimension(d);
        }
        Ok(index)
    }

    /// All coordinates of a valid position.
    ///
    /// # Errors
    ///
    /// Fails if the position is invalid.
    pub fn coordinates(&self) -> Result<&[i64]> {
        self.ensure_valid()?;
        Ok(&self.coordinates)
    }

    /// The coordinate of dimension `d`, converted to `T`.
    ///
    /// # Errors
    ///
    /// Fails if the position is invalid, `d` is out of range, or `T` can not hold the coordinate.
    pub fn position<T: Coordinate>(&self, d: usize) -> Result<T> {
        self.ensure_valid()?;
        self.extents.check_dimension(d)?;
        T::from_coordinate(d, self.coordinates[d])
    }

    pub fn int_position(&self, d: usize) -> Result<i32> {
        self.position(d)
    }

    pub fn long_position(&self, d: usize) -> Result<i64> {
        self.position(d)
    }

    pub fn float_position(&self, d: usize) -> Result<f32> {
        self.position(d)
    }

    pub fn double_position(&self, d: usize) -> Result<f64> {
        self.position(d)
    }

    /// Write all coordinates into `buffer`.
    ///
    /// # Errors
    ///
    /// Fails if the position is invalid or `buffer` does not match the number of dimensions. A
    /// coordinate that does not fit `T` fails too, leaving the preceding ones written.
    pub fn localize<T: Coordinate>(&self, buffer: &mut [T]) -> Result<()> {
        self.ensure_valid()?;
        self.extents.check_len(buffer.len())?;
        for (d, (target, &coordinate)) in buffer.iter_mut().zip(&self.coordinates).enumerate() {
            *target = T::from_coordinate(d, coordinate)?;
        }
        Ok(())
    }

    fn ensure_valid(&self) -> Result<()> {
        if !self.valid {
            return Err(SpaceError::InvalidPosition);
        }
        Ok(())
    }

    fn checked_coordinate(&self, d: usize, value: i128) -> Result<i64> {
        let (min, max) = (self.extents.min(d), self.extents.max(d));
        if value < min.into() || value > max.into() {
            return Err(SpaceError::CoordinateOutOfBounds {
                dimension: d,
                value,
                min,
                max,
            });
        }
        // In bounds, so it fits.
        Ok(value as i64)
    }

    fn index_out_of_range(&self, index: i128) -> SpaceError {
        SpaceError::IndexOutOfRange {
            index,
            num_elements: self.extents.num_elements(),
        }
    }
}

impl fmt::Display for Position<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return write!(f, "(invalid)");
        }
        write!(f, "(")?;
        for (d, coordinate) in self.coordinates.iter().enumerate() {
            if d > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{coordinate}")?;
        }
        write!(f, ")")
    }
}
