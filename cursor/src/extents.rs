use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Contains, Position, Positions, Result, SpaceError};

/// A closed rectangular region of integer coordinates.
///
/// Every dimension `d` covers `min(d)..=max(d)` and `min(d) <= max(d)` always holds. Extents are
/// immutable after construction and can be shared by any number of [`Position`]s.
///
/// Zero-dimensional extents describe a single point and contain exactly one element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Bounds", into = "Bounds")]
pub struct Extents {
    min: Box<[i64]>,
    max: Box<[i64]>,
    num_elements: i64,
}

/// Serialized form of [`Extents`].
#[derive(Serialize, Deserialize)]
struct Bounds {
    min: Vec<i64>,
    max: Vec<i64>,
}

impl TryFrom<Bounds> for Extents {
    type Error = SpaceError;

    fn try_from(bounds: Bounds) -> Result<Self> {
        Self::new_from_bounds(&bounds.min, &bounds.max)
    }
}

impl From<Extents> for Bounds {
    fn from(extents: Extents) -> Self {
        Self {
            min: extents.min.into_vec(),
            max: extents.max.into_vec(),
        }
    }
}

impl Extents {
    /// Extents starting at 0 in every dimension, `sizes[d]` elements wide.
    ///
    /// # Errors
    ///
    /// Fails if a size is negative or zero.
    pub fn new_from_sizes(sizes: &[i64]) -> Result<Self> {
        let mut max = Vec::with_capacity(sizes.len());
        for (dimension, &size) in sizes.iter().enumerate() {
            if size < 0 {
                return Err(SpaceError::NegativeSize { dimension, size });
            }
            max.push(size - 1);
        }
        Self::new_from_bounds(&vec![0; sizes.len()], &max)
    }

    /// Extents covering `min[d]..=max[d]` in every dimension.
    ///
    /// # Errors
    ///
    /// Fails if the slices differ in length, if `min[d] > max[d]` for some `d`, if a `min` is
    /// `i64::MIN`, or if the number of elements does not fit into an `i64`.
    pub fn new_from_bounds(min: &[i64], max: &[i64]) -> Result<Self> {
        if min.len() != max.len() {
            return Err(SpaceError::MismatchedBounds {
                min_len: min.len(),
                max_len: max.len(),
            });
        }

        let mut num_elements: i64 = 1;
        for (dimension, (&min, &max)) in min.iter().zip(max).enumerate() {
            if min == i64::MIN {
                return Err(SpaceError::UnrepresentableMin { dimension });
            }
            if min > max {
                return Err(SpaceError::InvalidBounds { dimension, min, max });
            }
            let size = i64::try_from(i128::from(max) - i128::from(min) + 1)
                .map_err(|_| SpaceError::TooManyElements)?;
            num_elements = num_elements
                .checked_mul(size)
                .ok_or(SpaceError::TooManyElements)?;
        }

        let extents = Self {
            min: min.into(),
            max: max.into(),
            num_elements,
        };
        debug!("Created extents {extents} with {num_elements} elements");
        Ok(extents)
    }

    pub fn num_dimensions(&self) -> usize {
        self.min.len()
    }

    /// The number of elements along dimension `d`.
    ///
    /// # Panics
    ///
    /// Panics if `d >= self.num_dimensions()`.
    pub fn dimension(&self, d: usize) -> i64 {
        self.max[d] - self.min[d] + 1
    }

    /// # Panics
    ///
    /// Panics if `d >= self.num_dimensions()`.
    pub fn min(&self, d: usize) -> i64 {
        self.min[d]
    }

    /// # Panics
    ///
    /// Panics if `d >= self.num_dimensions()`.
    pub fn max(&self, d: usize) -> i64 {
        self.max[d]
    }

    pub fn real_min(&self, d: usize) -> f64 {
        self.min(d) as f64
    }

    pub fn real_max(&self, d: usize) -> f64 {
        self.max(d) as f64
    }

    pub fn mins(&self) -> &[i64] {
        &self.min
    }

    pub fn maxs(&self) -> &[i64] {
        &self.max
    }

    /// The product of all dimension sizes, 1 for zero-dimensional extents.
    pub fn num_elements(&self) -> i64 {
        self.num_elements
    }

    /// Copy the minimum of every dimension into `buffer`.
    ///
    /// # Errors
    ///
    /// Fails if `buffer` is not exactly `num_dimensions()` long.
    pub fn min_into(&self, buffer: &mut [i64]) -> Result<()> {
        self.check_len(buffer.len())?;
        buffer.copy_from_slice(&self.min);
        Ok(())
    }

    /// Copy the maximum of every dimension into `buffer`.
    ///
    /// # Errors
    ///
    /// Fails if `buffer` is not exactly `num_dimensions()` long.
    pub fn max_into(&self, buffer: &mut [i64]) -> Result<()> {
        self.check_len(buffer.len())?;
        buffer.copy_from_slice(&self.max);
        Ok(())
    }

    /// Copy the size of every dimension into `buffer`.
    ///
    /// # Errors
    ///
    /// Fails if `buffer` is not exactly `num_dimensions()` long.
    pub fn dimensions_into(&self, buffer: &mut [i64]) -> Result<()> {
        self.check_len(buffer.len())?;
        for (d, size) in buffer.iter_mut().enumerate() {
            *size = self.dimension(d);
        }
        Ok(())
    }

    /// A new, invalid position over these extents.
    pub fn create_position(&self) -> Position<'_> {
        Position::new(self)
    }

    /// Every coordinate tuple of these extents in linear-index order.
    pub fn positions(&self) -> Positions<'_> {
        Positions::new(self)
    }

    pub(crate) fn check_len(&self, len: usize) -> Result<()> {
        if len != self.num_dimensions() {
            return Err(SpaceError::DimensionMismatch {
                expected: self.num_dimensions(),
                actual: len,
            });
        }
        Ok(())
    }

    pub(crate) fn check_dimension(&self, dimension: usize) -> Result<()> {
        if dimension >= self.num_dimensions() {
            return Err(SpaceError::DimensionOutOfRange {
                dimension,
                num_dimensions: self.num_dimensions(),
            });
        }
        Ok(())
    }
}

impl<'a> Contains<&'a [i64]> for Extents {
    fn contains(&self, coordinates: &'a [i64]) -> bool {
        coordinates.len() == self.num_dimensions()
            && coordinates
                .iter()
                .zip(self.min.iter().zip(self.max.iter()))
                .all(|(c, (min, max))| min <= c && c <= max)
    }
}

impl fmt::Display for Extents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (d, (min, max)) in self.min.iter().zip(self.max.iter()).enumerate() {
            if d > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{min}..={max}")?;
        }
        write!(f, "]")
    }
}
