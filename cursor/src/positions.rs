use std::iter::FusedIterator;

use crate::{Extents, Position};

/// Iterator produced by [`Extents::positions`].
///
/// Walks a [`Position`] forward from its invalid state and yields a copy of the coordinates of
/// every element in linear-index order.
#[derive(Debug, Clone)]
pub struct Positions<'a> {
    position: Position<'a>,
    remaining: i64,
}

impl<'a> Positions<'a> {
    pub(crate) fn new(extents: &'a Extents) -> Self {
        Self {
            position: extents.create_position(),
            remaining: extents.num_elements(),
        }
    }
}

impl Iterator for Positions<'_> {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.position.fwd().ok()?;
        self.remaining -= 1;
        self.position.coordinates().ok().map(<[i64]>::to_vec)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

// Exact as long as the element count fits `usize`, which holds on 64-bit targets.
impl ExactSizeIterator for Positions<'_> {}

impl FusedIterator for Positions<'_> {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::Extents;

    #[test]
    fn yields_every_coordinate_with_dimension_0_fastest() {
        let extents = Extents::new_from_bounds(&[4, 3, 2, 1], &[8, 6, 4, 2]).unwrap();

        // `multi_cartesian_product` varies the last list fastest, so build it on reversed
        // dimensions.
        let expected: Vec<Vec<i64>> = (0..extents.num_dimensions())
            .rev()
            .map(|d| extents.min(d)..=extents.max(d))
            .multi_cartesian_product()
            .map(|mut coordinates| {
                coordinates.reverse();
                coordinates
            })
            .collect();

        assert_eq!(expected.len(), 120);
        assert_eq!(extents.positions().collect_vec(), expected);
    }

    #[test]
    fn reports_its_exact_length() {
        let extents = Extents::new_from_sizes(&[2, 3, 4]).unwrap();
        let mut positions = extents.positions();
        assert_eq!(positions.len(), 24);
        positions.next();
        positions.next();
        assert_eq!(positions.len(), 22);
        assert_eq!(positions.count(), 22);
    }

    #[test]
    fn zero_dimensions_yield_one_empty_coordinate() {
        let extents = Extents::new_from_sizes(&[]).unwrap();
        assert_eq!(extents.positions().collect_vec(), vec![Vec::<i64>::new()]);
    }

    #[test]
    fn is_fused() {
        let extents = Extents::new_from_sizes(&[2]).unwrap();
        let mut positions = extents.positions();
        assert_eq!(positions.next(), Some(vec![0]));
        assert_eq!(positions.next(), Some(vec![1]));
        assert_eq!(positions.next(), None);
        assert_eq!(positions.next(), None);
    }
}
