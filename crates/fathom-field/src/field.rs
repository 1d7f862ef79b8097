//! Location-tagged dense field storage.

use fathom_core::{Extent, Index, Location, OperatorError};
use fathom_grid::Grid;

/// A dense 3-D array of values anchored to a grid at one staggered location.
///
/// Storage is flat with `i` fastest and `k` slowest (see [`Extent`]).
/// Every location holds `nx * ny * nz` values: face index `i` is the face
/// between cells `i - 1` and `i`, so on a periodic axis face `1` is shared
/// with the far end of the domain.
///
/// # Examples
///
/// ```
/// use fathom_core::{Index, Location};
/// use fathom_field::Field;
/// use fathom_grid::Grid;
///
/// let grid = Grid::doubly_periodic([4, 4, 4], [4.0, 4.0, 4.0]).unwrap();
/// let mut f = Field::zeros(&grid, Location::Cell);
/// f.set(|ix| ix.i as f64);
/// assert_eq!(f.get(Index::new(3, 1, 2)), 3.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    location: Location,
    extent: Extent,
    data: Vec<f64>,
}

impl Field {
    /// A zero-initialised field on `grid` at `location`.
    pub fn zeros(grid: &Grid, location: Location) -> Self {
        let extent = grid.extent();
        Self {
            location,
            extent,
            data: vec![0.0; extent.len()],
        }
    }

    /// Wrap existing data, laid out in storage order.
    ///
    /// Returns `Err(OperatorError::LengthMismatch)` if `data` does not hold
    /// exactly one value per grid cell.
    pub fn from_vec(grid: &Grid, location: Location, data: Vec<f64>) -> Result<Self, OperatorError> {
        let extent = grid.extent();
        if data.len() != extent.len() {
            return Err(OperatorError::LengthMismatch {
                operator: "Field::from_vec",
                argument: "data",
                expected: extent.len(),
                found: data.len(),
            });
        }
        Ok(Self {
            location,
            extent,
            data,
        })
    }

    /// Where this field's values live.
    pub fn location(&self) -> Location {
        self.location
    }

    /// The index space of this field.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Value at a 1-based index.
    ///
    /// # Panics
    ///
    /// Panics if `index` lies outside the field.
    pub fn get(&self, index: Index) -> f64 {
        assert!(
            self.extent.contains(index),
            "index {index:?} outside extent {:?}",
            self.extent
        );
        self.data[self.extent.offset(index)]
    }

    /// Overwrite the value at a 1-based index.
    ///
    /// # Panics
    ///
    /// Panics if `index` lies outside the field.
    pub fn set_at(&mut self, index: Index, value: f64) {
        assert!(
            self.extent.contains(index),
            "index {index:?} outside extent {:?}",
            self.extent
        );
        let offset = self.extent.offset(index);
        self.data[offset] = value;
    }

    /// Set every value from a function of its index.
    pub fn set(&mut self, f: impl Fn(Index) -> f64) {
        let extent = self.extent;
        for (value, index) in self.data.iter_mut().zip(extent.indices()) {
            *value = f(index);
        }
    }

    /// Set every value to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Copy values (not location) from another field of the same extent.
    ///
    /// Returns `Err(OperatorError::ShapeMismatch)` if the extents differ.
    pub fn copy_from(&mut self, other: &Field) -> Result<(), OperatorError> {
        if other.extent != self.extent {
            return Err(OperatorError::ShapeMismatch {
                operator: "Field::copy_from",
                argument: "other",
                expected: self.extent,
                found: other.extent,
            });
        }
        self.data.copy_from_slice(&other.data);
        Ok(())
    }

    /// Flat read-only storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Flat mutable storage, for handing to an executor.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// A cheap, copyable read view for use inside kernel bodies.
    pub fn view(&self) -> FieldView<'_> {
        FieldView {
            data: &self.data,
            extent: self.extent,
        }
    }

    /// Plain sum of all values.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Volume-weighted sum of all values over `grid`.
    pub fn integral(&self, grid: &Grid) -> f64 {
        self.sum() * grid.volume()
    }

    /// Largest absolute value, or `0.0` for an empty field.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }
}

/// Read-only view of a field's values, captured by kernel bodies.
#[derive(Clone, Copy, Debug)]
pub struct FieldView<'a> {
    data: &'a [f64],
    extent: Extent,
}

impl FieldView<'_> {
    /// Value at a 1-based index.
    #[inline]
    pub fn at(&self, index: Index) -> f64 {
        self.data[self.extent.offset(index)]
    }

    /// The index space of the viewed field.
    pub fn extent(&self) -> Extent {
        self.extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid() -> Grid {
        Grid::doubly_periodic([4, 3, 2], [4.0, 3.0, 2.0]).unwrap()
    }

    #[test]
    fn zeros_match_grid() {
        let f = Field::zeros(&grid(), Location::FaceY);
        assert_eq!(f.location(), Location::FaceY);
        assert_eq!(f.extent(), Extent::new(4, 3, 2));
        assert_eq!(f.as_slice().len(), 24);
        assert!(f.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn from_vec_checks_length() {
        let g = grid();
        assert!(Field::from_vec(&g, Location::Cell, vec![1.0; 24]).is_ok());
        let err = Field::from_vec(&g, Location::Cell, vec![1.0; 23]).unwrap_err();
        assert_eq!(
            err,
            OperatorError::LengthMismatch {
                operator: "Field::from_vec",
                argument: "data",
                expected: 24,
                found: 23,
            }
        );
        assert!(!err.to_string().contains("23x1x1"));
    }

    #[test]
    fn set_get_and_view_agree() {
        let mut f = Field::zeros(&grid(), Location::Cell);
        f.set(|ix| (100 * ix.i + 10 * ix.j + ix.k) as f64);
        let view = f.view();
        for ix in f.extent().indices() {
            assert_eq!(f.get(ix), view.at(ix));
        }
        assert_eq!(f.get(Index::new(4, 3, 2)), 432.0);

        f.set_at(Index::new(1, 1, 1), -5.0);
        assert_eq!(f.get(Index::new(1, 1, 1)), -5.0);
        assert_eq!(f.max_abs(), 432.0);
    }

    #[test]
    #[should_panic(expected = "outside extent")]
    fn get_out_of_range_panics() {
        Field::zeros(&grid(), Location::Cell).get(Index::new(5, 1, 1));
    }

    #[test]
    fn integral_weights_by_volume() {
        let g = Grid::doubly_periodic([2, 2, 2], [1.0, 1.0, 1.0]).unwrap();
        let mut f = Field::zeros(&g, Location::Cell);
        f.fill(2.0);
        assert_eq!(f.sum(), 16.0);
        assert_eq!(f.integral(&g), 2.0);
    }

    #[test]
    fn copy_from_keeps_location() {
        let g = grid();
        let mut src = Field::zeros(&g, Location::Cell);
        src.fill(3.0);
        let mut dst = Field::zeros(&g, Location::FaceX);
        dst.copy_from(&src).unwrap();
        assert_eq!(dst.location(), Location::FaceX);
        assert_eq!(dst.sum(), src.sum());

        let other = Grid::doubly_periodic([2, 2, 2], [1.0, 1.0, 1.0]).unwrap();
        let mut small = Field::zeros(&other, Location::Cell);
        assert!(small.copy_from(&src).is_err());
    }

    proptest! {
        #[test]
        fn set_get_and_view_agree_on_any_extent(
            nx in 1usize..7,
            ny in 1usize..7,
            nz in 1usize..7,
            scale in -1e3f64..1e3,
        ) {
            let g = Grid::doubly_periodic([nx, ny, nz], [1.0, 1.0, 1.0]).unwrap();
            let mut f = Field::zeros(&g, Location::FaceZ);
            let value = |ix: Index| scale * (ix.i + 10 * ix.j + 100 * ix.k) as f64;
            f.set(value);
            let view = f.view();
            for (n, ix) in g.extent().indices().enumerate() {
                prop_assert_eq!(f.get(ix), value(ix));
                prop_assert_eq!(view.at(ix), value(ix));
                prop_assert_eq!(f.as_slice()[n], value(ix));
            }
        }
    }
}
