//! 1-based index triples and the index space they range over.

use crate::location::Axis;

/// A 1-based `(i, j, k)` index into a grid-shaped array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    /// Index along x, in `1..=nx`.
    pub i: usize,
    /// Index along y, in `1..=ny`.
    pub j: usize,
    /// Index along z, in `1..=nz`.
    pub k: usize,
}

impl Index {
    /// Create an index triple.
    pub fn new(i: usize, j: usize, k: usize) -> Self {
        Self { i, j, k }
    }

    /// The component along `axis`.
    #[inline]
    pub fn get(self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.i,
            Axis::Y => self.j,
            Axis::Z => self.k,
        }
    }

    /// A copy of this index with the component along `axis` replaced.
    #[inline]
    pub fn with(self, axis: Axis, value: usize) -> Self {
        match axis {
            Axis::X => Self { i: value, ..self },
            Axis::Y => Self { j: value, ..self },
            Axis::Z => Self { k: value, ..self },
        }
    }
}

/// The 3-D index space `[1, nx] × [1, ny] × [1, nz]`.
///
/// Flat storage order has `i` varying fastest and `k` slowest, so each
/// `k`-layer is a contiguous slab of `nx * ny` elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extent {
    /// Cells along x.
    pub nx: usize,
    /// Cells along y.
    pub ny: usize,
    /// Cells along z.
    pub nz: usize,
}

impl Extent {
    /// Create an extent.
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self { nx, ny, nz }
    }

    /// Number of points along `axis`.
    pub fn len_along(self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.nx,
            Axis::Y => self.ny,
            Axis::Z => self.nz,
        }
    }

    /// Total number of points.
    pub fn len(self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Returns `true` if any dimension is zero.
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Elements in one `k`-layer.
    pub fn slab_len(self) -> usize {
        self.nx * self.ny
    }

    /// Returns `true` if `index` lies inside this extent.
    pub fn contains(self, index: Index) -> bool {
        (1..=self.nx).contains(&index.i)
            && (1..=self.ny).contains(&index.j)
            && (1..=self.nz).contains(&index.k)
    }

    /// Flat storage offset of a 1-based index.
    #[inline]
    pub fn offset(self, index: Index) -> usize {
        (index.i - 1) + self.nx * ((index.j - 1) + self.ny * (index.k - 1))
    }

    /// Inverse of [`offset`](Self::offset).
    #[inline]
    pub fn index_of(self, offset: usize) -> Index {
        let slab = self.slab_len();
        let k = offset / slab;
        let rem = offset % slab;
        Index {
            i: rem % self.nx + 1,
            j: rem / self.nx + 1,
            k: k + 1,
        }
    }

    /// Iterate over every index in storage order.
    pub fn indices(self) -> impl Iterator<Item = Index> {
        (1..=self.nz).flat_map(move |k| {
            (1..=self.ny).flat_map(move |j| (1..=self.nx).map(move |i| Index { i, j, k }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn indices_follow_storage_order() {
        let extent = Extent::new(3, 2, 2);
        for (n, index) in extent.indices().enumerate() {
            assert_eq!(extent.offset(index), n);
        }
        assert_eq!(extent.indices().count(), 12);
    }

    #[test]
    fn first_and_last_offsets() {
        let extent = Extent::new(4, 5, 6);
        assert_eq!(extent.offset(Index::new(1, 1, 1)), 0);
        assert_eq!(extent.offset(Index::new(4, 5, 6)), extent.len() - 1);
    }

    #[test]
    fn with_replaces_one_component() {
        let ix = Index::new(1, 2, 3);
        assert_eq!(ix.with(Axis::Y, 7), Index::new(1, 7, 3));
        assert_eq!(ix.with(Axis::Z, 1).get(Axis::Z), 1);
        assert_eq!(ix.get(Axis::X), 1);
    }

    proptest! {
        #[test]
        fn offset_round_trips(nx in 1usize..8, ny in 1usize..8, nz in 1usize..8, seed in 0usize..512) {
            let extent = Extent::new(nx, ny, nz);
            let offset = seed % extent.len();
            let index = extent.index_of(offset);
            prop_assert!(extent.contains(index));
            prop_assert_eq!(extent.offset(index), offset);
        }
    }
}
