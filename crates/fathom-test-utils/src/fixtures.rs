//! Reusable grids, fields and executors.
//!
//! - [`unit_grid`]: `4 x 4 x 4` doubly periodic cube with unit spacing.
//! - [`ocean_grid`]: anisotropic basin with thin vertical layers.
//! - [`walled_grid`]: bounded in x, periodic in y.
//! - [`all_executors`]: one instance of every backend.

use fathom_core::Location;
use fathom_exec::{Accelerator, Executor, Serial, Threaded};
use fathom_field::Field;
use fathom_grid::{Grid, Topology};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub fn unit_grid() -> Grid {
    Grid::doubly_periodic([4, 4, 4], [4.0, 4.0, 4.0]).expect("unit grid is valid")
}

/// Coarse ocean basin: 100 km square, 4 km deep, 20 layers.
pub fn ocean_grid() -> Grid {
    Grid::doubly_periodic([12, 10, 20], [100e3, 100e3, 4e3]).expect("ocean grid is valid")
}

pub fn walled_grid() -> Grid {
    Grid::new(
        [6, 5, 4],
        [6.0, 5.0, 4.0],
        [Topology::Bounded, Topology::Periodic, Topology::Bounded],
    )
    .expect("walled grid is valid")
}

/// Field at `location` filled with uniform values in `[-1, 1)` from a
/// seeded ChaCha8 stream, so every run sees the same data.
pub fn random_field(grid: &Grid, location: Location, seed: u64) -> Field {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let data = (0..grid.cell_count())
        .map(|_| rng.random_range(-1.0..1.0))
        .collect();
    Field::from_vec(grid, location, data).expect("length matches grid")
}

/// Serial, a three-thread pool, and a small-work-group accelerator.
///
/// The work group size is chosen so groups straddle k-slab boundaries on
/// the standard grids.
pub fn all_executors() -> Vec<Box<dyn Executor>> {
    vec![
        Box::new(Serial),
        Box::new(Threaded::with_threads(3).expect("thread pool builds")),
        Box::new(Accelerator::new(7, Some(2)).expect("accelerator builds")),
    ]
}

/// Assert `|actual - expected| <= tol`, with a readable message.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected} +/- {tol}, got {actual} (diff {})",
        (actual - expected).abs()
    );
}

/// Assert two fields hold bit-identical values.
#[track_caller]
pub fn assert_fields_identical(a: &Field, b: &Field) {
    assert_eq!(a.extent(), b.extent(), "extents differ");
    for (n, (x, y)) in a.as_slice().iter().zip(b.as_slice()).enumerate() {
        assert_eq!(
            x.to_bits(),
            y.to_bits(),
            "fields differ at offset {n} ({:?}): {x} vs {y}",
            a.extent().index_of(n)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_field_is_deterministic() {
        let grid = unit_grid();
        let a = random_field(&grid, Location::Cell, 42);
        let b = random_field(&grid, Location::Cell, 42);
        let c = random_field(&grid, Location::Cell, 43);
        assert_fields_identical(&a, &b);
        assert_ne!(a.as_slice(), c.as_slice());
        assert!(a.max_abs() <= 1.0);
    }

    #[test]
    fn every_backend_is_present() {
        let archs: Vec<_> = all_executors().iter().map(|e| e.architecture()).collect();
        assert_eq!(archs.len(), 3);
        assert!(archs.windows(2).all(|w| w[0] != w[1]));
    }
}
