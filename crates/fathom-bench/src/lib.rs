//! Benchmark profiles for the Fathom operators.
//!
//! - [`reference_profile`]: 64x64x32 basin (~131K cells)
//! - [`stress_profile`]: 192x192x48 basin (~1.8M cells)
//! - [`OceanState`]: seeded velocity and tracer fields plus a scratch pool

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fathom_core::{GridError, Location};
use fathom_field::{Field, TemporaryFields};
use fathom_grid::Grid;
use fathom_test_utils::random_field;

/// Reference benchmark grid: 64x64x32 cells over a 1000 km, 4 km deep basin.
pub fn reference_profile() -> Result<Grid, GridError> {
    Grid::doubly_periodic([64, 64, 32], [1.0e6, 1.0e6, 4.0e3])
}

/// Stress benchmark grid: 192x192x48, same basin at 3x horizontal resolution.
pub fn stress_profile() -> Result<Grid, GridError> {
    Grid::doubly_periodic([192, 192, 48], [1.0e6, 1.0e6, 4.0e3])
}

/// Everything one model step feeds to the operators.
pub struct OceanState {
    pub u: Field,
    pub v: Field,
    pub w: Field,
    pub tracer: Field,
    pub scratch: TemporaryFields,
    pub out: Field,
}

impl OceanState {
    /// Seeded random state on `grid`.
    pub fn seeded(grid: &Grid, seed: u64) -> Self {
        Self {
            u: random_field(grid, Location::FaceX, seed),
            v: random_field(grid, Location::FaceY, seed.wrapping_add(1)),
            w: random_field(grid, Location::FaceZ, seed.wrapping_add(2)),
            tracer: random_field(grid, Location::Cell, seed.wrapping_add(3)),
            scratch: TemporaryFields::new(grid),
            out: Field::zeros(grid, Location::Cell),
        }
    }
}
