//! Fathom: staggered-grid finite-volume operators for ocean and atmosphere models.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Fathom sub-crates. For most users, adding `fathom` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use fathom::prelude::*;
//!
//! // A 4x4x4 doubly periodic cube with unit spacing.
//! let grid = Grid::doubly_periodic([4, 4, 4], [4.0, 4.0, 4.0]).unwrap();
//! let exec = ExecutionConfig::default().build().unwrap();
//! let ops = Operators::new(&grid, exec.as_ref());
//!
//! // Uniform horizontal flow with no vertical velocity.
//! let mut u = Field::zeros(&grid, Location::FaceX);
//! let mut v = Field::zeros(&grid, Location::FaceY);
//! let w = Field::zeros(&grid, Location::FaceZ);
//! u.fill(1.0);
//! v.fill(1.0);
//!
//! let mut tmp = TemporaryFields::new(&grid);
//! let mut div = Field::zeros(&grid, Location::Cell);
//! ops.divergence(&u, &v, &w, &mut tmp, &mut div).unwrap();
//! assert_eq!(div.max_abs(), 0.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `fathom-core` | Indices, extents, locations, error types |
//! | [`grid`] | `fathom-grid` | Grid geometry, topology, periodic wrapping |
//! | [`exec`] | `fathom-exec` | Executors and execution configuration |
//! | [`field`] | `fathom-field` | Fields and the temporary field pool |
//! | [`ops`] | `fathom-ops` | Differences, averages, divergence, flux-divergence |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Indices, extents, staggered locations, and errors (`fathom-core`).
pub use fathom_core as types;

/// Grid geometry and axis topology (`fathom-grid`).
///
/// [`grid::Grid`] owns cell counts, spacings, face areas and cell volume;
/// [`grid::next`] and [`grid::prev`] implement periodic wrapping.
pub use fathom_grid as grid;

/// Architecture-neutral kernel execution (`fathom-exec`).
///
/// Backends: [`exec::Serial`], [`exec::Threaded`], [`exec::Accelerator`].
/// Pick one at runtime with [`exec::ExecutionConfig`].
pub use fathom_exec as exec;

/// Location-tagged fields and scratch storage (`fathom-field`).
pub use fathom_field as field;

/// Finite-volume operators (`fathom-ops`).
pub use fathom_ops as ops;

/// Common imports for typical Fathom usage.
///
/// ```rust
/// use fathom::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use fathom_core::{Axis, Extent, Index, Location};

    // Errors
    pub use fathom_core::{GridError, OperatorError};
    pub use fathom_exec::ConfigError;

    // Grid
    pub use fathom_grid::{Grid, Topology};

    // Execution
    pub use fathom_exec::{Architecture, ExecutionConfig, Executor};

    // Fields
    pub use fathom_field::{Field, TemporaryFields};

    // Operators
    pub use fathom_ops::Operators;
}
