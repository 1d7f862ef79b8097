//! Finite-volume operators on a staggered Cartesian grid.
//!
//! Every operator takes an [`Executor`](fathom_exec::Executor), a
//! [`Grid`](fathom_grid::Grid), source field(s) and a destination field,
//! and writes only the destination. The operator is selected by the
//! `(source location, destination location)` pair:
//!
//! | operator | source → destination |
//! |---|---|
//! | [`delta_x`], [`average_x`] | `Cell → FaceX`, `FaceX → Cell` |
//! | [`delta_y`], [`average_y`] | `Cell → FaceY`, `FaceY → Cell` |
//! | [`delta_z`], [`average_z`] | `Cell → FaceZ`, `FaceZ → Cell` |
//! | [`divergence`] | `(FaceX, FaceY, FaceZ) → Cell`, `(Cell, Cell, Cell) → Face*` |
//! | [`flux_divergence`] | `(FaceX, FaceY, FaceZ, Cell) → Cell` |
//! | [`laplacian`] | `Cell → Cell` |
//!
//! Any other pairing fails with
//! [`OperatorError::LocationMismatch`](fathom_core::OperatorError).
//!
//! Compositions ([`divergence`], [`flux_divergence`], [`laplacian`]) route
//! their intermediates through a caller-owned
//! [`TemporaryFields`](fathom_field::TemporaryFields) pool.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod average;
mod contract;
pub mod difference;
pub mod divergence;
pub mod flux;
pub mod laplacian;
pub mod operators;
mod stencil;

pub use average::{average, average_x, average_y, average_z};
pub use contract::Direction;
pub use difference::{delta, delta_x, delta_y, delta_z};
pub use divergence::divergence;
pub use flux::flux_divergence;
pub use laplacian::laplacian;
pub use operators::Operators;
