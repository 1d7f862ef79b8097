//! Test utilities for Fathom development.
//!
//! Provides standard grids, seeded random fields, the full executor
//! matrix, and float comparison helpers shared by the operator tests and
//! benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    all_executors, assert_close, assert_fields_identical, ocean_grid, random_field, unit_grid,
    walled_grid,
};
