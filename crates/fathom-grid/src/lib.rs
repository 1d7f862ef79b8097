//! Grid geometry for Fathom discretization kernels.
//!
//! This crate defines [`Grid`], the immutable description of a regular
//! three-dimensional Cartesian domain, together with the per-axis
//! [`Topology`] and the periodic wrap helpers [`next`] and [`prev`] that
//! every stencil is built on.
//!
//! # Conventions
//!
//! - Indices are 1-based along every axis.
//! - `z` is vertical, `k = 1` is the surface layer, and the vertical axis is
//!   always [`Topology::Bounded`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod topology;
pub mod wrap;

pub use grid::Grid;
pub use topology::Topology;
pub use wrap::{next, prev};
