//! Fields on a staggered Cartesian grid.
//!
//! A [`Field`] is a dense `f64` array sized to a [`Grid`](fathom_grid::Grid)
//! and tagged with the [`Location`](fathom_core::Location) its values live
//! at. [`TemporaryFields`] is the caller-owned scratch pool operator
//! compositions write their intermediates into.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod field;
pub mod temporary;

pub use field::{Field, FieldView};
pub use temporary::{ScratchParts, TemporaryFields};
