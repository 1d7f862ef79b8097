//! Core types for the Fathom discretization kernels.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: grid axes,
//! staggered field locations, 1-based index triples, and the error types
//! returned by grid construction and operator dispatch.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod index;
pub mod location;

pub use error::{GridError, OperatorError};
pub use index::{Extent, Index};
pub use location::{Axis, Location};
