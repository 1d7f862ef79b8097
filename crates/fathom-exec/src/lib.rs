//! Architecture-neutral kernel execution for Fathom.
//!
//! Every operator in the workspace is written once as a kernel body: a
//! function of a 1-based [`Index`](fathom_core::Index) and the current
//! destination value. An [`Executor`] runs that body over a 3-D index space
//! on one architecture:
//!
//! - [`Serial`]: nested loops on the calling thread
//! - [`Threaded`]: fork-join over contiguous `k`-slabs
//! - [`Accelerator`]: data-parallel dispatch, one work-item per element
//!
//! The architecture is chosen once at startup through [`ExecutionConfig`]
//! and passed explicitly to every operator. Kernel bodies have no
//! cross-iteration dependencies, so all backends produce identical results.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod accelerator;
pub mod architecture;
pub mod config;
pub mod executor;
pub mod serial;
pub mod threaded;

pub use accelerator::Accelerator;
pub use architecture::Architecture;
pub use config::{ConfigError, ExecutionConfig};
pub use executor::{Executor, Kernel};
pub use serial::Serial;
pub use threaded::Threaded;
