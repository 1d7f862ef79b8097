//! The execution strategy trait.

use crate::architecture::Architecture;
use fathom_core::{Extent, Index};

/// A kernel body: maps a 1-based index and the destination's current
/// value to the destination's new value.
///
/// Bodies must not depend on the order in which indices are visited.
/// Receiving the current value lets compositions accumulate into a
/// destination without a second buffer.
pub type Kernel<'a> = dyn Fn(Index, f64) -> f64 + Sync + 'a;

/// Runs a kernel body over every index of a 3-D index space.
///
/// `dest` is laid out in [`Extent`] storage order and must hold exactly
/// `extent.len()` elements. Every element is written exactly once per
/// launch, and each write is independent of every other, so no
/// implementation needs locks or atomics.
///
/// # Thread Safety
///
/// `Send + Sync` is required so a single executor can be shared by all
/// operators of a model, including from inside parallel compositions.
pub trait Executor: Send + Sync + std::fmt::Debug {
    /// The architecture this executor implements.
    fn architecture(&self) -> Architecture;

    /// Evaluate `kernel` at every index of `extent`, writing into `dest`.
    ///
    /// # Panics
    ///
    /// Panics if `dest.len() != extent.len()`. Operators check field shapes
    /// before launching, so this indicates a bug in the caller.
    fn launch(&self, extent: Extent, dest: &mut [f64], kernel: &Kernel<'_>);
}

/// Shared length check for every backend.
pub(crate) fn check_len(extent: Extent, dest: &[f64]) {
    assert_eq!(
        dest.len(),
        extent.len(),
        "destination holds {} elements, extent {}x{}x{} needs {}",
        dest.len(),
        extent.nx,
        extent.ny,
        extent.nz,
        extent.len()
    );
}
