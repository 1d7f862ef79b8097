//! Fork-join multi-threaded backend.

use crate::architecture::Architecture;
use crate::config::{build_pool, ConfigError};
use crate::executor::{check_len, Executor, Kernel};
use fathom_core::{Extent, Index};
use rayon::prelude::*;
use rayon::ThreadPool;
use std::sync::Arc;

/// Executes kernels by forking one task per vertical layer.
///
/// Each `k`-slab is a contiguous run of `nx * ny` elements, so slabs are
/// handed to workers as disjoint mutable chunks and iterated serially in
/// `j`/`i` order inside the task.
#[derive(Clone, Debug, Default)]
pub struct Threaded {
    pool: Option<Arc<ThreadPool>>,
}

impl Threaded {
    /// Run on rayon's global thread pool.
    pub fn global() -> Self {
        Self { pool: None }
    }

    /// Run on a dedicated pool of `threads` workers.
    ///
    /// Returns `Err(ConfigError::ZeroThreads)` if `threads == 0`.
    pub fn with_threads(threads: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            pool: Some(build_pool(threads)?),
        })
    }

    /// Number of worker threads kernels are spread over.
    pub fn threads(&self) -> usize {
        self.pool
            .as_ref()
            .map_or_else(rayon::current_num_threads, |p| p.current_num_threads())
    }
}

fn fill_slabs(extent: Extent, dest: &mut [f64], kernel: &Kernel<'_>) {
    dest.par_chunks_mut(extent.slab_len())
        .enumerate()
        .for_each(|(layer, slab)| {
            let k = layer + 1;
            let mut n = 0;
            for j in 1..=extent.ny {
                for i in 1..=extent.nx {
                    slab[n] = kernel(Index { i, j, k }, slab[n]);
                    n += 1;
                }
            }
        });
}

impl Executor for Threaded {
    fn architecture(&self) -> Architecture {
        Architecture::Threaded
    }

    fn launch(&self, extent: Extent, dest: &mut [f64], kernel: &Kernel<'_>) {
        check_len(extent, dest);
        if dest.is_empty() {
            return;
        }
        match &self.pool {
            Some(pool) => pool.install(|| fill_slabs(extent, dest, kernel)),
            None => fill_slabs(extent, dest, kernel),
        }
    }
}
