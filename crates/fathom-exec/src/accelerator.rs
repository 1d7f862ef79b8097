//! Data-parallel work-item backend.

use crate::architecture::Architecture;
use crate::config::{build_pool, ConfigError};
use crate::executor::{check_len, Executor, Kernel};
use fathom_core::Extent;
use rayon::prelude::*;
use rayon::ThreadPool;
use std::sync::Arc;

/// Executes kernels as a flat launch of one work-item per destination element.
///
/// Work-items are grouped into work groups of `work_group_size` consecutive
/// global ids. Each work-item decodes its global id into `(i, j, k)` and
/// writes exactly its own element, so groups are scheduled independently
/// on the host pool with no synchronisation between them.
///
/// ```text
/// gid   = group * work_group_size + local
/// (i, j, k) = extent.index_of(gid)
/// ```
#[derive(Clone, Debug)]
pub struct Accelerator {
    work_group_size: usize,
    pool: Option<Arc<ThreadPool>>,
}

impl Accelerator {
    /// Default number of work-items per group.
    pub const DEFAULT_WORK_GROUP_SIZE: usize = 256;

    /// Create an accelerator backend.
    ///
    /// `threads: None` schedules work groups on rayon's global pool.
    pub fn new(work_group_size: usize, threads: Option<usize>) -> Result<Self, ConfigError> {
        if work_group_size == 0 {
            return Err(ConfigError::ZeroWorkGroupSize);
        }
        let pool = threads.map(build_pool).transpose()?;
        Ok(Self {
            work_group_size,
            pool,
        })
    }

    /// Work-items per group.
    pub fn work_group_size(&self) -> usize {
        self.work_group_size
    }

    /// Number of work groups needed to cover `extent`.
    pub fn work_groups(&self, extent: Extent) -> usize {
        extent.len().div_ceil(self.work_group_size)
    }
}

impl Default for Accelerator {
    fn default() -> Self {
        Self {
            work_group_size: Self::DEFAULT_WORK_GROUP_SIZE,
            pool: None,
        }
    }
}

fn dispatch(extent: Extent, dest: &mut [f64], kernel: &Kernel<'_>, work_group_size: usize) {
    dest.par_chunks_mut(work_group_size)
        .enumerate()
        .for_each(|(group, items)| {
            let base = group * work_group_size;
            for (local, item) in items.iter_mut().enumerate() {
                *item = kernel(extent.index_of(base + local), *item);
            }
        });
}

impl Executor for Accelerator {
    fn architecture(&self) -> Architecture {
        Architecture::Accelerator
    }

    fn launch(&self, extent: Extent, dest: &mut [f64], kernel: &Kernel<'_>) {
        check_len(extent, dest);
        let wg = self.work_group_size;
        match &self.pool {
            Some(pool) => pool.install(|| dispatch(extent, dest, kernel, wg)),
            None => dispatch(extent, dest, kernel, wg),
        }
    }
}
