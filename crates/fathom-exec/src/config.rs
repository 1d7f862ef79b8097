//! Execution configuration, validation, and error types.
//!
//! [`ExecutionConfig`] is resolved once at model construction into a
//! boxed [`Executor`]; that single value is then passed to every operator
//! for the lifetime of the model.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, warn};

use crate::accelerator::Accelerator;
use crate::architecture::Architecture;
use crate::executor::Executor;
use crate::serial::Serial;
use crate::threaded::Threaded;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while resolving an [`ExecutionConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// An explicit thread count of zero was requested.
    ZeroThreads,
    /// Work groups must hold at least one work-item.
    ZeroWorkGroupSize,
    /// An architecture name did not match any backend.
    UnknownArchitecture {
        /// The unrecognised name.
        name: String,
    },
    /// The dedicated worker pool could not be created.
    ThreadPoolBuild {
        /// Description from the thread pool builder.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroThreads => write!(f, "thread count must be at least 1"),
            Self::ZeroWorkGroupSize => write!(f, "work_group_size must be at least 1"),
            Self::UnknownArchitecture { name } => {
                write!(
                    f,
                    "unknown architecture '{name}' (expected serial, threaded, or accelerator)"
                )
            }
            Self::ThreadPoolBuild { reason } => write!(f, "thread pool build failed: {reason}"),
        }
    }
}

impl Error for ConfigError {}

pub(crate) fn build_pool(threads: usize) -> Result<Arc<ThreadPool>, ConfigError> {
    if threads == 0 {
        return Err(ConfigError::ZeroThreads);
    }
    ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|n| format!("fathom-worker-{n}"))
        .build()
        .map(Arc::new)
        .map_err(|e| ConfigError::ThreadPoolBuild {
            reason: e.to_string(),
        })
}

// ── ExecutionConfig ────────────────────────────────────────────────

/// Selects and parameterises the execution backend.
///
/// # Examples
///
/// ```
/// use fathom_exec::{Architecture, ExecutionConfig};
///
/// let exec = ExecutionConfig {
///     architecture: Architecture::Accelerator,
///     ..Default::default()
/// }
/// .build()
/// .unwrap();
/// assert_eq!(exec.architecture(), Architecture::Accelerator);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Backend to run kernels on. Default: [`Architecture::Serial`].
    pub architecture: Architecture,
    /// Worker threads for the threaded and accelerator backends.
    /// `None` uses rayon's global pool. Ignored by the serial backend.
    pub threads: Option<usize>,
    /// Work-items per work group for the accelerator backend. Default: 256.
    pub work_group_size: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            architecture: Architecture::Serial,
            threads: None,
            work_group_size: Accelerator::DEFAULT_WORK_GROUP_SIZE,
        }
    }
}

impl ExecutionConfig {
    /// Configuration for `architecture` with all other settings at default.
    pub fn for_architecture(architecture: Architecture) -> Self {
        Self {
            architecture,
            ..Self::default()
        }
    }

    /// Check structural invariants without allocating a thread pool.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads == Some(0) {
            return Err(ConfigError::ZeroThreads);
        }
        if self.work_group_size == 0 {
            return Err(ConfigError::ZeroWorkGroupSize);
        }
        Ok(())
    }

    /// Validate and construct the executor for this configuration.
    pub fn build(&self) -> Result<Box<dyn Executor>, ConfigError> {
        self.validate()?;
        let exec: Box<dyn Executor> = match self.architecture {
            Architecture::Serial => {
                if let Some(threads) = self.threads {
                    warn!(threads, "thread count ignored by the serial backend");
                }
                Box::new(Serial)
            }
            Architecture::Threaded => match self.threads {
                Some(n) => Box::new(Threaded::with_threads(n)?),
                None => Box::new(Threaded::global()),
            },
            Architecture::Accelerator => {
                Box::new(Accelerator::new(self.work_group_size, self.threads)?)
            }
        };
        debug!(
            architecture = %self.architecture,
            threads = ?self.threads,
            work_group_size = self.work_group_size,
            "execution backend resolved"
        );
        Ok(exec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_serial() {
        let cfg = ExecutionConfig::default();
        assert_eq!(cfg.architecture, Architecture::Serial);
        assert_eq!(cfg.build().unwrap().architecture(), Architecture::Serial);
    }

    #[test]
    fn every_architecture_builds() {
        for arch in [
            Architecture::Serial,
            Architecture::Threaded,
            Architecture::Accelerator,
        ] {
            let exec = ExecutionConfig::for_architecture(arch).build().unwrap();
            assert_eq!(exec.architecture(), arch);
        }
    }

    #[test]
    fn explicit_threads_build_dedicated_pools() {
        for arch in [Architecture::Threaded, Architecture::Accelerator] {
            let cfg = ExecutionConfig {
                architecture: arch,
                threads: Some(2),
                ..Default::default()
            };
            assert_eq!(cfg.build().unwrap().architecture(), arch);
        }
    }

    #[test]
    fn zero_threads_rejected() {
        let cfg = ExecutionConfig {
            architecture: Architecture::Threaded,
            threads: Some(0),
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroThreads));
        assert_eq!(cfg.build().unwrap_err(), ConfigError::ZeroThreads);
    }

    #[test]
    fn zero_work_group_rejected() {
        let cfg = ExecutionConfig {
            architecture: Architecture::Accelerator,
            work_group_size: 0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroWorkGroupSize));
    }

    #[test]
    fn serial_ignores_thread_count() {
        let cfg = ExecutionConfig {
            threads: Some(8),
            ..Default::default()
        };
        assert_eq!(cfg.build().unwrap().architecture(), Architecture::Serial);
    }
}
