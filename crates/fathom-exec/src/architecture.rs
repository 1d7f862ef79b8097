//! The architecture tag selecting an execution backend.

use crate::config::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Which backend executes kernels for the lifetime of a model.
///
/// # Examples
///
/// ```
/// use fathom_exec::Architecture;
///
/// let arch: Architecture = "gpu".parse().unwrap();
/// assert_eq!(arch, Architecture::Accelerator);
/// assert!("fpga".parse::<Architecture>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Architecture {
    /// Single-threaded nested loops.
    #[default]
    Serial,
    /// Fork-join multi-threading over vertical layers.
    Threaded,
    /// Data-parallel dispatch with one work-item per destination element.
    Accelerator,
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serial => write!(f, "serial"),
            Self::Threaded => write!(f, "threaded"),
            Self::Accelerator => write!(f, "accelerator"),
        }
    }
}

impl FromStr for Architecture {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "serial" => Ok(Self::Serial),
            "threaded" | "cpu" => Ok(Self::Threaded),
            "accelerator" | "gpu" => Ok(Self::Accelerator),
            _ => Err(ConfigError::UnknownArchitecture { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_aliases_and_case() {
        assert_eq!("Serial".parse::<Architecture>(), Ok(Architecture::Serial));
        assert_eq!(" cpu ".parse::<Architecture>(), Ok(Architecture::Threaded));
        assert_eq!("GPU".parse::<Architecture>(), Ok(Architecture::Accelerator));
    }

    #[test]
    fn display_round_trips() {
        for arch in [Architecture::Serial, Architecture::Threaded, Architecture::Accelerator] {
            assert_eq!(arch.to_string().parse::<Architecture>(), Ok(arch));
        }
    }

    #[test]
    fn unknown_name_is_reported() {
        assert_eq!(
            "tpu".parse::<Architecture>(),
            Err(ConfigError::UnknownArchitecture { name: "tpu".into() })
        );
    }
}
