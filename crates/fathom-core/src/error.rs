//! Error types for grid construction and operator dispatch.
//!
//! Every failure in the kernel layer is a precondition violation: given
//! valid inputs each operator is a total, deterministic function. Errors
//! are returned synchronously to the immediate caller and never retried.

use crate::index::Extent;
use crate::location::Location;
use smallvec::SmallVec;
use std::error::Error;
use std::fmt;

/// Errors from grid construction.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// A cell count or domain extent is unusable.
    InvalidGridSpec {
        /// Which parameter was rejected and why.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGridSpec { reason } => write!(f, "invalid grid spec: {reason}"),
        }
    }
}

impl Error for GridError {}

/// Errors from operator entry points and field construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OperatorError {
    /// A field argument sits at a location the operator does not accept.
    LocationMismatch {
        /// Name of the operator that rejected the argument.
        operator: &'static str,
        /// Name of the offending argument.
        argument: &'static str,
        /// Locations the operator accepts for this argument.
        expected: SmallVec<[Location; 4]>,
        /// Location of the field actually passed.
        found: Location,
    },
    /// A field's extent disagrees with the grid it is used with.
    ShapeMismatch {
        /// Name of the operator (or constructor) that detected the mismatch.
        operator: &'static str,
        /// Name of the offending argument.
        argument: &'static str,
        /// Extent required by the grid.
        expected: Extent,
        /// Extent of the field actually passed.
        found: Extent,
    },
    /// Raw storage handed to a field constructor has the wrong length.
    LengthMismatch {
        /// Name of the constructor that rejected the data.
        operator: &'static str,
        /// Name of the offending argument.
        argument: &'static str,
        /// Number of values the grid requires.
        expected: usize,
        /// Number of values actually passed.
        found: usize,
    },
}

impl fmt::Display for OperatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocationMismatch {
                operator,
                argument,
                expected,
                found,
            } => {
                write!(f, "{operator}: argument '{argument}' is at {found}, expected ")?;
                for (n, loc) in expected.iter().enumerate() {
                    if n > 0 {
                        write!(f, " or ")?;
                    }
                    write!(f, "{loc}")?;
                }
                Ok(())
            }
            Self::ShapeMismatch {
                operator,
                argument,
                expected,
                found,
            } => write!(
                f,
                "{operator}: argument '{argument}' has extent {}x{}x{}, grid requires {}x{}x{}",
                found.nx, found.ny, found.nz, expected.nx, expected.ny, expected.nz
            ),
            Self::LengthMismatch {
                operator,
                argument,
                expected,
                found,
            } => write!(
                f,
                "{operator}: argument '{argument}' holds {found} values, grid requires {expected}"
            ),
        }
    }
}

impl Error for OperatorError {}
