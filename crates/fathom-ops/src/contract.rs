//! Location and shape preconditions shared by every operator.

use fathom_core::{Axis, Location, OperatorError};
use fathom_field::{Field, TemporaryFields};
use fathom_grid::Grid;
use smallvec::{smallvec, SmallVec};
use tracing::warn;

/// Which way a two-point stencil maps between staggered locations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Cell centres onto the faces normal to the stencil axis.
    CellToFace,
    /// Faces normal to the stencil axis back onto cell centres.
    FaceToCell,
}

impl Direction {
    /// Resolve the direction of an `axis` stencil from its argument locations.
    ///
    /// Exactly two pairings are valid: `(Cell, Face(axis))` and
    /// `(Face(axis), Cell)`. Anything else is a `LocationMismatch` naming the
    /// first argument that cannot be part of a valid pair.
    pub fn resolve(
        operator: &'static str,
        axis: Axis,
        src: Location,
        dest: Location,
    ) -> Result<Self, OperatorError> {
        let face = Location::face(axis);
        match (src, dest) {
            (Location::Cell, d) if d == face => Ok(Self::CellToFace),
            (s, Location::Cell) if s == face => Ok(Self::FaceToCell),
            (Location::Cell, found) => Err(mismatch(operator, "dest", smallvec![face], found)),
            (s, found) if s == face => Err(mismatch(
                operator,
                "dest",
                smallvec![Location::Cell],
                found,
            )),
            (found, _) => Err(mismatch(
                operator,
                "src",
                smallvec![Location::Cell, face],
                found,
            )),
        }
    }
}

pub(crate) fn mismatch(
    operator: &'static str,
    argument: &'static str,
    expected: SmallVec<[Location; 4]>,
    found: Location,
) -> OperatorError {
    let err = OperatorError::LocationMismatch {
        operator,
        argument,
        expected,
        found,
    };
    warn!(%err, "operator rejected argument location");
    err
}

/// Require `field` to sit at one of `expected`.
pub(crate) fn expect_location(
    operator: &'static str,
    argument: &'static str,
    field: &Field,
    expected: &[Location],
) -> Result<(), OperatorError> {
    if expected.contains(&field.location()) {
        Ok(())
    } else {
        Err(mismatch(
            operator,
            argument,
            SmallVec::from_slice(expected),
            field.location(),
        ))
    }
}

/// Require `field` to be sized to `grid`.
pub(crate) fn check_shape(
    operator: &'static str,
    argument: &'static str,
    grid: &Grid,
    field: &Field,
) -> Result<(), OperatorError> {
    if field.extent() == grid.extent() {
        return Ok(());
    }
    let err = OperatorError::ShapeMismatch {
        operator,
        argument,
        expected: grid.extent(),
        found: field.extent(),
    };
    warn!(%err, "operator rejected argument shape");
    Err(err)
}

/// Require a scratch pool to be sized to `grid`.
pub(crate) fn check_pool(
    operator: &'static str,
    grid: &Grid,
    tmp: &TemporaryFields,
) -> Result<(), OperatorError> {
    check_shape(operator, "tmp", grid, tmp.get(Location::Cell))
}
