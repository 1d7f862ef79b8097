//! The two-point staggered stencil underlying every difference and average.

use crate::contract::{check_shape, Direction};
use fathom_core::{Axis, Index, OperatorError};
use fathom_exec::Executor;
use fathom_field::Field;
use fathom_grid::{next, prev, Grid};
use tracing::trace;

/// How the two neighbouring values of a stencil are combined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Reduction {
    Difference,
    Mean,
}

impl Reduction {
    #[inline]
    fn combine(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Difference => a - b,
            Self::Mean => 0.5 * (a + b),
        }
    }

    /// Value at the last cell of a bounded axis, whose outer face is a wall.
    /// Differences see a zero wall value; averages are zeroed outright.
    #[inline]
    fn wall(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Difference => a - b,
            Self::Mean => 0.0,
        }
    }
}

/// Apply a two-point stencil along `axis` from `src` into `dest`.
///
/// Horizontal axes pair `a = east/north`, `b = west/south`:
///
/// ```text
/// CellToFace  dest[p] = r(src[p],       src[prev(p)])   boundary face p = 1 -> 0 when bounded
/// FaceToCell  dest[p] = r(src[next(p)], src[p])         last cell p = n sees a zero wall face
/// ```
///
/// The vertical axis counts down from the surface and pairs `a = above`,
/// `b = below`:
///
/// ```text
/// CellToFace  dest[k] = r(src[k-1], src[k])   k = 2..nz, surface face k = 1 -> 0
/// FaceToCell  dest[k] = r(src[k], src[k+1])   k = 1..nz-1, bottom cell sees a zero floor
/// ```
pub(crate) fn apply(
    operator: &'static str,
    exec: &dyn Executor,
    grid: &Grid,
    axis: Axis,
    reduction: Reduction,
    src: &Field,
    dest: &mut Field,
) -> Result<(), OperatorError> {
    check_shape(operator, "src", grid, src)?;
    check_shape(operator, "dest", grid, dest)?;
    let direction = Direction::resolve(operator, axis, src.location(), dest.location())?;

    let n = grid.size(axis);
    let periodic = grid.topology(axis).is_periodic();
    let s = src.view();
    trace!(operator, %axis, ?direction, arch = %exec.architecture(), "launch");

    let kernel = move |ix: Index, _: f64| -> f64 {
        let p = ix.get(axis);
        let at = |q: usize| s.at(ix.with(axis, q));
        match (axis, direction) {
            (Axis::Z, Direction::CellToFace) => {
                if p == 1 {
                    0.0
                } else {
                    reduction.combine(at(p - 1), at(p))
                }
            }
            (Axis::Z, Direction::FaceToCell) => {
                if p < n {
                    reduction.combine(at(p), at(p + 1))
                } else {
                    reduction.wall(at(p), 0.0)
                }
            }
            (_, Direction::CellToFace) => {
                if periodic {
                    reduction.combine(at(p), at(prev(p, n)))
                } else if p == 1 {
                    0.0
                } else {
                    reduction.combine(at(p), at(p - 1))
                }
            }
            (_, Direction::FaceToCell) => {
                if periodic {
                    reduction.combine(at(next(p, n)), at(p))
                } else if p < n {
                    reduction.combine(at(p + 1), at(p))
                } else {
                    reduction.wall(0.0, at(p))
                }
            }
        }
    };

    exec.launch(grid.extent(), dest.as_mut_slice(), &kernel);
    Ok(())
}
