//! Two-point arithmetic means between cell centres and faces.
//!
//! Averages use the same neighbour pairing as the differences in
//! [`difference`](crate::difference). Boundary slots on bounded axes are
//! zero in both directions, so no advective transport crosses a wall.

use crate::stencil::{apply, Reduction};
use fathom_core::{Axis, OperatorError};
use fathom_exec::Executor;
use fathom_field::Field;
use fathom_grid::Grid;

/// Mean along `axis`; see [`average_x`], [`average_y`], [`average_z`].
pub fn average(
    exec: &dyn Executor,
    grid: &Grid,
    axis: Axis,
    src: &Field,
    dest: &mut Field,
) -> Result<(), OperatorError> {
    match axis {
        Axis::X => average_x(exec, grid, src, dest),
        Axis::Y => average_y(exec, grid, src, dest),
        Axis::Z => average_z(exec, grid, src, dest),
    }
}

/// Mean of x-neighbours.
///
/// ```text
/// Cell  -> FaceX   dest[i] = (src[i] + src[prev(i)]) / 2
/// FaceX -> Cell    dest[i] = (src[next(i)] + src[i]) / 2
/// ```
pub fn average_x(
    exec: &dyn Executor,
    grid: &Grid,
    src: &Field,
    dest: &mut Field,
) -> Result<(), OperatorError> {
    apply("average_x", exec, grid, Axis::X, Reduction::Mean, src, dest)
}

/// Mean of y-neighbours.
///
/// ```text
/// Cell  -> FaceY   dest[j] = (src[j] + src[prev(j)]) / 2
/// FaceY -> Cell    dest[j] = (src[next(j)] + src[j]) / 2
/// ```
pub fn average_y(
    exec: &dyn Executor,
    grid: &Grid,
    src: &Field,
    dest: &mut Field,
) -> Result<(), OperatorError> {
    apply("average_y", exec, grid, Axis::Y, Reduction::Mean, src, dest)
}

/// Mean of z-neighbours with zeroed surface and bottom slots.
///
/// ```text
/// Cell  -> FaceZ   dest[k] = (src[k-1] + src[k]) / 2   (k >= 2),  dest[1]  = 0
/// FaceZ -> Cell    dest[k] = (src[k] + src[k+1]) / 2   (k < nz),  dest[nz] = 0
/// ```
pub fn average_z(
    exec: &dyn Executor,
    grid: &Grid,
    src: &Field,
    dest: &mut Field,
) -> Result<(), OperatorError> {
    apply("average_z", exec, grid, Axis::Z, Reduction::Mean, src, dest)
}
