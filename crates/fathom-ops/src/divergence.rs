//! Discrete divergence of a staggered vector field.

use crate::contract::{check_pool, check_shape, expect_location};
use crate::difference::{delta_x, delta_y, delta_z};
use fathom_core::{Axis, Location, OperatorError};
use fathom_exec::Executor;
use fathom_field::{Field, TemporaryFields};
use fathom_grid::Grid;

const OP: &str = "divergence";

/// Finite-volume divergence `(Ax δx fx + Ay δy fy + Az δz fz) / V`.
///
/// The destination's location selects the form:
///
/// - `div` at [`Location::Cell`]: `fx`, `fy`, `fz` must sit at `FaceX`,
///   `FaceY`, `FaceZ`. This is the cell divergence of a face-normal
///   velocity, the right-hand side of the pressure Poisson equation.
/// - `div` at any face location: `fx`, `fy`, `fz` must all be
///   cell-centred. Each component is differenced onto its own face and
///   the three results are combined index-wise.
///
/// Intermediates are written to `tmp`; its previous contents are ignored.
pub fn divergence(
    exec: &dyn Executor,
    grid: &Grid,
    fx: &Field,
    fy: &Field,
    fz: &Field,
    tmp: &mut TemporaryFields,
    div: &mut Field,
) -> Result<(), OperatorError> {
    for (argument, field) in [("fx", fx), ("fy", fy), ("fz", fz)] {
        check_shape(OP, argument, grid, field)?;
    }
    check_shape(OP, "div", grid, div)?;
    check_pool(OP, grid, tmp)?;

    match div.location() {
        Location::Cell => {
            expect_location(OP, "fx", fx, &[Location::FaceX])?;
            expect_location(OP, "fy", fy, &[Location::FaceY])?;
            expect_location(OP, "fz", fz, &[Location::FaceZ])?;
            faces_to_cell(exec, grid, fx, fy, fz, tmp, div)
        }
        Location::FaceX | Location::FaceY | Location::FaceZ => {
            expect_location(OP, "fx", fx, &[Location::Cell])?;
            expect_location(OP, "fy", fy, &[Location::Cell])?;
            expect_location(OP, "fz", fz, &[Location::Cell])?;
            cells_to_face(exec, grid, fx, fy, fz, tmp, div)
        }
    }
}

fn faces_to_cell(
    exec: &dyn Executor,
    grid: &Grid,
    fx: &Field,
    fy: &Field,
    fz: &Field,
    tmp: &mut TemporaryFields,
    div: &mut Field,
) -> Result<(), OperatorError> {
    let extent = grid.extent();
    let (ax, ay, az) = (grid.area(Axis::X), grid.area(Axis::Y), grid.area(Axis::Z));
    let volume = grid.volume();
    let scratch = tmp.parts_mut();

    delta_x(exec, grid, fx, scratch.cell)?;
    let t = scratch.cell.view();
    exec.launch(extent, div.as_mut_slice(), &|ix, _| ax * t.at(ix));

    delta_y(exec, grid, fy, scratch.cell)?;
    let t = scratch.cell.view();
    exec.launch(extent, div.as_mut_slice(), &|ix, acc| acc + ay * t.at(ix));

    delta_z(exec, grid, fz, scratch.cell)?;
    let t = scratch.cell.view();
    exec.launch(extent, div.as_mut_slice(), &|ix, acc| {
        (acc + az * t.at(ix)) / volume
    });
    Ok(())
}

fn cells_to_face(
    exec: &dyn Executor,
    grid: &Grid,
    fx: &Field,
    fy: &Field,
    fz: &Field,
    tmp: &mut TemporaryFields,
    div: &mut Field,
) -> Result<(), OperatorError> {
    let extent = grid.extent();
    let (ax, ay, az) = (grid.area(Axis::X), grid.area(Axis::Y), grid.area(Axis::Z));
    let volume = grid.volume();
    let scratch = tmp.parts_mut();

    delta_x(exec, grid, fx, scratch.face_x)?;
    delta_y(exec, grid, fy, scratch.face_y)?;
    delta_z(exec, grid, fz, scratch.face_z)?;

    let (tx, ty, tz) = (
        scratch.face_x.view(),
        scratch.face_y.view(),
        scratch.face_z.view(),
    );
    exec.launch(extent, div.as_mut_slice(), &|ix, _| {
        (ax * tx.at(ix) + ay * ty.at(ix) + az * tz.at(ix)) / volume
    });
    Ok(())
}
