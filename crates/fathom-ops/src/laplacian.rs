//! Finite-volume Laplacian of a cell-centred field.

use crate::contract::{check_pool, check_shape, expect_location};
use crate::difference::delta;
use fathom_core::{Axis, Location, OperatorError};
use fathom_exec::Executor;
use fathom_field::{Field, TemporaryFields};
use fathom_grid::Grid;

const OP: &str = "laplacian";

/// Laplacian `Σ δa((Aa / Δa) δa q) / V` over the three axes.
///
/// Gradients are formed on faces and scaled by the face conductance
/// `area / spacing` before being differenced back onto cells. Walls and
/// the surface carry zero gradient, so the volume-weighted sum of the
/// result vanishes on any grid.
pub fn laplacian(
    exec: &dyn Executor,
    grid: &Grid,
    q: &Field,
    tmp: &mut TemporaryFields,
    dest: &mut Field,
) -> Result<(), OperatorError> {
    check_shape(OP, "q", grid, q)?;
    check_shape(OP, "dest", grid, dest)?;
    check_pool(OP, grid, tmp)?;
    expect_location(OP, "q", q, &[Location::Cell])?;
    expect_location(OP, "dest", dest, &[Location::Cell])?;

    let extent = grid.extent();
    let volume = grid.volume();

    for axis in Axis::ALL {
        let scratch = tmp.parts_mut();
        let face = match axis {
            Axis::X => scratch.face_x,
            Axis::Y => scratch.face_y,
            Axis::Z => scratch.face_z,
        };
        let conductance = grid.area(axis) / grid.spacing(axis);

        delta(exec, grid, axis, q, face)?;
        exec.launch(extent, face.as_mut_slice(), &|_, g| conductance * g);
        delta(exec, grid, axis, face, scratch.cell)?;

        let t = scratch.cell.view();
        match axis {
            Axis::X => exec.launch(extent, dest.as_mut_slice(), &|ix, _| t.at(ix)),
            Axis::Y => exec.launch(extent, dest.as_mut_slice(), &|ix, acc| acc + t.at(ix)),
            Axis::Z => exec.launch(extent, dest.as_mut_slice(), &|ix, acc| {
                (acc + t.at(ix)) / volume
            }),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fathom_core::Index;
    use fathom_exec::Serial;

    fn run(grid: &Grid, q: &Field) -> Field {
        let mut tmp = TemporaryFields::new(grid);
        let mut dest = Field::zeros(grid, Location::Cell);
        laplacian(&Serial, grid, q, &mut tmp, &mut dest).unwrap();
        dest
    }

    #[test]
    fn constant_has_zero_laplacian() {
        let grid = Grid::doubly_periodic([4, 3, 5], [4.0, 3.0, 5.0]).unwrap();
        let mut q = Field::zeros(&grid, Location::Cell);
        q.fill(7.25);
        assert!(run(&grid, &q).as_slice().iter().all(|&d| d == 0.0));
    }

    #[test]
    fn quadratic_in_depth_has_constant_interior_curvature() {
        let grid = Grid::doubly_periodic([2, 2, 6], [2.0, 2.0, 6.0]).unwrap();
        let mut q = Field::zeros(&grid, Location::Cell);
        q.set(|ix| (ix.k * ix.k) as f64);
        let dest = run(&grid, &q);
        for k in 2..6 {
            assert_eq!(dest.get(Index::new(1, 2, k)), 2.0, "k = {k}");
        }
        assert!(dest.sum().abs() < 1e-12);
    }

    #[test]
    fn rejects_face_input() {
        let grid = Grid::doubly_periodic([2, 2, 2], [2.0, 2.0, 2.0]).unwrap();
        let q = Field::zeros(&grid, Location::FaceZ);
        let mut tmp = TemporaryFields::new(&grid);
        let mut dest = Field::zeros(&grid, Location::Cell);
        assert!(laplacian(&Serial, &grid, &q, &mut tmp, &mut dest).is_err());
    }
}
