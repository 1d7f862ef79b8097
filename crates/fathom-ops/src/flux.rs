//! Conservative advective flux-divergence of a cell-centred tracer.

use crate::average::{average_x, average_y, average_z};
use crate::contract::{check_pool, check_shape, expect_location};
use crate::difference::{delta_x, delta_y, delta_z};
use fathom_core::{Axis, Location, OperatorError};
use fathom_exec::Executor;
use fathom_field::{Field, TemporaryFields};
use fathom_grid::Grid;
use tracing::trace;

const OP: &str = "flux_divergence";

/// Flux-divergence `(δx(Ax u avgx q) + δy(Ay v avgy q) + δz(Az w avgz q)) / V`.
///
/// `u`, `v`, `w` are face-normal velocities at `FaceX`, `FaceY`, `FaceZ`;
/// `q` and `dest` are cell-centred. The vertical flux through the surface
/// face `k = 1` is zero regardless of `w`, and the floor below the bottom
/// cell carries no flux, so on a doubly periodic grid the volume-weighted
/// sum of the result vanishes up to rounding.
///
/// Intermediates are written to `tmp`; its previous contents are ignored.
#[allow(clippy::too_many_arguments)]
pub fn flux_divergence(
    exec: &dyn Executor,
    grid: &Grid,
    u: &Field,
    v: &Field,
    w: &Field,
    q: &Field,
    tmp: &mut TemporaryFields,
    dest: &mut Field,
) -> Result<(), OperatorError> {
    for (argument, field) in [("u", u), ("v", v), ("w", w), ("q", q)] {
        check_shape(OP, argument, grid, field)?;
    }
    check_shape(OP, "dest", grid, dest)?;
    check_pool(OP, grid, tmp)?;
    expect_location(OP, "u", u, &[Location::FaceX])?;
    expect_location(OP, "v", v, &[Location::FaceY])?;
    expect_location(OP, "w", w, &[Location::FaceZ])?;
    expect_location(OP, "q", q, &[Location::Cell])?;
    expect_location(OP, "dest", dest, &[Location::Cell])?;

    let extent = grid.extent();
    let (ax, ay, az) = (grid.area(Axis::X), grid.area(Axis::Y), grid.area(Axis::Z));
    let volume = grid.volume();
    let scratch = tmp.parts_mut();
    trace!(arch = %exec.architecture(), "flux divergence");

    average_x(exec, grid, q, scratch.face_x)?;
    let uv = u.view();
    exec.launch(extent, scratch.face_x.as_mut_slice(), &|ix, qf| {
        ax * uv.at(ix) * qf
    });
    delta_x(exec, grid, scratch.face_x, scratch.cell)?;
    let t = scratch.cell.view();
    exec.launch(extent, dest.as_mut_slice(), &|ix, _| t.at(ix));

    average_y(exec, grid, q, scratch.face_y)?;
    let vv = v.view();
    exec.launch(extent, scratch.face_y.as_mut_slice(), &|ix, qf| {
        ay * vv.at(ix) * qf
    });
    delta_y(exec, grid, scratch.face_y, scratch.cell)?;
    let t = scratch.cell.view();
    exec.launch(extent, dest.as_mut_slice(), &|ix, acc| acc + t.at(ix));

    average_z(exec, grid, q, scratch.face_z)?;
    let wv = w.view();
    exec.launch(extent, scratch.face_z.as_mut_slice(), &|ix, qf| {
        if ix.k == 1 {
            0.0
        } else {
            az * wv.at(ix) * qf
        }
    });
    delta_z(exec, grid, scratch.face_z, scratch.cell)?;
    let t = scratch.cell.view();
    exec.launch(extent, dest.as_mut_slice(), &|ix, acc| {
        (acc + t.at(ix)) / volume
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fathom_core::Index;
    use fathom_exec::Serial;

    struct Setup {
        grid: Grid,
        u: Field,
        v: Field,
        w: Field,
        q: Field,
    }

    fn setup(nz: usize) -> Setup {
        let grid = Grid::doubly_periodic([4, 4, nz], [4.0, 4.0, nz as f64]).unwrap();
        Setup {
            u: Field::zeros(&grid, Location::FaceX),
            v: Field::zeros(&grid, Location::FaceY),
            w: Field::zeros(&grid, Location::FaceZ),
            q: Field::zeros(&grid, Location::Cell),
            grid,
        }
    }

    fn run(s: &Setup) -> Field {
        let mut tmp = TemporaryFields::new(&s.grid);
        let mut dest = Field::zeros(&s.grid, Location::Cell);
        flux_divergence(&Serial, &s.grid, &s.u, &s.v, &s.w, &s.q, &mut tmp, &mut dest).unwrap();
        dest
    }

    #[test]
    fn uniform_tracer_in_uniform_flow_is_steady() {
        let mut s = setup(3);
        s.u.fill(2.0);
        s.v.fill(-1.0);
        s.q.fill(5.0);
        let dest = run(&s);
        assert!(dest.as_slice().iter().all(|&d| d == 0.0));
    }

    #[test]
    fn zonal_advection_of_a_step() {
        let mut s = setup(1);
        s.u.fill(1.0);
        s.q.set(|ix| if ix.i == 2 { 1.0 } else { 0.0 });
        let dest = run(&s);
        // Faces 2 and 3 carry half the step each.
        assert_eq!(dest.get(Index::new(1, 1, 1)), 0.5);
        assert_eq!(dest.get(Index::new(2, 1, 1)), 0.0);
        assert_eq!(dest.get(Index::new(3, 1, 1)), -0.5);
        assert_eq!(dest.get(Index::new(4, 1, 1)), 0.0);
    }

    #[test]
    fn surface_flux_is_suppressed() {
        let mut s = setup(2);
        s.w.fill(1.0);
        s.q.fill(1.0);
        let dest = run(&s);
        // Only the interior face k = 2 carries flux: out of cell 1, into cell 2.
        assert_eq!(dest.get(Index::new(1, 1, 1)), -1.0);
        assert_eq!(dest.get(Index::new(1, 1, 2)), 1.0);
        assert!(dest.sum().abs() < 1e-12);
    }

    #[test]
    fn tracer_must_be_cell_centred() {
        let s = setup(2);
        let q = Field::zeros(&s.grid, Location::FaceX);
        let mut tmp = TemporaryFields::new(&s.grid);
        let mut dest = Field::zeros(&s.grid, Location::Cell);
        let err = flux_divergence(&Serial, &s.grid, &s.u, &s.v, &s.w, &q, &mut tmp, &mut dest)
            .unwrap_err();
        assert!(matches!(
            err,
            OperatorError::LocationMismatch {
                argument: "q",
                ..
            }
        ));
    }
}
