//! Two-point differences between cell centres and faces.
//!
//! Each operator accepts both argument orders; the source and destination
//! locations pick the direction.
//!
//! | operator | direction | range | boundary |
//! |---|---|---|---|
//! | `delta_x`, `delta_y` | periodic | full | wraps via `prev`/`next` |
//! | `delta_x`, `delta_y` | bounded, `Cell → Face` | `2..=n` | face `1` = 0 |
//! | `delta_x`, `delta_y` | bounded, `Face → Cell` | `1..n` | cell `n` = `-src[n]` |
//! | `delta_z` | `Cell → FaceZ` | `2..=nz` | surface face `1` = 0 |
//! | `delta_z` | `FaceZ → Cell` | `1..nz` | bottom cell `nz` = `src[nz]` |

use crate::stencil::{apply, Reduction};
use fathom_core::{Axis, OperatorError};
use fathom_exec::Executor;
use fathom_field::Field;
use fathom_grid::Grid;

/// Difference along `axis`; see [`delta_x`], [`delta_y`], [`delta_z`].
pub fn delta(
    exec: &dyn Executor,
    grid: &Grid,
    axis: Axis,
    src: &Field,
    dest: &mut Field,
) -> Result<(), OperatorError> {
    match axis {
        Axis::X => delta_x(exec, grid, src, dest),
        Axis::Y => delta_y(exec, grid, src, dest),
        Axis::Z => delta_z(exec, grid, src, dest),
    }
}

/// East-minus-west difference along x.
///
/// ```text
/// Cell  -> FaceX   dest[i] = src[i] - src[prev(i)]
/// FaceX -> Cell    dest[i] = src[next(i)] - src[i]
/// ```
///
/// # Examples
///
/// ```
/// use fathom_core::{Index, Location};
/// use fathom_exec::Serial;
/// use fathom_field::Field;
/// use fathom_grid::Grid;
/// use fathom_ops::delta_x;
///
/// let grid = Grid::doubly_periodic([4, 4, 4], [4.0, 4.0, 4.0]).unwrap();
/// let mut f = Field::zeros(&grid, Location::Cell);
/// f.set(|ix| ix.i as f64);
/// let mut df = Field::zeros(&grid, Location::FaceX);
/// delta_x(&Serial, &grid, &f, &mut df).unwrap();
/// assert_eq!(df.get(Index::new(1, 2, 3)), -3.0);
/// assert_eq!(df.get(Index::new(2, 2, 3)), 1.0);
/// ```
pub fn delta_x(
    exec: &dyn Executor,
    grid: &Grid,
    src: &Field,
    dest: &mut Field,
) -> Result<(), OperatorError> {
    apply("delta_x", exec, grid, Axis::X, Reduction::Difference, src, dest)
}

/// North-minus-south difference along y.
///
/// ```text
/// Cell  -> FaceY   dest[j] = src[j] - src[prev(j)]
/// FaceY -> Cell    dest[j] = src[next(j)] - src[j]
/// ```
pub fn delta_y(
    exec: &dyn Executor,
    grid: &Grid,
    src: &Field,
    dest: &mut Field,
) -> Result<(), OperatorError> {
    apply("delta_y", exec, grid, Axis::Y, Reduction::Difference, src, dest)
}

/// Upper-minus-lower difference along z, with closed surface and bottom.
///
/// ```text
/// Cell  -> FaceZ   dest[k] = src[k-1] - src[k]   (k >= 2),  dest[1]  = 0
/// FaceZ -> Cell    dest[k] = src[k] - src[k+1]   (k < nz),  dest[nz] = src[nz]
/// ```
pub fn delta_z(
    exec: &dyn Executor,
    grid: &Grid,
    src: &Field,
    dest: &mut Field,
) -> Result<(), OperatorError> {
    apply("delta_z", exec, grid, Axis::Z, Reduction::Difference, src, dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fathom_core::{Index, Location};
    use fathom_exec::Serial;
    use fathom_grid::Topology;

    fn column(nz: usize) -> Grid {
        Grid::doubly_periodic([1, 1, nz], [1.0, 1.0, nz as f64]).unwrap()
    }

    #[test]
    fn delta_z_cell_to_face_closes_surface() {
        let grid = column(4);
        let mut f = Field::zeros(&grid, Location::Cell);
        f.set(|ix| (ix.k * ix.k) as f64);
        let mut df = Field::zeros(&grid, Location::FaceZ);
        delta_z(&Serial, &grid, &f, &mut df).unwrap();
        assert_eq!(df.as_slice(), &[0.0, 1.0 - 4.0, 4.0 - 9.0, 9.0 - 16.0]);
    }

    #[test]
    fn delta_z_face_to_cell_keeps_bottom_face() {
        let grid = column(4);
        let mut w = Field::zeros(&grid, Location::FaceZ);
        w.set(|ix| 10.0 * ix.k as f64);
        let mut dw = Field::zeros(&grid, Location::Cell);
        delta_z(&Serial, &grid, &w, &mut dw).unwrap();
        assert_eq!(dw.as_slice(), &[-10.0, -10.0, -10.0, 40.0]);
    }

    #[test]
    fn single_layer_column() {
        let grid = column(1);
        let mut f = Field::zeros(&grid, Location::Cell);
        f.fill(7.0);
        let mut df = Field::zeros(&grid, Location::FaceZ);
        delta_z(&Serial, &grid, &f, &mut df).unwrap();
        assert_eq!(df.as_slice(), &[0.0]);

        let mut w = Field::zeros(&grid, Location::FaceZ);
        w.fill(7.0);
        let mut back = Field::zeros(&grid, Location::Cell);
        delta_z(&Serial, &grid, &w, &mut back).unwrap();
        assert_eq!(back.as_slice(), &[7.0]);
    }

    #[test]
    fn bounded_x_walls() {
        let grid = Grid::new(
            [4, 1, 1],
            [4.0, 1.0, 1.0],
            [Topology::Bounded, Topology::Periodic, Topology::Bounded],
        )
        .unwrap();
        let mut f = Field::zeros(&grid, Location::Cell);
        f.set(|ix| (ix.i * 2) as f64);
        let mut df = Field::zeros(&grid, Location::FaceX);
        delta_x(&Serial, &grid, &f, &mut df).unwrap();
        assert_eq!(df.as_slice(), &[0.0, 2.0, 2.0, 2.0]);

        let mut ddf = Field::zeros(&grid, Location::Cell);
        delta_x(&Serial, &grid, &df, &mut ddf).unwrap();
        assert_eq!(ddf.as_slice(), &[2.0, 0.0, 0.0, -2.0]);
    }

    #[test]
    fn bounded_y_walls() {
        let grid = Grid::new(
            [1, 3, 1],
            [1.0, 3.0, 1.0],
            [Topology::Periodic, Topology::Bounded, Topology::Bounded],
        )
        .unwrap();
        let mut q = Field::zeros(&grid, Location::Cell);
        q.set(|ix| (ix.j * ix.j) as f64);
        let mut dq = Field::zeros(&grid, Location::FaceY);
        dq.fill(-1.0);
        delta_y(&Serial, &grid, &q, &mut dq).unwrap();
        assert_eq!(dq.as_slice(), &[0.0, 3.0, 5.0]);

        let mut v = Field::zeros(&grid, Location::FaceY);
        v.set(|ix| [4.0, 6.0, 8.0][ix.j - 1]);
        let mut dv = Field::zeros(&grid, Location::Cell);
        delta_y(&Serial, &grid, &v, &mut dv).unwrap();
        assert_eq!(dv.as_slice(), &[2.0, 2.0, -8.0]);
    }

    #[test]
    fn delta_y_wraps() {
        let grid = Grid::doubly_periodic([1, 3, 1], [1.0, 3.0, 1.0]).unwrap();
        let mut v = Field::zeros(&grid, Location::FaceY);
        v.set(|ix| [1.0, 5.0, 2.0][ix.j - 1]);
        let mut dv = Field::zeros(&grid, Location::Cell);
        delta_y(&Serial, &grid, &v, &mut dv).unwrap();
        assert_eq!(dv.get(Index::new(1, 1, 1)), 4.0);
        assert_eq!(dv.get(Index::new(1, 2, 1)), -3.0);
        assert_eq!(dv.get(Index::new(1, 3, 1)), -1.0);
    }

    #[test]
    fn delta_dispatches_by_axis() {
        let grid = Grid::doubly_periodic([3, 3, 3], [3.0, 3.0, 3.0]).unwrap();
        let mut f = Field::zeros(&grid, Location::Cell);
        f.set(|ix| (ix.i + 10 * ix.j + 100 * ix.k) as f64);
        for axis in Axis::ALL {
            let mut via_axis = Field::zeros(&grid, Location::face(axis));
            delta(&Serial, &grid, axis, &f, &mut via_axis).unwrap();
            let mut direct = Field::zeros(&grid, Location::face(axis));
            let result = match axis {
                Axis::X => delta_x(&Serial, &grid, &f, &mut direct),
                Axis::Y => delta_y(&Serial, &grid, &f, &mut direct),
                Axis::Z => delta_z(&Serial, &grid, &f, &mut direct),
            };
            result.unwrap();
            assert_eq!(via_axis, direct);
        }
    }
}
