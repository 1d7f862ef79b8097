//! A grid and executor bundled for repeated operator calls.

use fathom_core::{Axis, OperatorError};
use fathom_exec::Executor;
use fathom_field::{Field, TemporaryFields};
use fathom_grid::Grid;

/// Borrowed `(grid, executor)` pair that forwards to the free operators.
///
/// Model code typically builds one of these per time step and calls
/// operators on it instead of threading both arguments everywhere.
///
/// # Examples
///
/// ```
/// use fathom_core::Location;
/// use fathom_exec::Serial;
/// use fathom_field::{Field, TemporaryFields};
/// use fathom_grid::Grid;
/// use fathom_ops::Operators;
///
/// let grid = Grid::doubly_periodic([4, 4, 2], [4.0, 4.0, 2.0]).unwrap();
/// let ops = Operators::new(&grid, &Serial);
/// let u = Field::zeros(&grid, Location::FaceX);
/// let v = Field::zeros(&grid, Location::FaceY);
/// let w = Field::zeros(&grid, Location::FaceZ);
/// let mut tmp = TemporaryFields::new(&grid);
/// let mut div = Field::zeros(&grid, Location::Cell);
/// ops.divergence(&u, &v, &w, &mut tmp, &mut div).unwrap();
/// assert_eq!(div.max_abs(), 0.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Operators<'a> {
    grid: &'a Grid,
    exec: &'a dyn Executor,
}

impl<'a> Operators<'a> {
    /// Bundle `grid` with `exec`.
    pub fn new(grid: &'a Grid, exec: &'a dyn Executor) -> Self {
        Self { grid, exec }
    }

    /// The grid every call runs on.
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// The executor every call launches on.
    pub fn executor(&self) -> &'a dyn Executor {
        self.exec
    }

    /// See [`crate::delta`].
    pub fn delta(&self, axis: Axis, src: &Field, dest: &mut Field) -> Result<(), OperatorError> {
        crate::delta(self.exec, self.grid, axis, src, dest)
    }

    /// See [`crate::delta_x`].
    pub fn delta_x(&self, src: &Field, dest: &mut Field) -> Result<(), OperatorError> {
        crate::delta_x(self.exec, self.grid, src, dest)
    }

    /// See [`crate::delta_y`].
    pub fn delta_y(&self, src: &Field, dest: &mut Field) -> Result<(), OperatorError> {
        crate::delta_y(self.exec, self.grid, src, dest)
    }

    /// See [`crate::delta_z`].
    pub fn delta_z(&self, src: &Field, dest: &mut Field) -> Result<(), OperatorError> {
        crate::delta_z(self.exec, self.grid, src, dest)
    }

    /// See [`crate::average`].
    pub fn average(&self, axis: Axis, src: &Field, dest: &mut Field) -> Result<(), OperatorError> {
        crate::average(self.exec, self.grid, axis, src, dest)
    }

    /// See [`crate::average_x`].
    pub fn average_x(&self, src: &Field, dest: &mut Field) -> Result<(), OperatorError> {
        crate::average_x(self.exec, self.grid, src, dest)
    }

    /// See [`crate::average_y`].
    pub fn average_y(&self, src: &Field, dest: &mut Field) -> Result<(), OperatorError> {
        crate::average_y(self.exec, self.grid, src, dest)
    }

    /// See [`crate::average_z`].
    pub fn average_z(&self, src: &Field, dest: &mut Field) -> Result<(), OperatorError> {
        crate::average_z(self.exec, self.grid, src, dest)
    }

    /// See [`crate::divergence`].
    pub fn divergence(
        &self,
        fx: &Field,
        fy: &Field,
        fz: &Field,
        tmp: &mut TemporaryFields,
        div: &mut Field,
    ) -> Result<(), OperatorError> {
        crate::divergence(self.exec, self.grid, fx, fy, fz, tmp, div)
    }

    /// See [`crate::flux_divergence`].
    pub fn flux_divergence(
        &self,
        u: &Field,
        v: &Field,
        w: &Field,
        q: &Field,
        tmp: &mut TemporaryFields,
        dest: &mut Field,
    ) -> Result<(), OperatorError> {
        crate::flux_divergence(self.exec, self.grid, u, v, w, q, tmp, dest)
    }

    /// See [`crate::laplacian`].
    pub fn laplacian(
        &self,
        q: &Field,
        tmp: &mut TemporaryFields,
        dest: &mut Field,
    ) -> Result<(), OperatorError> {
        crate::laplacian(self.exec, self.grid, q, tmp, dest)
    }
}
