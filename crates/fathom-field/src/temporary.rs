//! Caller-owned scratch fields for operator compositions.
//!
//! Compositions such as divergence and flux-divergence need intermediate
//! fields at each staggered location. The outer model allocates one
//! [`TemporaryFields`] pool at setup and lends it to every composition, so
//! no operator allocates in the inner loop.

use crate::field::Field;
use fathom_core::{Extent, Location};
use fathom_grid::Grid;

/// One scratch field per staggered location.
///
/// Contents are overwritten by every composition and must be treated as
/// write-before-read: nothing survives from one call to the next. A pool
/// may not be shared by two compositions running at the same time; the
/// `&mut` borrow each composition takes enforces this.
#[derive(Clone, Debug)]
pub struct TemporaryFields {
    cell: Field,
    face_x: Field,
    face_y: Field,
    face_z: Field,
}

/// Simultaneous mutable access to every field of a [`TemporaryFields`] pool.
#[derive(Debug)]
pub struct ScratchParts<'a> {
    /// Cell-centred scratch.
    pub cell: &'a mut Field,
    /// x-face scratch.
    pub face_x: &'a mut Field,
    /// y-face scratch.
    pub face_y: &'a mut Field,
    /// z-face scratch.
    pub face_z: &'a mut Field,
}

impl TemporaryFields {
    /// Allocate a zeroed pool sized to `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self {
            cell: Field::zeros(grid, Location::Cell),
            face_x: Field::zeros(grid, Location::FaceX),
            face_y: Field::zeros(grid, Location::FaceY),
            face_z: Field::zeros(grid, Location::FaceZ),
        }
    }

    /// The index space every scratch field is sized to.
    pub fn extent(&self) -> Extent {
        self.cell.extent()
    }

    /// The scratch field at `location`.
    pub fn get(&self, location: Location) -> &Field {
        match location {
            Location::Cell => &self.cell,
            Location::FaceX => &self.face_x,
            Location::FaceY => &self.face_y,
            Location::FaceZ => &self.face_z,
        }
    }

    /// Mutable access to the scratch field at `location`.
    pub fn get_mut(&mut self, location: Location) -> &mut Field {
        match location {
            Location::Cell => &mut self.cell,
            Location::FaceX => &mut self.face_x,
            Location::FaceY => &mut self.face_y,
            Location::FaceZ => &mut self.face_z,
        }
    }

    /// Borrow all four scratch fields at once.
    pub fn parts_mut(&mut self) -> ScratchParts<'_> {
        ScratchParts {
            cell: &mut self.cell,
            face_x: &mut self.face_x,
            face_y: &mut self.face_y,
            face_z: &mut self.face_z,
        }
    }
}
