//! Grid axes and staggered field locations.

use std::fmt;

/// One of the three Cartesian axes of a grid.
///
/// By convention `Z` is the vertical axis, indexed from the surface
/// (`k = 1`) downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Zonal axis, index `i`.
    X,
    /// Meridional axis, index `j`.
    Y,
    /// Vertical axis, index `k`.
    Z,
}

impl Axis {
    /// All three axes in `x, y, z` order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of this axis in `[x, y, z]` arrays.
    pub fn ordinal(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
            Self::Z => write!(f, "z"),
        }
    }
}

/// Where on the staggered (Arakawa C) grid a field's values live.
///
/// For [`Location::Cell`], index `(i, j, k)` is the centre of cell
/// `(i, j, k)`. For a face location, index `i` along the face's axis is the
/// face between cells `i - 1` and `i`; the other two indices are cell
/// indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    /// Cell centre.
    Cell,
    /// Face normal to the x-axis.
    FaceX,
    /// Face normal to the y-axis.
    FaceY,
    /// Face normal to the z-axis.
    FaceZ,
}

impl Location {
    /// The face location normal to `axis`.
    pub fn face(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::FaceX,
            Axis::Y => Self::FaceY,
            Axis::Z => Self::FaceZ,
        }
    }

    /// The axis a face location is normal to, or `None` for [`Location::Cell`].
    pub fn normal_axis(self) -> Option<Axis> {
        match self {
            Self::Cell => None,
            Self::FaceX => Some(Axis::X),
            Self::FaceY => Some(Axis::Y),
            Self::FaceZ => Some(Axis::Z),
        }
    }

    /// Returns `true` for any of the three face locations.
    pub fn is_face(self) -> bool {
        self != Self::Cell
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cell => write!(f, "Cell"),
            Self::FaceX => write!(f, "FaceX"),
            Self::FaceY => write!(f, "FaceY"),
            Self::FaceZ => write!(f, "FaceZ"),
        }
    }
}
