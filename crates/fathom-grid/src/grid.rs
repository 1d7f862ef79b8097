//! Regular 3-D Cartesian grid.

use crate::topology::Topology;
use fathom_core::{Axis, Extent, GridError};
use tracing::debug;

/// Static description of a regular Cartesian domain.
///
/// Holds cell counts, spacings, per-axis topology, and the derived face
/// areas and cell volume. A `Grid` is immutable after construction and is
/// shared by reference with every field and operator.
///
/// # Examples
///
/// ```
/// use fathom_grid::{Grid, Topology};
/// use fathom_core::Axis;
///
/// let grid = Grid::new(
///     [4, 4, 4],
///     [4.0, 4.0, 4.0],
///     [Topology::Periodic, Topology::Periodic, Topology::Bounded],
/// )
/// .unwrap();
/// assert_eq!(grid.spacing(Axis::X), 1.0);
/// assert_eq!(grid.area(Axis::Z), 1.0);
/// assert_eq!(grid.volume(), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    size: [usize; 3],
    lengths: [f64; 3],
    spacing: [f64; 3],
    areas: [f64; 3],
    volume: f64,
    topology: [Topology; 3],
}

impl Grid {
    /// Build a grid of `size = [nx, ny, nz]` cells spanning `lengths = [lx, ly, lz]`.
    ///
    /// Returns `Err(GridError::InvalidGridSpec)` if any cell count is zero,
    /// any length is not finite and positive, the total cell count
    /// overflows `usize`, or the vertical axis is periodic.
    pub fn new(
        size: [usize; 3],
        lengths: [f64; 3],
        topology: [Topology; 3],
    ) -> Result<Self, GridError> {
        for axis in Axis::ALL {
            let a = axis.ordinal();
            if size[a] == 0 {
                return Err(GridError::InvalidGridSpec {
                    reason: format!("n{axis} must be positive, got 0"),
                });
            }
            if !lengths[a].is_finite() || lengths[a] <= 0.0 {
                return Err(GridError::InvalidGridSpec {
                    reason: format!(
                        "l{axis} must be finite and positive, got {}",
                        lengths[a]
                    ),
                });
            }
        }
        if topology[Axis::Z.ordinal()].is_periodic() {
            return Err(GridError::InvalidGridSpec {
                reason: "the vertical axis cannot be periodic".into(),
            });
        }
        size[0]
            .checked_mul(size[1])
            .and_then(|n| n.checked_mul(size[2]))
            .ok_or_else(|| GridError::InvalidGridSpec {
                reason: format!(
                    "cell count {}x{}x{} overflows usize",
                    size[0], size[1], size[2]
                ),
            })?;

        let spacing = [
            lengths[0] / size[0] as f64,
            lengths[1] / size[1] as f64,
            lengths[2] / size[2] as f64,
        ];
        let areas = [
            spacing[1] * spacing[2],
            spacing[0] * spacing[2],
            spacing[0] * spacing[1],
        ];
        let volume = spacing[0] * spacing[1] * spacing[2];
        if !(volume > 0.0 && areas.iter().all(|&a| a > 0.0)) {
            return Err(GridError::InvalidGridSpec {
                reason: format!("cell geometry underflows: spacing {spacing:?}"),
            });
        }

        debug!(
            nx = size[0],
            ny = size[1],
            nz = size[2],
            dx = spacing[0],
            dy = spacing[1],
            dz = spacing[2],
            volume,
            ?topology,
            "grid constructed"
        );

        Ok(Self {
            size,
            lengths,
            spacing,
            areas,
            volume,
            topology,
        })
    }

    /// A grid periodic in `x` and `y` and bounded in `z`.
    pub fn doubly_periodic(size: [usize; 3], lengths: [f64; 3]) -> Result<Self, GridError> {
        Self::new(
            size,
            lengths,
            [Topology::Periodic, Topology::Periodic, Topology::Bounded],
        )
    }

    /// Cells along x.
    pub fn nx(&self) -> usize {
        self.size[0]
    }

    /// Cells along y.
    pub fn ny(&self) -> usize {
        self.size[1]
    }

    /// Cells along z.
    pub fn nz(&self) -> usize {
        self.size[2]
    }

    /// Cells along `axis`.
    pub fn size(&self, axis: Axis) -> usize {
        self.size[axis.ordinal()]
    }

    /// The index space every field on this grid is sized to.
    pub fn extent(&self) -> Extent {
        Extent::new(self.size[0], self.size[1], self.size[2])
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.extent().len()
    }

    /// Domain length along `axis`.
    pub fn length(&self, axis: Axis) -> f64 {
        self.lengths[axis.ordinal()]
    }

    /// Cell spacing along `axis`.
    pub fn spacing(&self, axis: Axis) -> f64 {
        self.spacing[axis.ordinal()]
    }

    /// Area of a face normal to `axis`.
    pub fn area(&self, axis: Axis) -> f64 {
        self.areas[axis.ordinal()]
    }

    /// Cell volume.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Boundary topology of `axis`.
    pub fn topology(&self, axis: Axis) -> Topology {
        self.topology[axis.ordinal()]
    }
}
