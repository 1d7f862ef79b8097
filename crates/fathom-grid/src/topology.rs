//! Per-axis boundary topology.

/// How a grid axis connects at its ends.
///
/// This controls *adjacency* only. The values imposed at a bounded edge
/// are fixed by each operator's closure, not by the topology.
///
/// # Examples
///
/// ```
/// use fathom_grid::{Grid, Topology};
/// use fathom_core::Axis;
///
/// let grid = Grid::doubly_periodic([8, 8, 4], [1.0, 1.0, 0.5]).unwrap();
/// assert_eq!(grid.topology(Axis::X), Topology::Periodic);
/// assert_eq!(grid.topology(Axis::Z), Topology::Bounded);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Index `n + 1` aliases `1` and index `0` aliases `n`.
    Periodic,
    /// The axis ends at solid walls.
    Bounded,
}

impl Topology {
    /// Returns `true` for [`Topology::Periodic`].
    pub fn is_periodic(self) -> bool {
        self == Self::Periodic
    }
}
