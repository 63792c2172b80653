use crate::GRID_SIZE;

/// Represents a point in grid coordinates (cell indices).
///
/// Coordinates are signed so that targets may lie outside the grid.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    /// The x-coordinate (column index) in the grid.
    pub x: i32,
    /// The y-coordinate (row index) in the grid.
    pub y: i32,
}

impl GridPoint {
    /// Creates a new `GridPoint`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to `other`.
    #[must_use]
    pub fn manhattan_distance(&self, other: &GridPoint) -> u64 {
        crate::distance::manhattan(*self, *other)
    }

    /// Whether the point is a cell of the 16x16 grid.
    #[must_use]
    pub fn in_grid(&self) -> bool {
        let size = GRID_SIZE as i32;
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
