//! In-memory proximity table.
//!
//! A [`ProximityTable`] holds the score of every cell of the 16x16 grid for
//! one target. Scores are `d / 3 - 5` where `d` is the Manhattan distance from
//! the cell to the target, so the target cell scores `-5.0` and cells get
//! one point closer to zero for every three steps away.

#![warn(missing_docs)]

use crate::GRID_SIZE;
use crate::distance::manhattan;
use crate::error::GridError;
use crate::point_types::GridPoint;

/// Divisor applied to the raw distance.
const DISTANCE_SCALE: f64 = 3.0;
/// Offset added after scaling.
const DISTANCE_OFFSET: f64 = -5.0;

/// Score of `cell` relative to `target`.
///
/// Uses true division, so a distance of 1 scores `-4.666…`.
pub fn cell_value(cell: GridPoint, target: GridPoint) -> f64 {
    manhattan(cell, target) as f64 / DISTANCE_SCALE + DISTANCE_OFFSET
}

/// Scores of every grid cell for one target, stored row-major.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawProximityTable"))]
pub struct ProximityTable {
    /// Cell the distances are measured against.
    target: GridPoint,
    /// `GRID_SIZE * GRID_SIZE` values, `y` outer and `x` inner.
    data: Vec<f64>,
}

impl ProximityTable {
    /// Computes the table for `target`. The target need not be a grid cell.
    pub fn new(target: GridPoint) -> Self {
        let size = GRID_SIZE as i32;
        let data = (0..size)
            .flat_map(|y| (0..size).map(move |x| GridPoint::new(x, y)))
            .map(|cell| cell_value(cell, target))
            .collect();

        Self { target, data }
    }

    /// Builds a table from previously computed scores.
    ///
    /// # Returns
    /// * `Result<Self, GridError>` - `InvalidTable` unless `data` holds exactly 256 row-major scores
    pub fn from_parts(target: GridPoint, data: Vec<f64>) -> Result<Self, GridError> {
        if data.len() != GRID_SIZE * GRID_SIZE {
            return Err(GridError::InvalidTable("expected 16 rows of 16 scores"));
        }
        Ok(Self { target, data })
    }

    /// Gets the target of the table.
    pub fn target(&self) -> GridPoint {
        self.target
    }

    /// Calculates the linear index for a cell, if it lies in the grid.
    fn get_index(cell: GridPoint) -> Result<usize, GridError> {
        if !cell.in_grid() {
            return Err(GridError::OutOfBounds("x and y must be within 0..16"));
        }
        Ok(cell.y as usize * GRID_SIZE + cell.x as usize)
    }

    /// Gets the score of a cell.
    ///
    /// # Returns
    /// * `Result<f64, GridError>` - The score or `OutOfBounds` if the cell is outside the grid
    pub fn get(&self, cell: GridPoint) -> Result<f64, GridError> {
        let index = Self::get_index(cell)?;
        self.data
            .get(index)
            .copied()
            .ok_or(GridError::OutOfBounds("cell missing from table data"))
    }

    /// Iterates over the rows, `y = 0` first. Each row holds 16 scores, `x = 0` first.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> {
        self.data.chunks_exact(GRID_SIZE)
    }
}

/// Serialized shape of a [`ProximityTable`], checked before use.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawProximityTable {
    target: GridPoint,
    data: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawProximityTable> for ProximityTable {
    type Error = GridError;

    fn try_from(raw: RawProximityTable) -> Result<Self, Self::Error> {
        ProximityTable::from_parts(raw.target, raw.data)
    }
}
