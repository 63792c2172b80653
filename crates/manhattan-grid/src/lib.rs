//! Proximity tables over a fixed 16x16 grid.
//!
//! Every cell of the grid is scored by its Manhattan distance to a target
//! cell, scaled and offset as `d / 3 - 5`. The scores can be queried in
//! memory through [`ProximityTable`] or rendered as a nested list literal
//! with the functions in [`table`].

pub mod distance;
pub mod error;
pub mod point_types;
pub mod proximity;
pub mod table;

pub use distance::manhattan;
pub use error::GridError;
pub use point_types::GridPoint;
pub use proximity::{ProximityTable, cell_value};
pub use table::{LastColumn, print_table, print_table_with, render_table, write_table};

/// Number of cells along each axis of the grid.
pub const GRID_SIZE: usize = 16;
