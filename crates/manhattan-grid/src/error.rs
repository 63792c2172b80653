//! This module defines the error types used by the `manhattan-grid` crate.

#![warn(missing_docs)]

/// Error type for grid operations.
///
/// Covers lookups outside the 16x16 grid, malformed table data and
/// unrecognised last-column policy names.
#[derive(Debug, PartialEq)]
pub enum GridError {
    /// Error for out-of-bounds access.
    /// This variant is returned when a cell lies outside `0..16` on either axis.
    OutOfBounds(&'static str),
    /// Error for table data that does not cover the grid.
    /// This variant is returned when restoring a table whose score count is not 256.
    InvalidTable(&'static str),
    /// Error for an unknown last-column policy name.
    InvalidPolicy(String),
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::OutOfBounds(msg) => write!(f, "Grid access out of bounds: {}", msg),
            GridError::InvalidTable(msg) => write!(f, "Invalid proximity table: {}", msg),
            GridError::InvalidPolicy(name) => {
                write!(f, "Invalid last-column policy: {:?} (expected \"stale\" or \"exact\")", name)
            }
        }
    }
}

impl core::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            GridError::OutOfBounds("x must be below 16").to_string(),
            "Grid access out of bounds: x must be below 16"
        );
        assert_eq!(
            GridError::InvalidTable("expected 16 rows of 16 scores").to_string(),
            "Invalid proximity table: expected 16 rows of 16 scores"
        );
        assert_eq!(
            GridError::InvalidPolicy("fresh".into()).to_string(),
            "Invalid last-column policy: \"fresh\" (expected \"stale\" or \"exact\")"
        );
    }
}
