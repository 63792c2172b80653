//! Text rendering of proximity tables.
//!
//! A table renders as a nested list literal, one grid row per line:
//!
//! ```text
//! [
//! [-5.0 ,-4.7 ,-4.3 , ... ,-0.3 ,-0.3],
//! ...
//! ]
//! ```
//!
//! Each value is printed with one decimal digit. Values whose text is shorter
//! than four characters (non-negative single digits such as `3.3`) are padded
//! with an extra space so the commas line up.

#![warn(missing_docs)]

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use tracing::debug;

use crate::error::GridError;
use crate::point_types::GridPoint;
use crate::proximity::ProximityTable;

/// Formatted values shorter than this get the wider separator.
const ALIGN_WIDTH: usize = 4;
const WIDE_SEPARATOR: &str = "  ,";
const NARROW_SEPARATOR: &str = " ,";

/// What to print in the last column of each row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum LastColumn {
    /// Repeat the text of the previous column, as the historic tables do.
    /// Consumers of those tables depend on this, so it is the default.
    #[default]
    Stale,
    /// Print the real value of the last column.
    Exact,
}

impl FromStr for LastColumn {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stale" => Ok(LastColumn::Stale),
            "exact" => Ok(LastColumn::Exact),
            _ => Err(GridError::InvalidPolicy(s.to_owned())),
        }
    }
}

impl TryFrom<String> for LastColumn {
    type Error = GridError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LastColumn> for String {
    fn from(policy: LastColumn) -> Self {
        policy.to_string()
    }
}

impl fmt::Display for LastColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LastColumn::Stale => write!(f, "stale"),
            LastColumn::Exact => write!(f, "exact"),
        }
    }
}

/// Formats a score with exactly one decimal digit (`-5.0`, `3.3`, `0.0`).
pub fn format_value(value: f64) -> String {
    format!("{:.1}", value)
}

/// Separator printed after a formatted value, chosen by its text length.
pub fn separator_for(formatted: &str) -> &'static str {
    if formatted.len() < ALIGN_WIDTH {
        WIDE_SEPARATOR
    } else {
        NARROW_SEPARATOR
    }
}

/// [`fmt::Display`] adapter rendering a [`ProximityTable`] as text.
pub struct TableDisplay<'a> {
    table: &'a ProximityTable,
    policy: LastColumn,
}

impl ProximityTable {
    /// Returns an adapter that renders the table with the given last-column policy.
    pub fn display(&self, policy: LastColumn) -> TableDisplay<'_> {
        TableDisplay { table: self, policy }
    }
}

impl fmt::Display for TableDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for row in self.table.rows() {
            write!(f, "[")?;
            let last = row.len() - 1;
            let mut previous: Option<String> = None;
            for (x, value) in row.iter().enumerate() {
                let text = format_value(*value);
                if x == last {
                    let text = match self.policy {
                        LastColumn::Stale => previous.take().unwrap_or(text),
                        LastColumn::Exact => text,
                    };
                    write!(f, "{}", text)?;
                } else {
                    write!(f, "{}{}", text, separator_for(&text))?;
                    previous = Some(text);
                }
            }
            writeln!(f, "],")?;
        }
        writeln!(f, "]")
    }
}

/// Writes the table for `target` to `out`.
pub fn write_table<W: Write>(out: &mut W, target: GridPoint, policy: LastColumn) -> io::Result<()> {
    debug!(%target, %policy, "Rendering proximity table");
    let table = ProximityTable::new(target);
    write!(out, "{}", table.display(policy))
}

/// Renders the table for `target` into a string.
pub fn render_table(target: GridPoint, policy: LastColumn) -> String {
    ProximityTable::new(target).display(policy).to_string()
}

/// Prints the table for `target` to standard output with the default
/// ([`LastColumn::Stale`]) policy.
pub fn print_table(target: GridPoint) -> io::Result<()> {
    print_table_with(target, LastColumn::default())
}

/// Prints the table for `target` to standard output.
pub fn print_table_with(target: GridPoint, policy: LastColumn) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_table(&mut out, target, policy)?;
    out.flush()
}
