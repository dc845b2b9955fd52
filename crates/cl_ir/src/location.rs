//! Source locations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 1-based (line, column) position in a source file.
///
/// Columns count characters, not bytes. Ordering is lexicographic by
/// line, then column, which is the order measurements are validated in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    /// Create a new location.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Location { line, column }
    }

    /// The position `width` characters to the right on the same line.
    #[inline]
    #[must_use]
    pub fn shifted(self, width: usize) -> Self {
        let width = u32::try_from(width).unwrap_or(u32::MAX);
        Location {
            line: self.line,
            column: self.column.saturating_add(width),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
