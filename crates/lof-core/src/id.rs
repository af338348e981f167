//! Strongly-typed line index.

use std::fmt;

/// Identifies a traced field line within the current recomputation pass.
///
/// `LineId(n)` is the n-th line in seed order: sources in particle order,
/// and within a source, seeds in increasing angle. IDs are only meaningful
/// until the next recomputation replaces the line set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub u32);

impl LineId {
    /// The line's position in storage.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for LineId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
