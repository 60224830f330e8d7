use core::ops::RangeFull;

/// Positional selector for one dimension of a backing store.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ArrayIndex {
    /// Fixes the dimension to one position and drops it from the result.
    Index(usize),
    /// Keeps the whole dimension.
    Full,
}

impl ArrayIndex {
    pub const fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }

    pub const fn is_full(&self) -> bool {
        matches!(self, Self::Full)
    }
}

impl From<usize> for ArrayIndex {
    fn from(v: usize) -> Self {
        Self::Index(v)
    }
}

impl From<RangeFull> for ArrayIndex {
    fn from(_: RangeFull) -> Self {
        Self::Full
    }
}
