//! Core trait for catalogue sort keys.

use std::cmp::Ordering;

/// Keys that can be compared for sorting
///
/// All sort keys must be comparable and handle missing data gracefully.
pub trait SortKey: Ord + Clone + Send + Sync {
    /// Create a key representing missing/null data
    fn missing() -> Self;

    /// Check if this key represents missing data
    fn is_missing(&self) -> bool;

    /// Compare two keys while ensuring missing values always sort last
    #[inline]
    fn compare_with_order(&self, other: &Self, reverse: bool) -> Ordering {
        match (self.is_missing(), other.is_missing()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) if reverse => other.cmp(self),
            (false, false) => self.cmp(other),
        }
    }
}
