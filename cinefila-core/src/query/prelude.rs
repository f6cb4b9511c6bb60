//! Intentional query surface consumed by front ends.

pub use super::filtering::{FilterEngine, FilterOutcome};
pub use super::pagination::ShowMoreWindow;
pub use super::sorting::sort_catalogue;
pub use super::types::{FilterOptions, FilterSelection};
pub use cinefila_model::{FilterDimension, LengthBucket};
