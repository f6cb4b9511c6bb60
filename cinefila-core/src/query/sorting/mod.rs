//! Sorting module for the catalogue display order
//!
//! This module provides:
//! - The sort key trait with missing-last comparison
//! - Rank and completion date keys
//! - The composite catalogue ordering

pub mod catalogue;
pub mod keys;
pub mod traits;

pub use catalogue::{CatalogueKey, compare_films, sort_catalogue};
pub use keys::*;
pub use traits::*;
