pub mod facets;
pub mod filtering;
pub mod pagination;
pub mod prelude;
pub mod search;
pub mod sorting;
pub mod types;

pub use facets::FilmFacets;
pub use filtering::{FilterEngine, FilterOutcome};
pub use pagination::{CATALOGUE_STEP, PREVIEW_STEP, ShowMoreWindow};
pub use search::SearchDocument;
pub use sorting::{compare_films, sort_catalogue};
pub use types::*;
