//! Catalog bounded context: turning the two source documents into one
//! ordered, immutable list of films.

pub mod completion;
pub mod merge;
pub mod merged;
pub mod normalize;

pub use completion::{completion_year, parse_completion_date};
pub use merge::{
    MergeOptions, SupplementalIndex, merge_and_sort, merge_records,
    unranked_titles,
};
pub use merged::{MergedFilm, SupplementalInfo};
pub use normalize::{fold_diacritics, normalize_title_key};
