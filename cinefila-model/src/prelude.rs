//! Flat snapshot of the model surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in the CLI or other presentation layers.

pub use super::error::ModelError;
pub use super::film::{
    AwardEntry, Crew, DirectorBio, FestivalEntry, FilmInfo, FilmRecord,
    PremiereEntry, TargetGroup,
};
pub use super::filter_types::{FilterDimension, LengthBucket};
pub use super::party::PartyInfo;
pub use super::rank::Rank;
pub use super::slug::Slug;
pub use super::supplemental::{SupplementalEntry, SupplementalTitles};
