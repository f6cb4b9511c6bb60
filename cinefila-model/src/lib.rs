//! Core data model definitions shared across Cinefila crates.
#![allow(missing_docs)]

pub mod error;
pub mod film;
pub mod filter_types;
pub mod party;
pub mod prelude;
pub mod rank;
#[cfg(feature = "serde")]
mod serde_util;
pub mod slug;
pub mod supplemental;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use film::{
    AwardEntry, Crew, DirectorBio, FestivalEntry, FilmInfo, FilmRecord,
    PremiereEntry, TargetGroup,
};
pub use filter_types::{FilterDimension, LengthBucket};
pub use party::PartyInfo;
pub use rank::Rank;
pub use slug::{Slug, slugify};
pub use supplemental::{SupplementalEntry, SupplementalTitles};
