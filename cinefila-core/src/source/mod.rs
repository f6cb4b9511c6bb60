//! Where the two catalogue documents come from.

mod file;
pub(crate) mod http;
pub mod lenient;

pub use file::FileCatalogueSource;
pub use http::HttpCatalogueSource;

use async_trait::async_trait;
use cinefila_model::{FilmRecord, SupplementalEntry};
use tracing::debug;

use crate::error::Result;

/// Default location of the primary catalogue document.
pub const PRIMARY_DOCUMENT: &str = "data/all_html_data.json";
/// Default location of the supplemental document, spelled as the site
/// serves it.
pub const SUPPLEMENTAL_DOCUMENT: &str = "data/aditional_info.json";

/// Relative locations of both documents under a source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPaths {
    pub primary: String,
    pub supplemental: String,
}

impl Default for DocumentPaths {
    fn default() -> Self {
        Self {
            primary: PRIMARY_DOCUMENT.to_string(),
            supplemental: SUPPLEMENTAL_DOCUMENT.to_string(),
        }
    }
}

/// A provider of the primary and supplemental documents.
///
/// The primary document is decoded strictly. The supplemental document goes
/// through [`lenient::decode_lenient`].
#[async_trait]
pub trait CatalogueSource: Send + Sync {
    /// Read and strictly decode the primary document.
    async fn fetch_primary(&self) -> Result<Vec<FilmRecord>>;

    /// Read and leniently decode the supplemental document.
    async fn fetch_supplemental(&self) -> Result<Vec<SupplementalEntry>>;

    /// Short human-readable location for logs.
    fn describe(&self) -> String;
}

/// Both documents, fetched together.
#[derive(Debug, Clone, Default)]
pub struct CatalogueDocuments {
    pub primary: Vec<FilmRecord>,
    pub supplemental: Vec<SupplementalEntry>,
}

/// Fetch both documents concurrently. Either failure fails the whole load.
pub async fn fetch_documents(source: &dyn CatalogueSource) -> Result<CatalogueDocuments> {
    let (primary, supplemental) =
        tokio::try_join!(source.fetch_primary(), source.fetch_supplemental())?;

    debug!(
        source = %source.describe(),
        primary = primary.len(),
        supplemental = supplemental.len(),
        "fetched catalogue documents"
    );

    Ok(CatalogueDocuments {
        primary,
        supplemental,
    })
}
