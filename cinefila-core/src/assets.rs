//! Image locations derived from titles and names, plus best-effort probing
//! for the optional ones.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use cinefila_model::{FilmRecord, slugify};
use tracing::debug;
use url::Url;

use crate::catalog::fold_diacritics;
use crate::error::{CatalogueError, Result};
use crate::source::http::base_directory;

/// Root of poster and still folders.
pub const DEFAULT_IMAGE_BASE: &str = "/src/images";
/// Director photos, relative to the site base URL.
pub const DEFAULT_AUTHORS_BASE: &str = "images/authors";
/// Image shown when a poster is missing.
pub const DEFAULT_PLACEHOLDER: &str = "/placeholder.svg";
/// Still candidates generated per film.
pub const DEFAULT_MAX_STILLS: usize = 20;

/// Where images live relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetConventions {
    pub image_base: String,
    pub authors_base: String,
    pub placeholder: String,
    pub max_stills: usize,
}

impl Default for AssetConventions {
    fn default() -> Self {
        Self {
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            authors_base: DEFAULT_AUTHORS_BASE.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            max_stills: DEFAULT_MAX_STILLS,
        }
    }
}

/// Image folder of a film: the slug rule with `_` as separator.
pub fn folder_name(record: &FilmRecord) -> String {
    slugify(record.preferred_title().unwrap_or_default(), '_')
}

/// File stem of a director photo: diacritics folded, lower-cased, anything
/// outside `[a-z0-9]` and whitespace removed, whitespace runs turned into
/// `_`.
pub fn director_photo_name(director: &str) -> String {
    let kept: String = fold_diacritics(director)
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join("_")
}

fn join(base: &str, rest: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), rest)
}

impl AssetConventions {
    /// `None` when the film has no usable title.
    pub fn poster_path(&self, record: &FilmRecord) -> Option<String> {
        let folder = folder_name(record);
        (!folder.is_empty()).then(|| join(&self.image_base, &format!("posters/{folder}/{folder}.jpg")))
    }

    /// Still candidates `1..=max_stills`, in probing order.
    pub fn still_candidates(&self, record: &FilmRecord) -> Vec<String> {
        let folder = folder_name(record);
        if folder.is_empty() {
            return Vec::new();
        }
        (1..=self.max_stills)
            .map(|index| join(&self.image_base, &format!("stills/{folder}/{folder}_{index}.jpg")))
            .collect()
    }

    /// Conventional photo path; `None` when the name folds to nothing.
    pub fn director_photo_path(&self, director: &str) -> Option<String> {
        let name = director_photo_name(director);
        (!name.is_empty()).then(|| join(&self.authors_base, &format!("{name}.jpg")))
    }

    /// Fallback image path.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

/// Answers whether an optional image can be loaded.
#[async_trait]
pub trait AssetProbe: Send + Sync {
    /// Failures of any kind count as absent.
    async fn exists(&self, path: &str) -> bool;
}

/// Probe candidates in order and keep those that load, stopping at the
/// first one that does not.
pub async fn probe_stills(probe: &dyn AssetProbe, candidates: &[String]) -> Vec<String> {
    let mut found = Vec::new();
    for candidate in candidates {
        if !probe.exists(candidate).await {
            debug!(path = %candidate, found = found.len(), "still probe stopped");
            break;
        }
        found.push(candidate.clone());
    }
    found
}

/// Poster if it loads, otherwise the placeholder.
pub async fn resolve_poster(
    probe: &dyn AssetProbe,
    conventions: &AssetConventions,
    record: &FilmRecord,
) -> String {
    match conventions.poster_path(record) {
        Some(path) if probe.exists(&path).await => path,
        _ => conventions.placeholder().to_string(),
    }
}

/// Director photo if it loads; omitted otherwise.
pub async fn resolve_director_photo(
    probe: &dyn AssetProbe,
    conventions: &AssetConventions,
    record: &FilmRecord,
) -> Option<String> {
    let path = conventions.director_photo_path(record.director()?)?;
    probe.exists(&path).await.then_some(path)
}

/// Probes with HTTP HEAD against the site base URL. Relative paths resolve
/// under the base directory, root-absolute ones against the host.
#[derive(Debug, Clone)]
pub struct HttpAssetProbe {
    client: reqwest::Client,
    base: Url,
}

impl HttpAssetProbe {
    /// Probe resolving paths against `base_url` as a directory.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = base_directory(base_url)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| CatalogueError::Request {
                url: base_url.to_string(),
                source,
            })?;
        Ok(Self { client, base })
    }

    fn asset_url(&self, path: &str) -> Option<Url> {
        self.base.join(path).ok()
    }
}

#[async_trait]
impl AssetProbe for HttpAssetProbe {
    async fn exists(&self, path: &str) -> bool {
        let Some(url) = self.asset_url(path) else {
            debug!(path, "asset path does not form a URL");
            return false;
        };
        match self.client.head(url.clone()).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                debug!(%url, error = %err, "asset probe failed");
                false
            }
        }
    }
}

/// Probes files under a local copy of the site.
#[derive(Debug, Clone)]
pub struct FsAssetProbe {
    root: PathBuf,
}

impl FsAssetProbe {
    /// Probe rooted at a local copy of the site.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl AssetProbe for FsAssetProbe {
    async fn exists(&self, path: &str) -> bool {
        let full = self.root.join(path.trim_start_matches('/'));
        tokio::fs::metadata(&full)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }
}
