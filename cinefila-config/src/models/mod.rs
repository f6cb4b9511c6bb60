use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PRIMARY_PATH: &str = "data/all_html_data.json";
pub const DEFAULT_SUPPLEMENTAL_PATH: &str = "data/aditional_info.json";
pub const DEFAULT_REQUEST_TIMEOUT: &str = "30s";

/// Complete catalogue configuration after all layers are applied.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogueConfig {
    pub source: SourceConfig,
    pub pagination: PaginationConfig,
    pub assets: AssetsConfig,
    /// Enables development diagnostics such as the unranked title listing.
    pub dev_mode: bool,
    #[serde(skip)]
    pub metadata: ConfigMetadata,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            pagination: PaginationConfig::default(),
            assets: AssetsConfig::default(),
            dev_mode: false,
            metadata: ConfigMetadata::default(),
        }
    }
}

/// Where the two catalogue documents are read from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Site root the documents are fetched from over HTTP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Local copy of the site; takes precedence over `base_url`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    pub primary_path: String,
    pub supplemental_path: String,
    /// Append `?t=<unix millis>` to document requests.
    pub cache_bust: bool,
    /// Humantime duration, e.g. `"30s"` or `"1m 30s"`.
    pub request_timeout: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            data_dir: None,
            primary_path: DEFAULT_PRIMARY_PATH.to_string(),
            supplemental_path: DEFAULT_SUPPLEMENTAL_PATH.to_string(),
            cache_bust: true,
            request_timeout: DEFAULT_REQUEST_TIMEOUT.to_string(),
        }
    }
}

/// Resolved document location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Directory(PathBuf),
    Remote(String),
}

impl SourceConfig {
    /// The data directory when set, else the base URL.
    pub fn location(&self) -> Option<SourceLocation> {
        if let Some(dir) = &self.data_dir {
            return Some(SourceLocation::Directory(dir.clone()));
        }
        self.base_url
            .as_ref()
            .filter(|url| !url.trim().is_empty())
            .map(|url| SourceLocation::Remote(url.trim().to_string()))
    }

    pub fn request_timeout(&self) -> Result<Duration, humantime::DurationError> {
        humantime::parse_duration(self.request_timeout.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Films added per "show more" on the catalogue page.
    pub catalogue_step: usize,
    /// Films shown in the home page preview.
    pub preview_step: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            catalogue_step: 15,
            preview_step: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub image_base: String,
    pub authors_base: String,
    pub placeholder: String,
    /// Upper bound of still images probed per film.
    pub max_stills: usize,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            image_base: "/src/images".to_string(),
            authors_base: "images/authors".to_string(),
            placeholder: "/placeholder.svg".to_string(),
            max_stills: 20,
        }
    }
}

/// Source that produced the file layer of the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    Explicit(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigMetadata {
    pub source: ConfigSource,
    pub env_file_loaded: bool,
    /// Names of the environment variables that overrode file values.
    pub env_overrides: Vec<&'static str>,
}
