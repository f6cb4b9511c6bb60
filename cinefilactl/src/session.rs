//! Turns a loaded configuration into a catalogue snapshot plus the asset
//! conventions the presentation helpers need.

use std::sync::Arc;

use anyhow::{Context, Result};
use cinefila_config::{
    AssetsConfig, CatalogueConfig, ConfigLoader, SourceConfig, SourceLocation,
};
use cinefila_core::{
    CatalogueSnapshot, CatalogueStore, MergeOptions,
    assets::{AssetConventions, AssetProbe, FsAssetProbe, HttpAssetProbe},
    query::ShowMoreWindow,
    source::{CatalogueSource, DocumentPaths, FileCatalogueSource, HttpCatalogueSource},
};
use tracing::{debug, warn};

use crate::GlobalArgs;

pub struct Session {
    pub config: CatalogueConfig,
    pub assets: AssetConventions,
    pub snapshot: Arc<CatalogueSnapshot>,
}

impl Session {
    pub async fn open(global: &GlobalArgs) -> Result<Self> {
        let config = load_config(global)?;
        let source = catalogue_source(&config)?;
        debug!(source = %source.describe(), "loading catalogue");

        let store = CatalogueStore::new(MergeOptions {
            dev_diagnostics: config.dev_mode,
        });
        let snapshot = store
            .load(source.as_ref())
            .await
            .with_context(|| format!("failed to load the catalogue from {}", source.describe()))?;

        Ok(Self {
            assets: asset_conventions(&config.assets),
            config,
            snapshot,
        })
    }

    pub fn catalogue_window(&self) -> ShowMoreWindow {
        ShowMoreWindow::initial(self.config.pagination.catalogue_step)
    }

    pub fn preview_window(&self) -> ShowMoreWindow {
        ShowMoreWindow::initial(self.config.pagination.preview_step)
    }

    pub fn asset_probe(&self) -> Result<Box<dyn AssetProbe>> {
        match self.config.source.location() {
            Some(SourceLocation::Directory(dir)) => Ok(Box::new(FsAssetProbe::new(dir))),
            Some(SourceLocation::Remote(url)) => Ok(Box::new(HttpAssetProbe::new(
                &url,
                request_timeout(&self.config.source)?,
            )?)),
            None => anyhow::bail!("no catalogue source configured"),
        }
    }
}

pub fn load_config(global: &GlobalArgs) -> Result<CatalogueConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &global.config {
        loader = loader.with_config_path(path);
    }
    if let Some(url) = &global.base_url {
        loader = loader.with_base_url(url);
    }
    if let Some(dir) = &global.data_dir {
        loader = loader.with_data_dir(dir);
    }

    let load = loader.load().context("failed to load configuration")?;
    for warning in &load.warnings.items {
        match &warning.hint {
            Some(hint) => warn!(hint = %hint, "{}", warning.message),
            None => warn!("{}", warning.message),
        }
    }
    Ok(load.config)
}

fn document_paths(source: &SourceConfig) -> DocumentPaths {
    DocumentPaths {
        primary: source.primary_path.clone(),
        supplemental: source.supplemental_path.clone(),
    }
}

fn asset_conventions(assets: &AssetsConfig) -> AssetConventions {
    AssetConventions {
        image_base: assets.image_base.clone(),
        authors_base: assets.authors_base.clone(),
        placeholder: assets.placeholder.clone(),
        max_stills: assets.max_stills,
    }
}

fn request_timeout(source: &SourceConfig) -> Result<std::time::Duration> {
    source
        .request_timeout()
        .with_context(|| format!("invalid request timeout `{}`", source.request_timeout))
}

fn catalogue_source(config: &CatalogueConfig) -> Result<Box<dyn CatalogueSource>> {
    let paths = document_paths(&config.source);
    match config.source.location() {
        Some(SourceLocation::Directory(dir)) => Ok(Box::new(FileCatalogueSource::new(dir, paths))),
        Some(SourceLocation::Remote(url)) => {
            let source = HttpCatalogueSource::new(
                &url,
                paths,
                request_timeout(&config.source)?,
                config.source.cache_bust,
            )?;
            Ok(Box::new(source))
        }
        None => anyhow::bail!("no catalogue source configured"),
    }
}
