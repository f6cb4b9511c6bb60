pub mod error;

use once_cell::sync::Lazy;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use self::error::ConfigLoadError;
use super::{
    models::{CatalogueConfig, ConfigMetadata, ConfigSource},
    util::{non_blank_var, parse_bool},
    validation::{self, ConfigWarnings},
};

pub const ENV_CONFIG_PATH: &str = "CINEFILA_CONFIG_PATH";
pub const ENV_CONFIG_JSON: &str = "CINEFILA_CONFIG_JSON";
pub const ENV_BASE_URL: &str = "CINEFILA_BASE_URL";
pub const ENV_DATA_DIR: &str = "CINEFILA_DATA_DIR";
pub const ENV_DEV_MODE: &str = "CINEFILA_DEV_MODE";
pub const ENV_CACHE_BUST: &str = "CINEFILA_CACHE_BUST";

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("cinefila.toml"),
        PathBuf::from("cinefila.json"),
        PathBuf::from("config/cinefila.toml"),
    ]
});

/// Environment values that feed the loader. Blank variables count as unset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvOverrides {
    pub config_path: Option<PathBuf>,
    pub config_json: Option<String>,
    pub base_url: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub dev_mode: Option<bool>,
    pub cache_bust: Option<bool>,
}

impl EnvOverrides {
    pub fn gather() -> Result<Self, ConfigLoadError> {
        Self::from_lookup(non_blank_var)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let flag = |name: &'static str| -> Result<Option<bool>, ConfigLoadError> {
            lookup(name)
                .map(|raw| {
                    parse_bool(&raw).ok_or(ConfigLoadError::InvalidEnv { name, value: raw })
                })
                .transpose()
        };

        Ok(Self {
            config_path: lookup(ENV_CONFIG_PATH).map(PathBuf::from),
            config_json: lookup(ENV_CONFIG_JSON),
            base_url: lookup(ENV_BASE_URL).map(|url| url.trim().to_string()),
            data_dir: lookup(ENV_DATA_DIR).map(PathBuf::from),
            dev_mode: flag(ENV_DEV_MODE)?,
            cache_bust: flag(ENV_CACHE_BUST)?,
        })
    }

    fn apply(&self, config: &mut CatalogueConfig) {
        let applied = &mut config.metadata.env_overrides;
        if let Some(url) = &self.base_url {
            config.source.base_url = Some(url.clone());
            applied.push(ENV_BASE_URL);
        }
        if let Some(dir) = &self.data_dir {
            config.source.data_dir = Some(dir.clone());
            applied.push(ENV_DATA_DIR);
        }
        if let Some(dev_mode) = self.dev_mode {
            config.dev_mode = dev_mode;
            applied.push(ENV_DEV_MODE);
        }
        if let Some(cache_bust) = self.cache_bust {
            config.source.cache_bust = cache_bust;
            applied.push(ENV_CACHE_BUST);
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    pub skip_env_file: bool,
    /// Directory the default config file candidates are resolved against.
    pub working_dir: Option<PathBuf>,
    pub base_url: Option<String>,
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: CatalogueConfig,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Do not read a `.env` file at all.
    pub fn without_env_file(mut self) -> Self {
        self.options.skip_env_file = true;
        self
    }

    pub fn with_working_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.options.working_dir = Some(dir.into());
        self
    }

    pub fn with_base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.options.base_url = Some(url.into());
        self
    }

    pub fn with_data_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.options.data_dir = Some(dir.into());
        self
    }

    /// Load using the process environment, after reading `.env` if present.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;
        let mut load = self.load_with(non_blank_var)?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Load with an explicit environment lookup. No `.env` file is read.
    pub fn load_with<F>(&self, lookup: F) -> Result<ConfigLoad, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = EnvOverrides::from_lookup(lookup)?;

        let (mut config, source) = self.load_file_layer(&env)?;
        config.metadata = ConfigMetadata {
            source,
            ..ConfigMetadata::default()
        };
        env.apply(&mut config);

        if let Some(url) = &self.options.base_url {
            config.source.base_url = Some(url.clone());
        }
        if let Some(dir) = &self.options.data_dir {
            config.source.data_dir = Some(dir.clone());
        }

        let warnings = validation::apply_guard_rails(&config)?;
        info!(
            source = ?config.metadata.source,
            env_overrides = config.metadata.env_overrides.len(),
            warnings = warnings.len(),
            "configuration loaded"
        );

        Ok(ConfigLoad { config, warnings })
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        if self.options.skip_env_file {
            return Ok(false);
        }
        let loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true),
            None => dotenvy::dotenv().map(|_| true),
        };
        loaded.or_else(|err| match err {
            dotenvy::Error::Io(_) => Ok(false),
            other => Err(other.into()),
        })
    }

    fn load_file_layer(
        &self,
        env: &EnvOverrides,
    ) -> Result<(CatalogueConfig, ConfigSource), ConfigLoadError> {
        if let Some(path) = &self.options.config_path {
            let config = load_required(path)?;
            return Ok((config, ConfigSource::Explicit(path.clone())));
        }

        if let Some(path) = &env.config_path {
            let config = load_required(path)?;
            return Ok((config, ConfigSource::EnvPath(path.clone())));
        }

        if let Some(inline) = &env.config_json {
            let config = serde_json::from_str(inline).map_err(|err| ConfigLoadError::Parse {
                origin: ENV_CONFIG_JSON.to_string(),
                reason: err.to_string(),
            })?;
            return Ok((config, ConfigSource::EnvInline));
        }

        let found = DEFAULT_CONFIG_LOCATIONS
            .iter()
            .map(|candidate| match &self.options.working_dir {
                Some(dir) => dir.join(candidate),
                None => candidate.clone(),
            })
            .find(|candidate| candidate.is_file());

        match found {
            Some(path) => {
                let config = load_from_file(&path)?;
                Ok((config, ConfigSource::File(path)))
            }
            None => {
                debug!("no config file found; using defaults");
                Ok((CatalogueConfig::default(), ConfigSource::Default))
            }
        }
    }
}

fn load_required(path: &Path) -> Result<CatalogueConfig, ConfigLoadError> {
    if !path.exists() {
        return Err(ConfigLoadError::MissingConfig {
            path: path.to_path_buf(),
        });
    }
    load_from_file(path)
}

/// Read a config file, choosing the format by extension. Files without a
/// known extension are tried as TOML, then JSON.
pub fn load_from_file(path: &Path) -> Result<CatalogueConfig, ConfigLoadError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let origin = path.display().to_string();

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("toml") => toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
            origin,
            reason: err.to_string(),
        }),
        Some("json") => {
            serde_json::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                origin,
                reason: err.to_string(),
            })
        }
        _ => parse_from_str(&contents, &origin),
    }
}

/// Parse configuration text as TOML, falling back to JSON.
pub fn parse_from_str(contents: &str, origin: &str) -> Result<CatalogueConfig, ConfigLoadError> {
    match toml::from_str::<CatalogueConfig>(contents) {
        Ok(config) => Ok(config),
        Err(toml_err) => serde_json::from_str(contents).map_err(|json_err| {
            ConfigLoadError::Parse {
                origin: origin.to_string(),
                reason: format!("not TOML ({toml_err}); not JSON ({json_err})"),
            }
        }),
    }
}
