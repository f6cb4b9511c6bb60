use thiserror::Error;
use url::Url;

use super::models::CatalogueConfig;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("{field} must be greater than zero")]
    ZeroStep { field: &'static str },
    #[error("invalid request timeout `{value}`")]
    InvalidTimeout {
        value: String,
        #[source]
        source: humantime::DurationError,
    },
    #[error("no catalogue source configured; set source.base_url or source.data_dir")]
    MissingSource,
    #[error("invalid base URL `{url}`")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(
    config: &CatalogueConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.pagination.catalogue_step == 0 {
        return Err(ConfigGuardRailError::ZeroStep {
            field: "pagination.catalogue_step",
        });
    }
    if config.pagination.preview_step == 0 {
        return Err(ConfigGuardRailError::ZeroStep {
            field: "pagination.preview_step",
        });
    }

    config.source.request_timeout().map_err(|source| {
        ConfigGuardRailError::InvalidTimeout {
            value: config.source.request_timeout.clone(),
            source,
        }
    })?;

    let base_url = config
        .source
        .base_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty());

    if let Some(raw) = base_url {
        let parsed = Url::parse(raw).map_err(|source| {
            ConfigGuardRailError::InvalidBaseUrl {
                url: raw.to_string(),
                source,
            }
        })?;

        if parsed.scheme() == "http" && !config.dev_mode {
            warnings.push_with_hint(
                format!("base URL {raw} uses plain http"),
                "Use https outside development, or set dev_mode = true",
            );
        }
    }

    match (base_url, &config.source.data_dir) {
        (None, None) => return Err(ConfigGuardRailError::MissingSource),
        (Some(_), Some(dir)) => warnings.push_with_hint(
            format!(
                "both source.base_url and source.data_dir are set; reading from {}",
                dir.display()
            ),
            "Unset CINEFILA_DATA_DIR or source.data_dir to fetch over HTTP",
        ),
        _ => {}
    }

    if config.assets.max_stills == 0 {
        warnings.push("assets.max_stills is 0; film pages will show no stills");
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn remote(url: &str) -> CatalogueConfig {
        let mut config = CatalogueConfig::default();
        config.source.base_url = Some(url.to_string());
        config
    }

    #[test]
    fn https_source_passes_cleanly() {
        let warnings = apply_guard_rails(&remote("https://cinefila.example")).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn missing_source_is_rejected() {
        let err = apply_guard_rails(&CatalogueConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigGuardRailError::MissingSource));
    }

    #[test]
    fn zero_step_is_rejected() {
        let mut config = remote("https://cinefila.example");
        config.pagination.preview_step = 0;
        let err = apply_guard_rails(&config).unwrap_err();
        assert_eq!(err.to_string(), "pagination.preview_step must be greater than zero");
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let mut config = remote("https://cinefila.example");
        config.source.request_timeout = "soon".into();
        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::InvalidTimeout { .. })
        ));
    }

    #[test]
    fn plain_http_warns_outside_dev_mode() {
        let mut config = remote("http://localhost:8080");
        assert_eq!(apply_guard_rails(&config).unwrap().len(), 1);
        config.dev_mode = true;
        assert!(apply_guard_rails(&config).unwrap().is_empty());
    }

    #[test]
    fn both_sources_warn_and_keep_directory() {
        let mut config = remote("https://cinefila.example");
        config.source.data_dir = Some(PathBuf::from("/srv/site"));
        let warnings = apply_guard_rails(&config).unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings.items[0].message.contains("/srv/site"));
        assert!(warnings.items[0].hint.is_some());
    }

    #[test]
    fn unparseable_base_url_is_rejected() {
        assert!(matches!(
            apply_guard_rails(&remote("cinefila dot example")),
            Err(ConfigGuardRailError::InvalidBaseUrl { .. })
        ));
    }
}
