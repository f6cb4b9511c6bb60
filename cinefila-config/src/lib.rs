//! Configuration library for the Cinefila catalogue tools.
//!
//! Settings are layered: built-in defaults, then one config file (TOML or
//! JSON), then environment overrides, then whatever the caller passes
//! explicitly. The result goes through guard rails that reject unusable
//! setups and collect warnings for questionable ones.

#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, EnvOverrides, error::ConfigLoadError,
    load_from_file, parse_from_str,
};
pub use models::{
    AssetsConfig, CatalogueConfig, ConfigMetadata, ConfigSource, PaginationConfig,
    SourceConfig, SourceLocation,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
