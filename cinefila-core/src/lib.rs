//! # Cinefila Core
//!
//! Core library for the Cinefila film catalogue: turns the site's two JSON
//! documents into one ranked list of films and answers the catalogue page's
//! questions about it.
//!
//! ## Overview
//!
//! - **Record merging**: joins primary records with supplemental editorial
//!   data by normalized title and derives each film's rank
//! - **Ordering**: ranked films first, then the most recently completed
//! - **Runtime parsing**: free-text runtimes to minutes and length buckets
//! - **Filtering**: multi-dimension filters with cascading option
//!   availability, free-text search and "show more" windows
//! - **Sources**: HTTP and local-directory document sources, fetched
//!   concurrently, with a caller-owned snapshot cache
//! - **Presentation**: display titles, counts, excerpts, image paths and
//!   routes
//!
//! ## Architecture
//!
//! - [`catalog`]: title keys, merge and completion dates
//! - [`runtime`]: runtime parser and display runtime
//! - [`query`]: filter engine, sorting and pagination
//! - [`source`]: where the documents come from
//! - [`store`]: immutable snapshots between loads
//! - [`assets`], [`present`], [`routes`]: formatting rules for front ends
//!
//! ## Examples
//!
//! ```no_run
//! use cinefila_core::{
//!     catalog::MergeOptions,
//!     query::{FilterSelection, ShowMoreWindow},
//!     source::{DocumentPaths, FileCatalogueSource},
//!     store::CatalogueStore,
//! };
//!
//! async fn first_page() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = FileCatalogueSource::new("./site", DocumentPaths::default());
//!     let store = CatalogueStore::new(MergeOptions::default());
//!     let snapshot = store.load(&source).await?;
//!
//!     let engine = snapshot.engine();
//!     let selection = FilterSelection::new().with_genre("Documentary");
//!     let visible = engine.visible(&selection);
//!     for film in ShowMoreWindow::catalogue().slice(&visible) {
//!         println!("{}", film.display_title());
//!     }
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Image paths by convention and best-effort probing
pub mod assets;

/// Title normalization, record merging and completion dates
pub mod catalog;

/// Error types for catalogue loading
pub mod error;

/// Display formatting helpers
pub mod present;

/// Filter engine, sorting and pagination
pub mod query;

/// Site routes and film deep links
pub mod routes;

/// Free-text runtime parsing
pub mod runtime;

/// Catalogue document sources
pub mod source;

/// Snapshot cache owned by the caller
pub mod store;

pub use catalog::{MergeOptions, MergedFilm};
pub use error::{CatalogueError, Result};
pub use store::{CatalogueSnapshot, CatalogueStore};

/// Query helper exports grouped for front ends
pub use query::prelude as query_prelude;
