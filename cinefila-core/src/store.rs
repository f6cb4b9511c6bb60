//! Caller-owned cache of the merged catalogue.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::catalog::{MergeOptions, MergedFilm, merge_and_sort, unranked_titles};
use crate::error::Result;
use crate::query::FilterEngine;
use crate::source::{CatalogueDocuments, CatalogueSource, fetch_documents};

/// One merged, ordered and immutable catalogue.
#[derive(Debug, Clone)]
pub struct CatalogueSnapshot {
    films: Vec<MergedFilm>,
    loaded_at: DateTime<Utc>,
    generation: u64,
}

impl CatalogueSnapshot {
    /// Merge and order `documents` into a snapshot tagged `generation`.
    pub fn from_documents(
        documents: CatalogueDocuments,
        options: MergeOptions,
        generation: u64,
    ) -> Self {
        Self {
            films: merge_and_sort(documents.primary, &documents.supplemental, options),
            loaded_at: Utc::now(),
            generation,
        }
    }

    /// Films in catalogue order.
    pub fn films(&self) -> &[MergedFilm] {
        &self.films
    }

    /// Number of films.
    pub fn len(&self) -> usize {
        self.films.len()
    }

    /// True when the primary document held no records.
    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    /// When the snapshot was built.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Load ticket; later loads carry larger numbers.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// First film, in catalogue order, whose derived slug equals `slug`.
    /// A linear scan; slugs are not guaranteed unique.
    pub fn find_by_slug(&self, slug: &str) -> Option<&MergedFilm> {
        self.films.iter().find(|film| film.slug() == slug)
    }

    /// Titles of films without a rank, in catalogue order.
    pub fn unranked_titles(&self) -> Vec<&str> {
        unranked_titles(&self.films)
    }

    /// Filter engine over this snapshot.
    pub fn engine(&self) -> FilterEngine<'_> {
        FilterEngine::new(&self.films)
    }
}

/// Holds the current snapshot between loads.
///
/// Each load takes a ticket when it starts. A finished load only replaces
/// the held snapshot if no later-started load has already been installed,
/// so a superseded load is ignored rather than cancelled.
#[derive(Debug, Default)]
pub struct CatalogueStore {
    current: RwLock<Option<Arc<CatalogueSnapshot>>>,
    tickets: AtomicU64,
    options: MergeOptions,
}

impl CatalogueStore {
    /// Empty store whose loads merge with `options`.
    pub fn new(options: MergeOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Fetch, merge and install a snapshot. Returns the snapshot this load
    /// produced, even when a newer one was already installed.
    pub async fn load(&self, source: &dyn CatalogueSource) -> Result<Arc<CatalogueSnapshot>> {
        let generation = self.tickets.fetch_add(1, Ordering::SeqCst) + 1;
        let documents = fetch_documents(source).await?;
        let snapshot = Arc::new(CatalogueSnapshot::from_documents(
            documents,
            self.options,
            generation,
        ));
        self.install(Arc::clone(&snapshot)).await;
        Ok(snapshot)
    }

    /// Install `snapshot` unless a newer generation is already held.
    pub async fn install(&self, snapshot: Arc<CatalogueSnapshot>) -> bool {
        let mut current = self.current.write().await;
        let newer_held = current
            .as_ref()
            .is_some_and(|held| held.generation() > snapshot.generation());

        if newer_held {
            debug!(
                generation = snapshot.generation(),
                "ignoring superseded catalogue load"
            );
            return false;
        }

        info!(
            films = snapshot.len(),
            generation = snapshot.generation(),
            "catalogue snapshot installed"
        );
        *current = Some(snapshot);
        true
    }

    /// The installed snapshot, if any load has succeeded.
    pub async fn snapshot(&self) -> Option<Arc<CatalogueSnapshot>> {
        self.current.read().await.clone()
    }

    /// Drop the installed snapshot.
    pub async fn clear(&self) {
        self.current.write().await.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogueError;
    use async_trait::async_trait;
    use cinefila_model::{FilmRecord, SupplementalEntry, SupplementalTitles};

    struct StaticSource {
        titles: Vec<&'static str>,
        fail: bool,
    }

    #[async_trait]
    impl CatalogueSource for StaticSource {
        async fn fetch_primary(&self) -> Result<Vec<FilmRecord>> {
            Ok(self
                .titles
                .iter()
                .map(|title| {
                    let mut record = FilmRecord::default();
                    record.film.title_english = Some(title.to_string());
                    record
                })
                .collect())
        }

        async fn fetch_supplemental(&self) -> Result<Vec<SupplementalEntry>> {
            if self.fail {
                return Err(CatalogueError::InvalidLocation("offline".into()));
            }
            Ok(vec![SupplementalEntry {
                film: SupplementalTitles {
                    title_english: Some("Wolfie".into()),
                    ..SupplementalTitles::default()
                },
                ranking: Some("2".into()),
                ..SupplementalEntry::default()
            }])
        }

        fn describe(&self) -> String {
            "static".into()
        }
    }

    fn source(titles: Vec<&'static str>) -> StaticSource {
        StaticSource { titles, fail: false }
    }

    #[tokio::test]
    async fn load_installs_sorted_snapshot() {
        let store = CatalogueStore::default();
        assert!(store.snapshot().await.is_none());

        store.load(&source(vec!["Soul Shift", "Wolfie"])).await.unwrap();
        let snapshot = store.snapshot().await.unwrap();
        let titles: Vec<_> = snapshot.films().iter().map(MergedFilm::display_title).collect();
        assert_eq!(titles, vec!["Wolfie", "Soul Shift"]);
        assert_eq!(snapshot.unranked_titles(), vec!["Soul Shift"]);
    }

    #[tokio::test]
    async fn finds_films_by_slug() {
        let store = CatalogueStore::default();
        let snapshot = store.load(&source(vec!["I Died in Irpin"])).await.unwrap();
        assert!(snapshot.find_by_slug("i-died-in-irpin").is_some());
        assert!(snapshot.find_by_slug("missing").is_none());
    }

    #[tokio::test]
    async fn failed_load_keeps_previous_snapshot() {
        let store = CatalogueStore::default();
        store.load(&source(vec!["Wolfie"])).await.unwrap();

        let failing = StaticSource {
            titles: vec!["Other"],
            fail: true,
        };
        assert!(store.load(&failing).await.is_err());
        assert_eq!(store.snapshot().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn older_generation_never_replaces_newer() {
        let store = CatalogueStore::default();
        let older = Arc::new(CatalogueSnapshot::from_documents(
            CatalogueDocuments::default(),
            MergeOptions::default(),
            1,
        ));
        let newer = Arc::new(CatalogueSnapshot::from_documents(
            CatalogueDocuments::default(),
            MergeOptions::default(),
            2,
        ));

        assert!(store.install(newer).await);
        assert!(!store.install(older).await);
        assert_eq!(store.snapshot().await.unwrap().generation(), 2);

        store.clear().await;
        assert!(store.snapshot().await.is_none());
    }
}
