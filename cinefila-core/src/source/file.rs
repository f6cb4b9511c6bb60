use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cinefila_model::{FilmRecord, SupplementalEntry};

use super::lenient::{decode_lenient, decode_strict};
use super::{CatalogueSource, DocumentPaths};
use crate::error::{CatalogueError, Result};

/// Reads both documents from a local data directory, e.g. an offline copy
/// of the site.
#[derive(Debug, Clone)]
pub struct FileCatalogueSource {
    root: PathBuf,
    paths: DocumentPaths,
}

impl FileCatalogueSource {
    /// Source rooted at a local copy of the site.
    pub fn new(root: impl Into<PathBuf>, paths: DocumentPaths) -> Self {
        Self {
            root: root.into(),
            paths,
        }
    }

    /// Directory the document paths are relative to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn read(&self, relative: &str) -> Result<Vec<u8>> {
        let path = self.root.join(relative.trim_start_matches('/'));
        tokio::fs::read(&path)
            .await
            .map_err(|source| CatalogueError::Io {
                path: path.display().to_string(),
                source,
            })
    }
}

#[async_trait]
impl CatalogueSource for FileCatalogueSource {
    async fn fetch_primary(&self) -> Result<Vec<FilmRecord>> {
        let bytes = self.read(&self.paths.primary).await?;
        decode_strict(&self.paths.primary, &bytes)
    }

    async fn fetch_supplemental(&self) -> Result<Vec<SupplementalEntry>> {
        let bytes = self.read(&self.paths.supplemental).await?;
        decode_lenient(&self.paths.supplemental, &bytes)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fetch_documents;
    use tempfile::TempDir;

    fn write(dir: &TempDir, relative: &str, contents: &str) {
        let path = dir.path().join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    #[tokio::test]
    async fn reads_both_documents() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "data/all_html_data.json",
            r#"[{"Film": {"Title_Original": "Vlk", "Title_English": "Wolfie"}}]"#,
        );
        write(
            &dir,
            "data/aditional_info.json",
            r#"[{"Film": {"Title_Original": "Vlk"}, "Ranking": "2",}]"#,
        );

        let source = FileCatalogueSource::new(dir.path(), DocumentPaths::default());
        let documents = fetch_documents(&source).await.unwrap();
        assert_eq!(documents.primary.len(), 1);
        assert_eq!(documents.primary[0].display_title(), "Wolfie");
        assert_eq!(documents.supplemental[0].ranking.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn missing_document_fails_the_load() {
        let dir = TempDir::new().unwrap();
        write(&dir, "data/all_html_data.json", "[]");

        let source = FileCatalogueSource::new(dir.path(), DocumentPaths::default());
        let err = fetch_documents(&source).await.unwrap_err();
        assert!(
            matches!(err, CatalogueError::Io { ref path, .. } if path.ends_with("aditional_info.json"))
        );
    }

    #[tokio::test]
    async fn primary_document_is_strict() {
        let dir = TempDir::new().unwrap();
        write(&dir, "data/all_html_data.json", "[{},]");
        write(&dir, "data/aditional_info.json", "[]");

        let source = FileCatalogueSource::new(dir.path(), DocumentPaths::default());
        let err = source.fetch_primary().await.unwrap_err();
        assert!(matches!(err, CatalogueError::Decode { .. }));
    }
}
