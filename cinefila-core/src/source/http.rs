use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use cinefila_model::{FilmRecord, SupplementalEntry};
use tracing::debug;
use url::Url;

use super::lenient::{decode_lenient, decode_strict};
use super::{CatalogueSource, DocumentPaths};
use crate::error::{CatalogueError, Result};

/// Fetches both documents over HTTP GET from a site root.
///
/// With cache busting on, every request carries `?t=<unix millis>` so
/// intermediaries never serve a stale catalogue.
#[derive(Debug, Clone)]
pub struct HttpCatalogueSource {
    client: reqwest::Client,
    base: Url,
    paths: DocumentPaths,
    cache_bust: bool,
}

impl HttpCatalogueSource {
    /// Source with its own client and request timeout.
    pub fn new(
        base_url: &str,
        paths: DocumentPaths,
        timeout: Duration,
        cache_bust: bool,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| CatalogueError::Request {
                url: base_url.to_string(),
                source,
            })?;
        Self::with_client(client, base_url, paths, cache_bust)
    }

    /// Source sharing an existing client. `base_url` is treated as a
    /// directory even without a trailing slash.
    pub fn with_client(
        client: reqwest::Client,
        base_url: &str,
        paths: DocumentPaths,
        cache_bust: bool,
    ) -> Result<Self> {
        Ok(Self {
            client,
            base: base_directory(base_url)?,
            paths,
            cache_bust,
        })
    }

    /// URL of a document, with the cache-busting parameter when enabled.
    pub fn document_url(&self, relative: &str) -> Result<Url> {
        let mut url = self
            .base
            .join(relative.trim_start_matches('/'))
            .map_err(|err| CatalogueError::InvalidLocation(format!("{relative}: {err}")))?;
        if self.cache_bust {
            url.query_pairs_mut()
                .append_pair("t", &Utc::now().timestamp_millis().to_string());
        }
        Ok(url)
    }

    async fn get(&self, relative: &str) -> Result<Vec<u8>> {
        let url = self.document_url(relative)?;
        debug!(%url, "fetching catalogue document");

        let response = self.client.get(url.clone()).send().await.map_err(|source| {
            CatalogueError::Request {
                url: url.to_string(),
                source,
            }
        })?;

        if !response.status().is_success() {
            return Err(CatalogueError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| CatalogueError::Request {
                url: url.to_string(),
                source,
            })?;
        Ok(bytes.to_vec())
    }
}

/// Parse `base_url` so relative joins append to its path instead of
/// replacing the last segment.
pub(crate) fn base_directory(base_url: &str) -> Result<Url> {
    let mut base = Url::parse(base_url.trim())
        .map_err(|err| CatalogueError::InvalidLocation(format!("{base_url}: {err}")))?;
    if base.cannot_be_a_base() {
        return Err(CatalogueError::InvalidLocation(base_url.to_string()));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base)
}

#[async_trait]
impl CatalogueSource for HttpCatalogueSource {
    async fn fetch_primary(&self) -> Result<Vec<FilmRecord>> {
        let bytes = self.get(&self.paths.primary).await?;
        decode_strict(&self.paths.primary, &bytes)
    }

    async fn fetch_supplemental(&self) -> Result<Vec<SupplementalEntry>> {
        let bytes = self.get(&self.paths.supplemental).await?;
        decode_lenient(&self.paths.supplemental, &bytes)
    }

    fn describe(&self) -> String {
        self.base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fetch_documents;
    use reqwest::StatusCode;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves `body` for paths listed in `found`, 404 for everything else.
    async fn serve(found: &'static [&'static str], body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                tokio::spawn(async move {
                    let mut request = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                        match stream.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => request.extend_from_slice(&chunk[..n]),
                        }
                    }
                    let head = String::from_utf8_lossy(&request);
                    let path = head
                        .split_whitespace()
                        .nth(1)
                        .unwrap_or("/")
                        .split('?')
                        .next()
                        .unwrap_or("/")
                        .to_string();
                    let (status, payload) = if found.contains(&path.as_str()) {
                        ("200 OK", body)
                    } else {
                        ("404 Not Found", "")
                    };
                    let response = format!(
                        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{payload}",
                        payload.len()
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });
        format!("http://{addr}/")
    }

    fn source(base: &str, cache_bust: bool) -> HttpCatalogueSource {
        HttpCatalogueSource::with_client(
            reqwest::Client::new(),
            base,
            DocumentPaths::default(),
            cache_bust,
        )
        .unwrap()
    }

    #[test]
    fn joins_documents_under_the_base_path() {
        let source = source("https://cinefila.example/site", false);
        assert_eq!(
            source.document_url("data/all_html_data.json").unwrap().as_str(),
            "https://cinefila.example/site/data/all_html_data.json"
        );
        assert_eq!(
            source.document_url("/data/aditional_info.json").unwrap().as_str(),
            "https://cinefila.example/site/data/aditional_info.json"
        );
    }

    #[test]
    fn cache_busting_appends_timestamp() {
        let source = source("https://cinefila.example/", true);
        let url = source.document_url("data/all_html_data.json").unwrap();
        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "t");
        assert!(value.parse::<i64>().unwrap() > 0);
    }

    #[test]
    fn rejects_unusable_base_urls() {
        for base in ["not a url", "mailto:films@cinefila.example"] {
            let result = HttpCatalogueSource::with_client(
                reqwest::Client::new(),
                base,
                DocumentPaths::default(),
                false,
            );
            assert!(matches!(result, Err(CatalogueError::InvalidLocation(_))));
        }
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let base = serve(&[], "").await;
        let source = source(&base, true);
        match source.fetch_primary().await {
            Err(CatalogueError::Status { status, url }) => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert!(url.contains("data/all_html_data.json"));
            }
            other => panic!("expected a status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_supplemental_document_fails_the_load() {
        let base = serve(&["/data/all_html_data.json"], "[]").await;
        let source = source(&base, false);
        assert!(source.fetch_primary().await.unwrap().is_empty());
        assert!(matches!(
            fetch_documents(&source).await,
            Err(CatalogueError::Status { status, .. }) if status == StatusCode::NOT_FOUND
        ));
    }

    #[tokio::test]
    async fn refused_connection_is_a_request_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let source = source(&format!("http://{addr}/"), false);
        assert!(matches!(
            source.fetch_supplemental().await,
            Err(CatalogueError::Request { .. })
        ));
    }
}
