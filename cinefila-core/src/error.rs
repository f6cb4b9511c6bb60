use thiserror::Error;

/// Failures that abort a catalogue load.
///
/// Missing or malformed fields inside a document are never errors; they
/// degrade to fallbacks. Only a source that cannot be read or decoded at all
/// ends up here, and either source failing fails the whole load.
#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode {document}: {source}")]
    Decode {
        document: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid source location: {0}")]
    InvalidLocation(String),
}

/// Result alias for catalogue operations.
pub type Result<T> = std::result::Result<T, CatalogueError>;
