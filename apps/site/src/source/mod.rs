//! Where résumé documents come from.
//!
//! Both page flows load exactly one JSON document per request through a
//! [`DocumentSource`]. Every failure mode collapses into [`LoadError`]; the
//! page handlers decide what the visitor sees.

pub mod fs;
pub mod http;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

pub use self::fs::FsSource;
pub use self::http::HttpSource;

/// Location of the index document, relative to the source root.
pub const INDEX_LOCATION: &str = "resumes.json";

pub fn resume_location(id: &str) -> String {
    format!("{id}.json")
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("transport error loading {location}: {message}")]
    Transport { location: String, message: String },

    #[error("{location} returned status {status}")]
    Status { location: String, status: u16 },

    #[error("{location} does not exist")]
    NotFound { location: String },

    #[error("{location} is not a valid document: {cause}")]
    Malformed {
        location: String,
        #[source]
        cause: serde_json::Error,
    },

    #[error("no resume identifier in path {path:?}")]
    MissingIdentifier { path: String },
}

/// A read-only store of JSON documents addressed by relative location.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Raw bytes of the document at `location`.
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, LoadError>;

    /// Human-readable description for startup logs.
    fn describe(&self) -> String;
}

/// Fetches `location` and parses it as `T`. Parsing only starts once the
/// whole body has been read.
pub async fn load_json<T: DeserializeOwned>(
    source: &dyn DocumentSource,
    location: &str,
) -> Result<T, LoadError> {
    let body = source.fetch(location).await?;
    let document = serde_json::from_slice(&body).map_err(|cause| LoadError::Malformed {
        location: location.to_string(),
        cause,
    })?;
    debug!(location, bytes = body.len(), "document loaded");
    Ok(document)
}
