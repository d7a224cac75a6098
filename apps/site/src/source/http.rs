use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::{DocumentSource, LoadError};

/// Fetches documents from a static HTTP origin, e.g. the site's own `data/`
/// directory behind a CDN. One attempt per load, no retries, and the client's
/// default (unbounded) timeout.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base: Url,
}

impl HttpSource {
    pub fn new(base: Url) -> Self {
        Self {
            client: Client::new(),
            base: with_trailing_slash(base),
        }
    }

    fn url_for(&self, location: &str) -> Result<Url, LoadError> {
        self.base
            .join(location)
            .map_err(|e| LoadError::Transport {
                location: location.to_string(),
                message: e.to_string(),
            })
    }
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, LoadError> {
        let url = self.url_for(location)?;
        let transport = |e: reqwest::Error| LoadError::Transport {
            location: location.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                location: location.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        Ok(body.to_vec())
    }

    fn describe(&self) -> String {
        format!("origin {}", self.base)
    }
}
