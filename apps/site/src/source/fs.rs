use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use super::{DocumentSource, LoadError};

/// Reads documents from a local data directory.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DocumentSource for FsSource {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, LoadError> {
        let path = self.root.join(location);
        tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::NotFound {
                location: location.to_string(),
            },
            _ => LoadError::Transport {
                location: location.to_string(),
                message: e.to_string(),
            },
        })
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}
