use std::io::ErrorKind;
use std::path::{ Path, PathBuf };

use async_trait::async_trait;
use log::{ debug, trace };

use crate::errors::{ CalcEstateError, CalcResult };
use crate::traits::storage::KeyValueStorage;

/// Stores each key as `<sanitized key>.json` inside a data directory
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    root: PathBuf,
}

impl JsonFileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `key`, e.g. `@calcestate_properties` -> `calcestate_properties.json`
    pub fn path_for(&self, key: &str) -> PathBuf {
        let sanitized: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        let sanitized = sanitized.trim_start_matches('_');
        let name = if sanitized.is_empty() { "default" } else { sanitized };
        self.root.join(format!("{}.json", name))
    }

    fn storage_error(key: &str, err: std::io::Error) -> CalcEstateError {
        CalcEstateError::StorageError {
            key: key.to_string(),
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl KeyValueStorage for JsonFileStorage {
    async fn get_item(&self, key: &str) -> CalcResult<Option<String>> {
        let path = self.path_for(key);
        trace!("Reading {} from {}", key, path.display());
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No document stored under {}", key);
                Ok(None)
            }
            Err(e) => Err(Self::storage_error(key, e)),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> CalcResult<()> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| Self::storage_error(key, e))?;
        let path = self.path_for(key);
        trace!("Writing {} bytes for {} to {}", value.len(), key, path.display());
        tokio::fs::write(&path, value).await.map_err(|e| Self::storage_error(key, e))
    }

    async fn remove_item(&self, key: &str) -> CalcResult<()> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::storage_error(key, e)),
        }
    }
}
