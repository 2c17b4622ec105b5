use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::{ CalcEstateError, CalcResult };
use crate::traits::storage::KeyValueStorage;

/// Process-local storage. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one document
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::default();
        if let Ok(mut items) = storage.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
        storage
    }

    fn poisoned(key: &str) -> CalcEstateError {
        CalcEstateError::StorageError {
            key: key.to_string(),
            message: "storage lock poisoned".to_string(),
        }
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get_item(&self, key: &str) -> CalcResult<Option<String>> {
        let items = self.items.lock().map_err(|_| Self::poisoned(key))?;
        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> CalcResult<()> {
        let mut items = self.items.lock().map_err(|_| Self::poisoned(key))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> CalcResult<()> {
        let mut items = self.items.lock().map_err(|_| Self::poisoned(key))?;
        items.remove(key);
        Ok(())
    }
}
