mod config_tests;
mod file_storage_tests;
mod property_store_tests;

use async_trait::async_trait;

use crate::errors::{ CalcEstateError, CalcResult };
use crate::traits::storage::KeyValueStorage;

// Initialize logging once for whichever test runs first
pub(crate) fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Storage that reads fine but rejects every write
pub(crate) struct ReadOnlyStorage {
    pub(crate) contents: Option<String>,
}

#[async_trait]
impl KeyValueStorage for ReadOnlyStorage {
    async fn get_item(&self, _key: &str) -> CalcResult<Option<String>> {
        Ok(self.contents.clone())
    }

    async fn set_item(&self, key: &str, _value: &str) -> CalcResult<()> {
        Err(CalcEstateError::StorageError {
            key: key.to_string(),
            message: "disk full".to_string(),
        })
    }

    async fn remove_item(&self, _key: &str) -> CalcResult<()> {
        Ok(())
    }
}

/// Storage whose reads always fail
pub(crate) struct UnreadableStorage;

#[async_trait]
impl KeyValueStorage for UnreadableStorage {
    async fn get_item(&self, key: &str) -> CalcResult<Option<String>> {
        Err(CalcEstateError::StorageError {
            key: key.to_string(),
            message: "permission denied".to_string(),
        })
    }

    async fn set_item(&self, _key: &str, _value: &str) -> CalcResult<()> {
        Ok(())
    }

    async fn remove_item(&self, _key: &str) -> CalcResult<()> {
        Ok(())
    }
}
