use async_trait::async_trait;

use crate::errors::CalcResult;

/// Local key-value storage holding whole JSON documents under fixed keys
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read the document stored under `key`, `None` if nothing was ever written
    async fn get_item(&self, key: &str) -> CalcResult<Option<String>>;

    /// Replace the document stored under `key`
    async fn set_item(&self, key: &str, value: &str) -> CalcResult<()>;

    /// Delete the document stored under `key`. Missing keys are not an error.
    async fn remove_item(&self, key: &str) -> CalcResult<()>;
}
